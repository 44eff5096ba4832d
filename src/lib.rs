//! Postermark - ratings-overlay poster generator for media libraries.
//!
//! This library crate exposes the application modules for integration
//! testing; the binary entry point lives in `main.rs`.

pub mod config;
pub mod processor;
pub mod providers;
pub mod ratings;
pub mod scanner;
