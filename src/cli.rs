use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postermark")]
#[command(author, version, about = "Ratings-overlay poster generator for media libraries")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan configured libraries and render ratings posters
    Run {
        /// Library roots to scan (overrides the config's library paths)
        #[arg(long = "library")]
        libraries: Vec<PathBuf>,

        /// Show what would be done without writing any posters
        #[arg(long)]
        dry_run: bool,

        /// Re-render folders that already have a poster
        #[arg(long)]
        overwrite: bool,
    },

    /// Parse a folder name and display the extracted identity fields
    Parse {
        /// Folder name to parse
        #[arg(required = true)]
        name: String,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default locations if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
