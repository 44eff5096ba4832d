use anyhow::Result;
use clap::Parser;
use postermark::processor::{BatchSummary, ProcessOptions, Processor};
use postermark::providers::{OmdbClient, TmdbClient};
use postermark::{config, scanner};
use std::path::PathBuf;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "postermark=trace,postermark_overlay=debug,postermark_parser=debug".to_string()
        } else {
            "postermark=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();

    match cli.command {
        Commands::Run {
            libraries,
            dry_run,
            overwrite,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run(cli.config.as_deref(), libraries, dry_run, overwrite))
        }
        Commands::Parse { name } => parse_name(&name),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path)
        }
        Commands::Version => {
            println!("postermark {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn run(
    config_path: Option<&std::path::Path>,
    libraries: Vec<PathBuf>,
    dry_run: bool,
    overwrite: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    let libraries = if libraries.is_empty() {
        config.library.paths.clone()
    } else {
        libraries
    };
    if libraries.is_empty() {
        anyhow::bail!("No libraries configured; set [library] paths or pass --library");
    }

    let tmdb_api_key = config
        .providers
        .tmdb_api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("providers.tmdb_api_key is required for run"))?;
    let omdb_api_key = config
        .providers
        .omdb_api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("providers.omdb_api_key is required for run"))?;

    let processor = Processor::new(
        Box::new(TmdbClient::new(tmdb_api_key)),
        Box::new(OmdbClient::new(omdb_api_key)),
        ProcessOptions {
            style: config.overlay.style,
            sources: config.overlay.sources.clone(),
            overwrite: overwrite || config.overlay.overwrite,
            dry_run,
        },
    );

    let mut totals = BatchSummary::default();
    for library in &libraries {
        let summary = processor.process_library(library).await?;
        totals.processed += summary.processed;
        totals.written += summary.written;
        totals.skipped += summary.skipped;
        totals.failed += summary.failed;
    }

    println!(
        "Processed {} items: {} written, {} skipped, {} failed",
        totals.processed, totals.written, totals.skipped, totals.failed
    );
    Ok(())
}

fn parse_name(name: &str) -> Result<()> {
    let parsed = postermark_parser::parse(name);

    println!("Title:   {}", parsed.title);
    match parsed.year {
        Some(year) => println!("Year:    {year}"),
        None => println!("Year:    -"),
    }
    println!("IMDb:    {}", parsed.imdb_id.as_deref().unwrap_or("-"));
    println!("TMDB:    {}", parsed.tmdb_id.as_deref().unwrap_or("-"));
    println!("TVDB:    {}", parsed.tvdb_id.as_deref().unwrap_or("-"));

    // A folder path also shows its detected kind.
    let path = std::path::Path::new(name);
    if path.is_dir() {
        println!("Kind:    {}", scanner::detect_kind(path));
    }

    Ok(())
}

fn validate_config(path: Option<PathBuf>) -> Result<()> {
    let config = config::load_config_or_default(path.as_deref())?;
    config::validate_config(&config)?;

    println!("Configuration is valid");
    println!("  libraries: {}", config.library.paths.len());
    println!("  style:     {:?}", config.overlay.style);
    println!(
        "  tmdb key:  {}",
        if config.providers.tmdb_api_key.is_some() {
            "set"
        } else {
            "missing"
        }
    );
    println!(
        "  omdb key:  {}",
        if config.providers.omdb_api_key.is_some() {
            "set"
        } else {
            "missing"
        }
    );
    Ok(())
}
