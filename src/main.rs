//! rkscan - compare two text files and print the similarity analysis as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rkscan::{RkscanConfig, analyze_with_config};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rkscan")]
#[command(about = "Windowed rolling-hash text similarity (exact and partial span matching)", long_about = None)]
struct Cli {
    /// Original document.
    #[arg(long)]
    source: PathBuf,
    /// Document checked against the source.
    #[arg(long)]
    suspect: PathBuf,
    /// Window size in words; overrides the config file.
    #[arg(long)]
    window_size: Option<usize>,
    /// YAML configuration file.
    #[arg(long, env = "RKSCAN_CONFIG")]
    config: Option<PathBuf>,
    /// Pretty-print the JSON result.
    #[arg(long)]
    pretty: bool,
    /// Log as JSON lines on stderr.
    #[arg(long)]
    log_json: bool,
    /// Log filter directive; `RUST_LOG` takes precedence when set.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    init_tracing(&level, cli.log_json || config.logging.json);

    let output = run(&cli, &config)?;
    println!("{output}");

    Ok(())
}

fn load_config(cli: &Cli) -> Result<RkscanConfig> {
    match &cli.config {
        Some(path) => RkscanConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(RkscanConfig::default()),
    }
}

/// Runs one comparison and renders the result as JSON.
fn run(cli: &Cli, config: &RkscanConfig) -> Result<String> {
    let mut match_cfg = config.match_config()?;
    if let Some(window_size) = cli.window_size {
        match_cfg = match_cfg.with_window_size(window_size);
    }

    let source = read_document(&cli.source)
        .with_context(|| format!("reading source {}", cli.source.display()))?;
    let suspect = read_document(&cli.suspect)
        .with_context(|| format!("reading suspect {}", cli.suspect.display()))?;

    let result = analyze_with_config(&source, &suspect, &match_cfg)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(json)
}

/// Invalid UTF-8 becomes U+FFFD, which canonicalization then drops.
fn read_document(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
