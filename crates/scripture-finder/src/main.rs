//! scripture-finder - look up verses cited in free-form text

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scripture_refs::parse_references;
use scripture_store::{MemoryStore, retrieve, retrieve_concurrent};

mod config;
mod output;

use config::{FinderConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "scripture-finder")]
#[command(version)]
#[command(about = "Find scripture verses cited in Chinese/English text", long_about = None)]
struct Cli {
    /// Text containing citations, e.g. "启一1" or "Gen 1:1-3" (reads stdin when omitted)
    text: Vec<String>,

    /// JSON verse corpus (defaults to the bundled sample)
    #[arg(long)]
    store: Option<PathBuf>,

    /// YAML config file (defaults to ./scripture-finder.yml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    format: Option<OutputFormat>,

    /// Print the resolved references without looking up verse text
    #[arg(long)]
    parse_only: bool,

    /// Dispatch verse lookups concurrently
    #[arg(long)]
    concurrent: bool,
}

/// Effective settings after layering command-line flags over the config file.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    concurrent: bool,
    store: Option<PathBuf>,
}

impl Settings {
    fn resolve(cli: &Cli, config: FinderConfig) -> Self {
        Self {
            format: cli.format.unwrap_or(config.format),
            concurrent: cli.concurrent || config.concurrent,
            store: cli.store.clone().or(config.store),
        }
    }
}

fn read_input(args: &[String], mut stdin: impl Read) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut input = String::new();
    stdin
        .read_to_string(&mut input)
        .context("Failed to read citations from stdin")?;
    Ok(input)
}

fn run(cli: &Cli, stdin: impl Read, out: &mut impl Write) -> Result<()> {
    let config = FinderConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(cli, config);

    let input = read_input(&cli.text, stdin)?;
    let refs = parse_references(&input);
    tracing::debug!(references = refs.len(), "Resolved citations");

    if cli.parse_only {
        writeln!(out, "{}", output::render_references(&refs, settings.format)?)?;
        return Ok(());
    }

    let store = match &settings.store {
        Some(path) => MemoryStore::load(path)?,
        None => MemoryStore::sample()?,
    };

    let records = if settings.concurrent {
        pollster::block_on(retrieve_concurrent(&store, &refs))?
    } else {
        pollster::block_on(retrieve(&store, &refs))?
    };

    if records.is_empty() && settings.format == OutputFormat::Text {
        eprintln!("No valid references found.");
        return Ok(());
    }

    writeln!(out, "{}", output::render_records(&records, settings.format)?)?;
    Ok(())
}

fn main() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scripture_finder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run(&cli, std::io::stdin(), &mut std::io::stdout().lock())
}
