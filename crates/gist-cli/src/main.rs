//! Gist CLI - Command-line interface
//!
//! Usage:
//!   gist summarize <annotations.json>
//!   gist dump <annotations.json>
//!   gist normalize <document.txt>

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use gist_core::{GistConfig, LoggingConfig};
use gist_parser::{dump_path, read_text, AnnotationParser, JsonAnnotationParser};
use gist_summarizer::{ingest, Pipeline};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gist")]
#[command(about = "Compress a document into one mini-sentence per sentence")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize annotator output
    Summarize {
        /// Annotator output (JSON)
        path: PathBuf,
        /// Minimum triple confidence (overrides config)
        #[arg(long)]
        min_confidence: Option<f64>,
        /// Do not splice date phrases back into the summary
        #[arg(long)]
        no_time_fusion: bool,
        /// Write the diagnostic dump of surviving sentences next to the input
        #[arg(long)]
        dump: bool,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every sentence with its unfiltered triples and entities
    Dump {
        /// Annotator output (JSON)
        path: PathBuf,
    },
    /// Prepare a plain-text document for the annotator
    Normalize {
        /// Plain-text document
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.logging);

    match cli.command {
        Commands::Summarize {
            path,
            min_confidence,
            no_time_fusion,
            dump,
            json,
        } => {
            let mut config = config;
            if let Some(threshold) = min_confidence {
                config.pipeline.min_confidence = threshold;
            }
            if no_time_fusion {
                config.pipeline.fuse_time = false;
            }
            if dump {
                config.output.write_dump = true;
            }
            config.validate()?;

            summarize(&path, &config, json)?;
        }
        Commands::Dump { path } => {
            let document = JsonAnnotationParser
                .parse(&path)
                .with_context(|| format!("Failed to load annotations from {}", path.display()))?;
            print!("{}", ingest(&document, &config.pipeline).dump());
        }
        Commands::Normalize { path } => {
            let text = read_text(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            println!("{}", text.trim_end());
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GistConfig> {
    let config = match path {
        Some(path) => GistConfig::from_file(path)?.with_env_override()?,
        None => GistConfig::from_env()?,
    };
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(logging.include_location)
        .with_line_number(logging.include_location);

    if logging.json_format {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn summarize(path: &Path, config: &GistConfig, json: bool) -> anyhow::Result<()> {
    let document = JsonAnnotationParser
        .parse(path)
        .with_context(|| format!("Failed to load annotations from {}", path.display()))?;

    tracing::debug!(
        sentences = document.sentences.len(),
        triples = document.triple_count(),
        "Loaded annotations"
    );

    let mut ingested = ingest(&document, &config.pipeline);
    let report = Pipeline::new(config.pipeline.clone()).run(&mut ingested.network)?;

    // Written after the run so only surviving sentences and triples appear
    if config.output.write_dump {
        let target = dump_path(path, &config.output.dump_suffix);
        std::fs::write(&target, ingested.dump())
            .with_context(|| format!("Failed to write dump to {}", target.display()))?;
        tracing::info!(path = %target.display(), "Wrote diagnostic dump");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary.trim_end());
        tracing::info!("{}", report.stats);
    }

    Ok(())
}
