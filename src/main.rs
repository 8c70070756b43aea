use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::sync::Arc;

use tagview::{InteractiveApp, ProcessBackend, TagBackend, telemetry};

#[derive(Parser)]
#[command(
    name = "tagview",
    version,
    about = "Interactive client for searching a tag-indexed file archive",
    long_about = None
)]
struct Cli {
    /// Search query; omit to start the interactive UI
    query: Option<String>,

    /// Command line of the archive engine (spawned, spoken to over stdio)
    #[arg(short, long, env = "TAGVIEW_BACKEND")]
    backend: String,

    /// Force the interactive UI even when a query is given
    #[arg(short, long)]
    interactive: bool,

    /// Output format for one-shot queries
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct QueryRow {
    file_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let backend: Arc<dyn TagBackend> = Arc::new(ProcessBackend::spawn(&cli.backend)?);

    match (&cli.query, cli.interactive) {
        (Some(query), false) => run_query(backend.as_ref(), query, cli.format),
        _ => InteractiveApp::new(backend).run(),
    }
}

/// One-shot query: search, hydrate every hash, print. Per-item failures
/// are printed inline; only a failed search aborts.
fn run_query(backend: &dyn TagBackend, query: &str, format: OutputFormat) -> Result<()> {
    let hashes = backend
        .do_search(query)
        .map_err(|e| anyhow::anyhow!(e.message))
        .context("search failed")?;

    match format {
        OutputFormat::Text => {
            if hashes.is_empty() {
                println!("No results for \"{query}\"");
                return Ok(());
            }
            for hash in &hashes {
                match backend.get_result(hash) {
                    Ok(record) => {
                        println!("{}  {}", record.file_name.green(), record.image_path.dimmed());
                    }
                    Err(e) => {
                        println!("{} {}: {}", "✗".red(), e.file_hash.red(), e.message);
                    }
                }
            }
        }
        OutputFormat::Json => {
            let rows: Vec<QueryRow> = hashes
                .iter()
                .map(|hash| match backend.get_result(hash) {
                    Ok(record) => QueryRow {
                        file_hash: hash.clone(),
                        file_name: Some(record.file_name),
                        image_path: Some(record.image_path),
                        error: None,
                    },
                    Err(e) => QueryRow {
                        file_hash: hash.clone(),
                        file_name: None,
                        image_path: None,
                        error: Some(e.message),
                    },
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}
