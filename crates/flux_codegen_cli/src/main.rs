//! flux-codegen: host adapter for the dispatch source generator.
//!
//! Invoked once per compilation round by the host build tool with the
//! round's symbol table snapshot and the staging output root:
//!
//! ```bash
//! flux-codegen --symbols round.json --out target/codegen/staging
//! ```
//!
//! Exit status is zero whether or not the round was claimed; generation
//! failures exit nonzero with a diagnostic naming the offending declaration.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use flux_codegen::{normalize_output_root, GeneratorConfig, SymbolTable};
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "flux-codegen",
    about = "Generate flux dispatch types from a symbol table snapshot"
)]
struct Cli {
    /// Symbol table snapshot for this round (JSON)
    #[arg(long)]
    symbols: PathBuf,

    /// Output root supplied by the host build tool
    #[arg(long)]
    out: PathBuf,

    /// Generator configuration (TOML); defaults to the standard flux role set
    #[arg(long)]
    config: Option<PathBuf>,

    /// Marker identities announced for this round; defaults to every marker
    /// present in the snapshot
    #[arg(long, value_delimiter = ',')]
    markers: Vec<String>,
}

fn main() -> ExitCode {
    setup_tracing();

    match run(Cli::parse()) {
        Ok(claimed) => {
            if !claimed {
                info!("no supported markers in this round");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let raw = fs::read_to_string(&cli.symbols)
        .with_context(|| format!("failed to read symbol table {}", cli.symbols.display()))?;
    let table: SymbolTable = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse symbol table {}", cli.symbols.display()))?;

    let config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => GeneratorConfig::standard(),
    };

    let announced = if cli.markers.is_empty() {
        markers_in_table(&table)
    } else {
        cli.markers.clone()
    };

    let output_root = normalize_output_root(&cli.out);
    let claimed = flux_codegen::process_round(&table, &announced, &config, &output_root)?;
    Ok(claimed)
}

/// Every distinct marker identity present in the snapshot, in encounter
/// order. Stands in for the host's announced set when none is given.
fn markers_in_table(table: &SymbolTable) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut markers = Vec::new();
    for decl in &table.declarations {
        for method in &decl.methods {
            for marker in &method.markers {
                if seen.insert(marker.clone()) {
                    markers.push(marker.clone());
                }
            }
        }
    }
    markers
}

/// Structured logging with env-based filtering (`RUST_LOG`).
fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
