use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use grid_store::SignupBoard;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;
mod session;

use config::{load_settings, split_labels, OutputFormat};
use session::Session;

/// Terminal front end for the two-grid sign-up sheet.
#[derive(Parser, Debug)]
#[command(name = "signup")]
struct Args {
    /// Config file (defaults to ./signup.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Comma separated grid labels, in reporting order
    #[arg(long)]
    grids: Option<String>,
    /// Read JSON-lines requests and write JSON replies
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(grids) = args.grids.as_deref() {
        settings.grid_labels = split_labels(grids);
    }
    if settings.grid_labels.is_empty() {
        anyhow::bail!("at least one grid label is required");
    }
    if args.json {
        settings.output = OutputFormat::Json;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(io::stderr)
        .init();

    let board = SignupBoard::new(&settings.grid_labels).context("invalid grid labels")?;
    info!(grids = ?settings.grid_labels, output = ?settings.output, "sign-up sheet ready");

    let mut session = Session::new(board, settings.output);
    session.run(io::stdin().lock(), io::stdout().lock())
}
