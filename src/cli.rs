//! CLI interface for orrery.
//!
//! Each subcommand is non-interactive: arguments in, structured output out.
//! Machine-readable output goes to stdout; progress and summaries go to
//! stderr through `tracing` and plain `eprintln!`.

mod build;
mod format;
mod inspect;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::horizons::HorizonsClient;
use crate::model::BodyName;
use crate::resolve::IdentifierResolver;

/// Orrery: build a dataset of solar-system bodies from JPL Horizons.
#[derive(Debug, Parser)]
#[command(name = "orrery", version, after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Config file (defaults to `$ORRERY_CONFIG`, then `~/.orrery/config.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r"Examples:
  orrery build
  orrery build --body Earth --body Moon --out moon.json
  orrery resolve Jupiter Europa
  orrery extract saved-report.txt
  orrery show planetData/objects.json

Logging is controlled with RUST_LOG (default: orrery=info).";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve, fetch, and extract every body, then write the dataset.
    ///
    /// A body that cannot be resolved aborts the run and nothing is written.
    /// A body whose report cannot be fetched or parsed is skipped.
    Build {
        /// Body to include. Can be specified multiple times.
        /// Replaces the configured list when given.
        #[arg(long = "body")]
        bodies: Vec<String>,

        /// Write the dataset here instead of the configured output path.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Resolve names to catalog identifiers and print them.
    ///
    /// Defaults to the configured bodies when no names are given.
    Resolve {
        /// Body names.
        names: Vec<String>,
    },

    /// Extract fields from a saved ephemeris report and print them as JSON.
    Extract {
        /// Report text file.
        report: PathBuf,
    },

    /// Summarize an existing dataset file.
    Show {
        /// Dataset file (defaults to the configured output path).
        path: Option<PathBuf>,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Build { bodies, out } => build::cmd_build(&config, &bodies, out),
        Command::Resolve { names } => cmd_resolve(&config, &names),
        Command::Extract { report } => inspect::cmd_extract(&config, &report),
        Command::Show { path } => inspect::cmd_show(&config, path),
    }
}

fn cmd_resolve(config: &Config, names: &[String]) -> Result<(), String> {
    let names = if names.is_empty() {
        config.body_names()?
    } else {
        names.iter().map(|n| BodyName::new(n.as_str())).collect()
    };

    let client = HorizonsClient::new(&config.lookup_url, &config.ephemeris_url)
        .map_err(|e| format!("failed to create HTTP client: {e}"))?;
    let resolved = IdentifierResolver::new(&client, &config.group)
        .resolve_all(&names)
        .map_err(|e| e.to_string())?;

    for body in &resolved {
        println!("{}\t{}", body.name, body.id);
    }
    Ok(())
}
