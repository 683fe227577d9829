//! Affinity CLI binary.
//!
//! Provides a command-line interface for the affinity ranking engine.

mod cmd;
mod config;
mod data;

use std::{path::PathBuf, process};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cmd::{explain::explain_candidate, recommend::recommend, signals::list_signals};

#[derive(Parser)]
#[command(name = "affinity")]
#[command(about = "Content relevance ranking engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Output format for ranking results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List available signals
    Signals {
        /// Filter by group (metadata, gated, engagement)
        #[arg(short, long)]
        group: Option<String>,

        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Recommend catalog items similar to a focal item
    Recommend {
        /// JSON file holding the catalog (an array of items)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Id of the focal item, looked up in the catalog
        #[arg(short, long)]
        focal: String,

        /// JSON file holding the user's history entries
        #[arg(long)]
        history: Option<PathBuf>,

        /// Maximum number of recommendations (defaults to the configured size)
        #[arg(short = 'k', long)]
        limit: Option<usize>,

        /// Current instant in RFC 3339 (defaults to the system clock)
        #[arg(long)]
        now: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// TOML configuration file (overrides AFFINITY_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the per-signal breakdown of one candidate's score
    Explain {
        /// JSON file holding the catalog (an array of items)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Id of the focal item
        #[arg(short, long)]
        focal: String,

        /// Id of the candidate to explain
        #[arg(long)]
        candidate: String,

        /// JSON file holding the user's history entries
        #[arg(long)]
        history: Option<PathBuf>,

        /// Current instant in RFC 3339 (defaults to the system clock)
        #[arg(long)]
        now: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// TOML configuration file (overrides AFFINITY_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Install a stderr logger filtered by `RUST_LOG`.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("affinity=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Signals { group, verbose } => {
            list_signals(group.as_deref(), verbose)?;
        }
        Commands::Recommend {
            catalog,
            focal,
            history,
            limit,
            now,
            format,
            config,
        } => {
            recommend(
                &cmd::Inputs {
                    catalog,
                    focal,
                    history,
                    now,
                    config,
                    format,
                },
                limit,
            )?;
        }
        Commands::Explain {
            catalog,
            focal,
            candidate,
            history,
            now,
            format,
            config,
        } => {
            explain_candidate(
                &cmd::Inputs {
                    catalog,
                    focal,
                    history,
                    now,
                    config,
                    format,
                },
                &candidate,
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_recommend() {
        let cli = Cli::try_parse_from([
            "affinity",
            "recommend",
            "--catalog",
            "catalog.json",
            "--focal",
            "12",
            "-k",
            "3",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Recommend {
                focal,
                limit,
                format,
                history,
                ..
            } => {
                assert_eq!(focal, "12");
                assert_eq!(limit, Some(3));
                assert_eq!(format, OutputFormat::Json);
                assert!(history.is_none());
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn test_parse_explain_requires_candidate() {
        let parsed = Cli::try_parse_from([
            "affinity",
            "explain",
            "--catalog",
            "catalog.json",
            "--focal",
            "12",
        ]);
        assert!(parsed.is_err());
    }
}
