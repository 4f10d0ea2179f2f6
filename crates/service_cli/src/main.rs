//! detra CLI - Draw values from the detra random sources
//!
//! # Commands
//!
//! - `detra draw` - Print integers, floats or booleans from one source
//! - `detra check` - Run self-checks (golden values, determinism, derivation)
//! - `detra list` - Describe the available sources
//!
//! # Configuration
//!
//! Defaults, then `--config <file>` (TOML), then `DETRA_*` environment
//! variables, then command-line flags.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use detra_core::SourceKind;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{build_config, parse_seed, ConfigLayer, LogLevel, OutputKind};
pub use error::{CliError, Result};

/// detra random source CLI
#[derive(Parser)]
#[command(name = "detra")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw values from a source
    Draw {
        /// Source (entropy, legacy, xorshift32, xorshift128plus)
        #[arg(short, long)]
        source: Option<SourceKind>,

        /// Seed, decimal or 0x-prefixed hex (xorshift sources only)
        #[arg(long, value_parser = parse_seed)]
        seed: Option<u64>,

        /// Second seed word (xorshift128plus only)
        #[arg(long, value_parser = parse_seed)]
        seed2: Option<u64>,

        /// Number of values to draw
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Quantity to print (int, float, bool)
        #[arg(short, long)]
        kind: Option<OutputKind>,
    },

    /// Run self-checks against one source or all of them
    Check {
        /// Source to check (all when omitted)
        #[arg(short, long)]
        source: Option<SourceKind>,
    },

    /// List the available sources
    List,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut layer = ConfigLayer {
        log_level: cli.log_level,
        ..Default::default()
    };
    if let Commands::Draw {
        source,
        seed,
        seed2,
        count,
        kind,
    } = &cli.command
    {
        layer.source = *source;
        layer.seed = *seed;
        layer.seed2 = *seed2;
        layer.count = *count;
        layer.kind = *kind;
    }

    let env = ConfigLayer::from_env()?;
    let config = build_config(cli.config.as_ref(), &env, &layer)?;

    init_tracing(&config.log_level.to_string());
    info!(
        source = %config.source,
        count = config.count,
        kind = %config.kind,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Draw { .. } => commands::draw::run(&config, &mut out),
        Commands::Check { source } => commands::check::run(source, &mut out),
        Commands::List => commands::list::run(&mut out),
    }
}
