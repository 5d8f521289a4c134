//! Command line configuration and logging setup.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `THRESHOLD_RECOVERY_LOG` | `warn` | Log filter, same syntax as `RUST_LOG` |

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use num_bigint::BigInt;
use tracing_subscriber::EnvFilter;

/// Recover secrets from threshold shares, or produce shares to recover.
#[derive(Parser, Debug)]
#[command(name = "threshold-recovery", version)]
#[command(about = "Recover the constant term of a polynomial from base-encoded shares")]
pub struct Cli {
    /// Log filter directive, e.g. `info` or `threshold_recovery=debug`
    #[arg(
        long,
        global = true,
        env = "THRESHOLD_RECOVERY_LOG",
        default_value = "warn"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recover the secret of each share document, in order
    Recover(RecoverArgs),

    /// Write a share document for a polynomial
    Split(SplitArgs),
}

#[derive(clap::Args, Debug)]
pub struct RecoverArgs {
    /// Share documents to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with a non-zero status if any document fails
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args, Debug)]
pub struct SplitArgs {
    /// Polynomial coefficients, constant term first. Negative coefficients
    /// are accepted, but every share value f(1)..f(n) must be non-negative
    /// to be encoded
    #[arg(
        long,
        required = true,
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    pub coefficients: Vec<BigInt>,

    /// Number of shares to produce
    #[arg(long)]
    pub shares: usize,

    /// Radix used to encode share values
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(2..=36))]
    pub base: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Installs the global `tracing` subscriber, writing to stderr.
pub fn init_logging(directive: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
