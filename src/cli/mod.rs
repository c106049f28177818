//! CLI argument parsing

mod common;

use clap::Parser;
use std::path::PathBuf;

use crate::config::{defaults, host};

pub use common::OutputFormat;

/// Remove users from a team in HCP Terraform / Terraform Enterprise
#[derive(Parser, Debug)]
#[command(name = "tfe-team-remove")]
#[command(version)]
#[command(
    about = "Remove users (by email) from a team in HCP Terraform / Terraform Enterprise",
    long_about = None
)]
pub struct Cli {
    /// Organization name
    #[arg(long)]
    pub org: String,

    /// Team name (exact, case-sensitive)
    #[arg(long)]
    pub team: String,

    /// Email(s) to remove; repeatable, values may be comma or space separated
    #[arg(
        long = "email",
        visible_alias = "emails",
        value_name = "EMAIL",
        num_args = 1..
    )]
    pub emails: Vec<String>,

    /// File with emails (.txt): comma-separated per line, '#' comments allowed
    #[arg(long, value_name = "PATH")]
    pub emails_file: Option<PathBuf>,

    /// Report what would be removed without removing anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Re-check memberships after removal
    #[arg(long, default_value_t = false)]
    pub verify: bool,

    /// TFE host (hostname or URL)
    #[arg(short = 'H', long, env = host::ENV_VAR, default_value = defaults::HOST)]
    pub host: String,

    /// API token (overrides env vars and credentials file)
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Seconds to wait after removal for the API to catch up
    #[arg(
        long,
        value_name = "SECONDS",
        env = defaults::GRACE_PERIOD_ENV_VAR,
        default_value_t = defaults::GRACE_PERIOD_SECS
    )]
    pub grace_period: u64,

    /// Report format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Batch mode: no spinners
    #[arg(short = 'b', long, default_value_t = false)]
    pub batch: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}
