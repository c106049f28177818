//! tfe-team-remove - Remove users from a team in HCP Terraform / Terraform Enterprise
//!
//! Looks up each email's organization membership, classifies it against the
//! target team and removes all current members with a single bulk request.
//!
//! # Exit codes
//!
//! - `0` every email was removed (or would be, with `--dry-run`)
//! - `1` a user was not found, or a configuration/input/transport error
//! - `2` the team does not exist in the organization
//! - `3` a user is in the organization but not in the team
//! - `4` the bulk removal request failed
//!
//! # Example
//!
//! ```bash
//! # Remove two users
//! tfe-team-remove --org my-org --team developers --email a@example.com,b@example.com
//!
//! # Preview removals from a file
//! tfe-team-remove --org my-org --team developers --emails-file users.txt --dry-run
//!
//! # Remove and re-check, report as JSON
//! tfe-team-remove --org my-org --team developers --email a@example.com --verify -o json
//! ```

pub mod cli;
pub mod config;
pub mod emails;
pub mod error;
pub mod hcp;
pub mod output;
pub mod ui;

pub use cli::{Cli, OutputFormat};
pub use emails::collect_emails;
pub use error::{Result, TfeError};
pub use hcp::{run_remove_command, ExitStatus, Team, TfeClient, TfeResource, TokenResolver};
pub use hcp::team_removal::FATAL_ERROR_CODE;
pub use output::output_removal_report;
