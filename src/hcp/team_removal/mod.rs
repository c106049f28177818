//! Team removal module - classify emails against a team and remove members in bulk

mod commands;
mod executor;
mod models;
mod plan;

pub use commands::run_remove_command;
pub use executor::{execute_removal, verify_removal};
pub use models::{
    Classification, EmailStatus, EmailTask, ExitStatus, QueuedRemoval, RemovalOutcome,
    RemovalPlan, RunReport, VerificationEntry, FATAL_ERROR_CODE,
};
pub use plan::{build_plan, lookup_tasks};
