//! Team removal command handler

use log::{debug, info};

use crate::cli::Cli;
use crate::error::Result;
use crate::hcp::TfeClient;
use crate::output::output_removal_report;
use crate::ui::{create_spinner, finish_spinner};

use super::executor::{execute_removal, verify_removal};
use super::models::{ExitStatus, RemovalOutcome, RemovalPlan, RunReport};
use super::plan::lookup_tasks;

/// Run the team removal for already-normalized emails
///
/// Prints the report and returns the exit status it maps to. A missing team
/// or a failed lookup is returned as an error before anything is removed.
pub async fn run_remove_command(
    client: &TfeClient,
    cli: &Cli,
    emails: Vec<String>,
) -> Result<ExitStatus> {
    debug!(
        "Removing {} email(s) from team '{}' in '{}' (dry_run={}, verify={})",
        emails.len(),
        cli.team,
        cli.org,
        cli.dry_run,
        cli.verify
    );

    let spinner = create_spinner(
        &format!("Resolving team '{}' in '{}'...", cli.team, cli.org),
        cli.batch,
    );
    let team = client.resolve_team(&cli.org, &cli.team).await;
    finish_spinner(spinner);
    let team = team?;

    let spinner = create_spinner(
        &format!("Looking up {} email(s)...", emails.len()),
        cli.batch,
    );
    let tasks = lookup_tasks(client, &cli.org, &team, &emails).await;
    finish_spinner(spinner);
    let plan = RemovalPlan { team, tasks: tasks? };

    let queue = plan.removal_queue();
    let spinner = if queue.is_empty() || cli.dry_run {
        None
    } else {
        create_spinner(
            &format!(
                "Removing {} membership(s) from '{}'...",
                queue.len(),
                plan.team.name()
            ),
            cli.batch,
        )
    };
    let outcome = execute_removal(client, &plan.team.id, queue, cli.dry_run).await;
    finish_spinner(spinner);

    let verification = match &outcome {
        RemovalOutcome::Removed { queued } if cli.verify => {
            let spinner = create_spinner("Verifying removal...", cli.batch);
            let entries = verify_removal(client, &cli.org, &plan.team.id, queued).await;
            finish_spinner(spinner);
            entries
        }
        _ => Vec::new(),
    };

    let report = RunReport {
        org: cli.org.clone(),
        plan,
        outcome,
        verification,
    };

    output_removal_report(&report, cli.output)?;

    let status = report.exit_status();
    info!("Completed with exit status {:?} ({})", status, status.code());
    Ok(status)
}
