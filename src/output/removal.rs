//! Team removal report formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::hcp::team_removal::{
    Classification, EmailStatus, EmailTask, RemovalOutcome, RunReport, VerificationEntry,
};

/// Serializable report for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableReport<'a> {
    organization: &'a str,
    team: SerializableTeam<'a>,
    generated_at: String,
    results: Vec<SerializableResult<'a>>,
    removal: SerializableRemoval<'a>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    verification: Vec<&'a VerificationEntry>,
    exit_code: i32,
}

#[derive(Serialize)]
struct SerializableTeam<'a> {
    id: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct SerializableResult<'a> {
    email: &'a str,
    membership_id: Option<&'a str>,
    user_id: Option<&'a str>,
    classification: Classification,
    status: EmailStatus,
}

#[derive(Serialize)]
struct SerializableRemoval<'a> {
    state: &'static str,
    membership_ids: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

impl<'a> SerializableReport<'a> {
    fn new(report: &'a RunReport) -> Self {
        let (status_code, detail) = match &report.outcome {
            RemovalOutcome::Failed {
                status_code,
                detail,
                ..
            } => (*status_code, Some(detail.as_str())),
            _ => (None, None),
        };

        Self {
            organization: &report.org,
            team: SerializableTeam {
                id: &report.plan.team.id,
                name: report.plan.team.name(),
            },
            generated_at: chrono::Utc::now().to_rfc3339(),
            results: report
                .plan
                .tasks
                .iter()
                .map(|task| SerializableResult {
                    email: &task.email,
                    membership_id: task.membership_id(),
                    user_id: task.membership.as_ref().and_then(|m| m.user_id()),
                    classification: task.classification,
                    status: report.email_status(task),
                })
                .collect(),
            removal: SerializableRemoval {
                state: removal_state(&report.outcome),
                membership_ids: report
                    .outcome
                    .queued()
                    .iter()
                    .map(|q| q.membership_id.as_str())
                    .collect(),
                status_code,
                detail,
            },
            verification: report.verification.iter().collect(),
            exit_code: report.exit_status().code(),
        }
    }
}

fn removal_state(outcome: &RemovalOutcome) -> &'static str {
    match outcome {
        RemovalOutcome::NothingToRemove => "not_needed",
        RemovalOutcome::DryRun { .. } => "dry_run",
        RemovalOutcome::Removed { .. } => "removed",
        RemovalOutcome::Failed { .. } => "failed",
    }
}

/// Output the removal report in the specified format
pub fn output_removal_report(report: &RunReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            output_table(report);
            Ok(())
        }
        OutputFormat::Csv => {
            output_csv(report);
            Ok(())
        }
        OutputFormat::Json => print_json(&SerializableReport::new(report)),
        OutputFormat::Yaml => print_yaml(&SerializableReport::new(report)),
    }
}

fn row_values(report: &RunReport, task: &EmailTask) -> [String; 4] {
    [
        task.email.clone(),
        task.membership_id().unwrap_or("-").to_string(),
        task.membership
            .as_ref()
            .and_then(|m| m.user_id())
            .unwrap_or("-")
            .to_string(),
        report.email_status(task).to_string(),
    ]
}

fn output_table(report: &RunReport) {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["EMAIL", "MEMBERSHIP", "USER", "RESULT"]);

    for task in &report.plan.tasks {
        table.add_row(row_values(report, task).to_vec());
    }

    println!("{table}");
    println!();
    for line in summary_lines(report) {
        println!("{}", line);
    }
}

fn output_csv(report: &RunReport) {
    println!("EMAIL,MEMBERSHIP,USER,RESULT");
    for task in &report.plan.tasks {
        let values = row_values(report, task);
        let escaped: Vec<String> = values.iter().map(|v| escape_csv(v)).collect();
        println!("{}", escaped.join(","));
    }
}

/// Human-readable summary printed under the table
fn summary_lines(report: &RunReport) -> Vec<String> {
    let team = report.plan.team.name();
    let mut lines = Vec::new();

    match &report.outcome {
        RemovalOutcome::NothingToRemove => lines.push(format!(
            "No removal necessary: no listed user is a member of team '{}'",
            team
        )),
        RemovalOutcome::DryRun { queued } => lines.push(format!(
            "Dry run: would remove {} membership(s) from team '{}' ({})",
            queued.len(),
            team,
            report.plan.team.id
        )),
        RemovalOutcome::Removed { queued } => {
            for item in queued {
                lines.push(format!(
                    "✓ Removed {} ({}) from team '{}'",
                    item.email, item.membership_id, team
                ));
            }
        }
        RemovalOutcome::Failed {
            queued,
            status_code,
            detail,
        } => {
            let status = status_code
                .map(|s| s.to_string())
                .unwrap_or_else(|| "no response".to_string());
            let detail = if detail.trim().is_empty() {
                "no details"
            } else {
                detail.trim()
            };
            lines.push(format!(
                "✗ Bulk removal of {} membership(s) from team '{}' failed (status {}): {}",
                queued.len(),
                team,
                status,
                detail
            ));
        }
    }

    for entry in &report.verification {
        lines.push(match entry.still_member {
            Some(false) => format!("  verified: {} no longer in team '{}'", entry.email, team),
            Some(true) => format!("  warning: {} still listed in team '{}'", entry.email, team),
            None => format!("  warning: could not verify {}", entry.email),
        });
    }

    lines.push(format!(
        "Summary: {} to remove, {} not a member, {} not found (exit code {})",
        report.plan.count(Classification::Remove),
        report.plan.count(Classification::NotMember),
        report.plan.count(Classification::NotFound),
        report.exit_status().code()
    ));

    lines
}
