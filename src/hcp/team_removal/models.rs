//! Team removal run models: per-email tasks, removal outcome and exit status

use log::warn;
use serde::Serialize;
use std::collections::HashSet;

use crate::hcp::{OrganizationMembership, Team};

/// Exit code for configuration, input and transport errors
pub const FATAL_ERROR_CODE: i32 = 1;

/// Process exit status, ordered by severity
///
/// When several conditions occur in one run the most severe wins, so the
/// derived ordering must follow the declaration order below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitStatus {
    Success,
    UserNotFound,
    TeamNotFound,
    NotMember,
    RemovalFailed,
}

impl ExitStatus {
    /// Numeric process exit code
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::UserNotFound => 1,
            ExitStatus::TeamNotFound => 2,
            ExitStatus::NotMember => 3,
            ExitStatus::RemovalFailed => 4,
        }
    }
}

/// Classification of an email against the target team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Member of the target team, queued for removal
    Remove,
    /// In the organization but not in the target team
    NotMember,
    /// No organization membership matched the email
    NotFound,
}

impl Classification {
    /// Classify a lookup result against the target team ID
    pub fn of(membership: Option<&OrganizationMembership>, team_id: &str) -> Self {
        match membership {
            None => Classification::NotFound,
            Some(m) if m.has_team(team_id) => Classification::Remove,
            Some(_) => Classification::NotMember,
        }
    }

    /// Exit status this classification contributes to the run
    pub fn exit_status(self) -> ExitStatus {
        match self {
            Classification::Remove => ExitStatus::Success,
            Classification::NotMember => ExitStatus::NotMember,
            Classification::NotFound => ExitStatus::UserNotFound,
        }
    }
}

/// One email being processed
#[derive(Debug, Clone)]
pub struct EmailTask {
    pub email: String,
    pub membership: Option<OrganizationMembership>,
    pub classification: Classification,
}

impl EmailTask {
    /// Create a task with its classification settled from the lookup result
    pub fn new(email: String, membership: Option<OrganizationMembership>, team_id: &str) -> Self {
        let classification = Classification::of(membership.as_ref(), team_id);
        Self {
            email,
            membership,
            classification,
        }
    }

    /// Membership ID, if the email was found
    pub fn membership_id(&self) -> Option<&str> {
        self.membership.as_ref().map(|m| m.id.as_str())
    }
}

/// A membership queued for bulk removal, with the email it was found by
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueuedRemoval {
    pub membership_id: String,
    pub email: String,
}

/// Resolved team plus classified tasks, in input order
#[derive(Debug, Clone)]
pub struct RemovalPlan {
    pub team: Team,
    pub tasks: Vec<EmailTask>,
}

impl RemovalPlan {
    /// Memberships to remove, one entry per distinct membership ID
    pub fn removal_queue(&self) -> Vec<QueuedRemoval> {
        let mut seen = HashSet::new();
        let mut queue = Vec::new();

        for task in &self.tasks {
            if task.classification != Classification::Remove {
                continue;
            }
            let Some(membership_id) = task.membership_id() else {
                continue;
            };
            if seen.insert(membership_id.to_string()) {
                queue.push(QueuedRemoval {
                    membership_id: membership_id.to_string(),
                    email: task.email.clone(),
                });
            } else {
                warn!(
                    "{} resolved to membership {} already queued by another email",
                    task.email, membership_id
                );
            }
        }

        queue
    }

    /// Number of tasks with the given classification
    pub fn count(&self, classification: Classification) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.classification == classification)
            .count()
    }
}

/// What happened to the removal queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Queue was empty, no request made
    NothingToRemove,
    /// `--dry-run`: the request was suppressed
    DryRun { queued: Vec<QueuedRemoval> },
    /// The bulk request succeeded
    Removed { queued: Vec<QueuedRemoval> },
    /// The bulk request failed as a whole
    Failed {
        queued: Vec<QueuedRemoval>,
        status_code: Option<u16>,
        detail: String,
    },
}

impl RemovalOutcome {
    /// Exit status contributed by the removal step
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            RemovalOutcome::Failed { .. } => ExitStatus::RemovalFailed,
            _ => ExitStatus::Success,
        }
    }

    /// Memberships that were part of the request (or would have been)
    pub fn queued(&self) -> &[QueuedRemoval] {
        match self {
            RemovalOutcome::NothingToRemove => &[],
            RemovalOutcome::DryRun { queued }
            | RemovalOutcome::Removed { queued }
            | RemovalOutcome::Failed { queued, .. } => queued,
        }
    }
}

/// Result of re-checking a removed membership after the grace period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationEntry {
    pub email: String,
    pub membership_id: String,
    /// `None` when the check itself failed
    pub still_member: Option<bool>,
}

/// Final per-email result shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    Removed,
    WouldRemove,
    RemovalFailed,
    NotMember,
    NotFound,
}

impl std::fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailStatus::Removed => write!(f, "removed"),
            EmailStatus::WouldRemove => write!(f, "would remove"),
            EmailStatus::RemovalFailed => write!(f, "removal failed"),
            EmailStatus::NotMember => write!(f, "not a member"),
            EmailStatus::NotFound => write!(f, "not found"),
        }
    }
}

/// Everything known at the end of a run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub org: String,
    pub plan: RemovalPlan,
    pub outcome: RemovalOutcome,
    pub verification: Vec<VerificationEntry>,
}

impl RunReport {
    /// Final status of one task given the removal outcome
    pub fn email_status(&self, task: &EmailTask) -> EmailStatus {
        match task.classification {
            Classification::NotFound => EmailStatus::NotFound,
            Classification::NotMember => EmailStatus::NotMember,
            Classification::Remove => match self.outcome {
                RemovalOutcome::DryRun { .. } => EmailStatus::WouldRemove,
                RemovalOutcome::Removed { .. } => EmailStatus::Removed,
                RemovalOutcome::Failed { .. } | RemovalOutcome::NothingToRemove => {
                    EmailStatus::RemovalFailed
                }
            },
        }
    }

    /// Most severe status observed across tasks and the removal step
    pub fn exit_status(&self) -> ExitStatus {
        self.plan
            .tasks
            .iter()
            .map(|t| t.classification.exit_status())
            .chain(std::iter::once(self.outcome.exit_status()))
            .max()
            .unwrap_or(ExitStatus::Success)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn team(id: &str, name: &str) -> Team {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "type": "teams",
            "attributes": {"name": name, "users-count": 1, "visibility": "secret"}
        }))
        .unwrap()
    }

    pub fn membership(id: &str, team_ids: &[&str]) -> OrganizationMembership {
        let teams: Vec<_> = team_ids
            .iter()
            .map(|t| serde_json::json!({"id": t, "type": "teams"}))
            .collect();
        serde_json::from_value(serde_json::json!({
            "id": id,
            "type": "organization-memberships",
            "relationships": {
                "user": {"data": {"id": format!("user-{}", id), "type": "users"}},
                "teams": {"data": teams}
            }
        }))
        .unwrap()
    }
}
