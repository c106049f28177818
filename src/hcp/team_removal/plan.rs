//! Lookup and classification of emails against the target team

use log::{debug, info};

use crate::error::Result;
use crate::hcp::{Team, TfeClient};

use super::models::{Classification, EmailTask, RemovalPlan};

/// Resolve the team, then look up and classify every email in order
///
/// A missing team aborts before any membership lookup.
pub async fn build_plan(
    client: &TfeClient,
    org: &str,
    team_name: &str,
    emails: &[String],
) -> Result<RemovalPlan> {
    let team = client.resolve_team(org, team_name).await?;
    info!("Resolved team '{}' to {}", team.name(), team.id);

    let tasks = lookup_tasks(client, org, &team, emails).await?;
    Ok(RemovalPlan { team, tasks })
}

/// Look up each email's membership and classify it against `team`
///
/// Lookups run one at a time in input order; the first API error aborts.
pub async fn lookup_tasks(
    client: &TfeClient,
    org: &str,
    team: &Team,
    emails: &[String],
) -> Result<Vec<EmailTask>> {
    let mut tasks = Vec::with_capacity(emails.len());

    for email in emails {
        let membership = client.find_org_membership(org, email).await?;
        let task = EmailTask::new(email.clone(), membership, &team.id);

        match task.classification {
            Classification::Remove => debug!(
                "{} (membership {}) is a member of '{}'",
                email,
                task.membership_id().unwrap_or_default(),
                team.name()
            ),
            Classification::NotMember => debug!(
                "{} (membership {}) is not a member of '{}'",
                email,
                task.membership_id().unwrap_or_default(),
                team.name()
            ),
            Classification::NotFound => debug!("{} not found in '{}'", email, org),
        }

        tasks.push(task);
    }

    Ok(tasks)
}
