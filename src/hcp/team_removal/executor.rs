//! Bulk removal execution and post-removal verification

use log::{debug, info, warn};

use crate::hcp::TfeClient;

use super::models::{QueuedRemoval, RemovalOutcome, VerificationEntry};

/// Execute the bulk removal for the queued memberships
///
/// An empty queue makes no request. In dry-run mode the request is
/// suppressed and the queue is reported as-is.
pub async fn execute_removal(
    client: &TfeClient,
    team_id: &str,
    queued: Vec<QueuedRemoval>,
    dry_run: bool,
) -> RemovalOutcome {
    if queued.is_empty() {
        info!("No memberships to remove from {}", team_id);
        return RemovalOutcome::NothingToRemove;
    }

    if dry_run {
        info!(
            "Dry run: would remove {} membership(s) from {}",
            queued.len(),
            team_id
        );
        return RemovalOutcome::DryRun { queued };
    }

    let membership_ids: Vec<String> = queued.iter().map(|q| q.membership_id.clone()).collect();
    let result = client.remove_team_members(team_id, &membership_ids).await;

    if result.ok {
        info!("Removed {} membership(s) from {}", queued.len(), team_id);
        RemovalOutcome::Removed { queued }
    } else {
        warn!(
            "Bulk removal from {} failed (status {:?})",
            team_id, result.status_code
        );
        RemovalOutcome::Failed {
            queued,
            status_code: result.status_code,
            detail: result.body,
        }
    }
}

/// Re-check removed memberships for the team
///
/// Informational only: lookup failures are logged and reported as unknown.
pub async fn verify_removal(
    client: &TfeClient,
    org: &str,
    team_id: &str,
    removed: &[QueuedRemoval],
) -> Vec<VerificationEntry> {
    let mut entries = Vec::with_capacity(removed.len());

    for item in removed {
        let still_member = match client.find_org_membership(org, &item.email).await {
            Ok(Some(m)) => Some(m.has_team(team_id)),
            Ok(None) => Some(false),
            Err(e) => {
                warn!("Could not verify removal of {}: {}", item.email, e);
                None
            }
        };

        match still_member {
            Some(true) => warn!("{} still appears in team {}", item.email, team_id),
            Some(false) => debug!("{} verified removed from {}", item.email, team_id),
            None => {}
        }

        entries.push(VerificationEntry {
            email: item.email.clone(),
            membership_id: item.membership_id.clone(),
            still_member,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const REMOVE_PATH: &str = "/teams/team-123/relationships/organization-memberships";

    fn queued(pairs: &[(&str, &str)]) -> Vec<QueuedRemoval> {
        pairs
            .iter()
            .map(|(id, email)| QueuedRemoval {
                membership_id: id.to_string(),
                email: email.to_string(),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_empty_queue_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let client = TfeClient::test_client(&server.uri());
        let outcome = execute_removal(&client, "team-123", Vec::new(), false).await;
        assert_eq!(outcome, RemovalOutcome::NothingToRemove);
    }

    #[tokio::test]
    async fn test_dry_run_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let client = TfeClient::test_client(&server.uri());
        let items = queued(&[("ou-1", "a@x.com")]);
        let outcome = execute_removal(&client, "team-123", items.clone(), true).await;
        assert_eq!(outcome, RemovalOutcome::DryRun { queued: items });
    }

    #[tokio::test]
    async fn test_single_bulk_request() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(REMOVE_PATH))
            .and(body_json(serde_json::json!({
                "data": [
                    {"type": "organization-memberships", "id": "ou-1"},
                    {"type": "organization-memberships", "id": "ou-2"}
                ]
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = TfeClient::test_client(&server.uri());
        let items = queued(&[("ou-1", "a@x.com"), ("ou-2", "b@x.com")]);
        let outcome = execute_removal(&client, "team-123", items.clone(), false).await;
        assert_eq!(outcome, RemovalOutcome::Removed { queued: items });
    }

    #[tokio::test]
    async fn test_failed_request_is_aggregated() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(REMOVE_PATH))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let client = TfeClient::test_client(&server.uri());
        let items = queued(&[("ou-1", "a@x.com"), ("ou-2", "b@x.com")]);
        let outcome = execute_removal(&client, "team-123", items, false).await;

        match outcome {
            RemovalOutcome::Failed {
                queued,
                status_code,
                detail,
            } => {
                assert_eq!(queued.len(), 2);
                assert_eq!(status_code, Some(404));
                assert_eq!(detail, "not found");
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_verify_removal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/organizations/acme/organization-memberships"))
            .and(query_param("q", "gone@x.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"id": "ou-1", "relationships": {"teams": {"data": []}}}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/organizations/acme/organization-memberships"))
            .and(query_param("q", "stuck@x.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"id": "ou-2", "relationships": {"teams": {"data": [{"id": "team-123"}]}}}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/organizations/acme/organization-memberships"))
            .and(query_param("q", "error@x.com"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = TfeClient::test_client(&server.uri());
        let items = queued(&[
            ("ou-1", "gone@x.com"),
            ("ou-2", "stuck@x.com"),
            ("ou-3", "error@x.com"),
        ]);
        let entries = verify_removal(&client, "acme", "team-123", &items).await;

        let results: Vec<_> = entries.iter().map(|e| e.still_member).collect();
        assert_eq!(results, vec![Some(false), Some(true), None]);
    }
}
