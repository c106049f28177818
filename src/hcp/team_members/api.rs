//! Team membership relationship API operations

use log::{debug, warn};

use crate::config::api;
use crate::hcp::TfeClient;

use super::models::{MembershipRelationshipRequest, RemovalResult};

impl TfeClient {
    /// Remove organization memberships from a team in one request
    ///
    /// Only `204 No Content` counts as success. An empty `membership_ids`
    /// fails without touching the network. Any attempt that reaches the
    /// network is followed by the consistency grace period.
    pub async fn remove_team_members(
        &self,
        team_id: &str,
        membership_ids: &[String],
    ) -> RemovalResult {
        if membership_ids.is_empty() {
            return RemovalResult::failure(None, "no membership IDs to remove");
        }

        let url = format!(
            "{}/{}/{}/relationships/{}",
            self.base_url(),
            api::TEAMS,
            urlencoding::encode(team_id),
            api::ORGANIZATION_MEMBERSHIPS
        );
        let request = MembershipRelationshipRequest::new(membership_ids);

        debug!(
            "Removing {} membership(s) from team {}: {}",
            membership_ids.len(),
            team_id,
            url
        );

        let result = match self.delete(&url).json(&request).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                if status == 204 {
                    debug!("Removed {} membership(s) from {}", membership_ids.len(), team_id);
                    RemovalResult::success(status)
                } else {
                    let body = response.text().await.unwrap_or_default();
                    warn!("Bulk removal from {} returned status {}", team_id, status);
                    RemovalResult::failure(Some(status), body)
                }
            }
            Err(e) => {
                warn!("Bulk removal request to {} failed: {}", team_id, e);
                RemovalResult::failure(e.status().map(|s| s.as_u16()), e.to_string())
            }
        };

        self.wait_grace_period().await;
        result
    }
}
