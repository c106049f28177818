//! Team API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::{find_by_name, ApiListResponse};
use crate::hcp::TfeClient;

use super::models::Team;

impl TfeClient {
    /// Get all teams for an organization (with pagination)
    pub async fn get_teams(&self, org: &str) -> Result<Vec<Team>> {
        let path = format!(
            "/{}/{}/{}",
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::TEAMS
        );
        let error_context = format!("teams for organization '{}'", org);

        self.fetch_all_pages::<Team, ApiListResponse<Team>>(&path, &error_context)
            .await
    }

    /// Resolve a team by exact, case-sensitive name
    ///
    /// Scans the full team listing; a missing team is `TfeError::TeamNotFound`.
    pub async fn resolve_team(&self, org: &str, name: &str) -> Result<Team> {
        let teams = self.get_teams(org).await?;
        debug!("Searching {} teams in '{}' for '{}'", teams.len(), org, name);

        find_by_name(&teams, name)
            .cloned()
            .ok_or_else(|| TfeError::TeamNotFound {
                team: name.to_string(),
                org: org.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn team_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "teams",
            "attributes": {
                "name": name,
                "users-count": 4,
                "visibility": "secret"
            }
        })
    }

    #[tokio::test]
    async fn test_get_teams() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [team_json("team-abc", "owners"), team_json("team-def", "developers")],
                "links": {"next": null}
            })))
            .mount(&mock_server)
            .await;

        let client = TfeClient::test_client(&mock_server.uri());
        let teams = client.get_teams("my-org").await.unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].id, "team-abc");
        assert_eq!(teams[0].name(), "owners");
        assert_eq!(teams[1].name(), "developers");
    }

    #[tokio::test]
    async fn test_get_teams_pagination() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [team_json("team-1", "team-one")],
                "links": {"next": format!("{}/organizations/my-org/teams-next", mock_server.uri())}
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/teams-next"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [team_json("team-2", "team-two")],
                "links": {"next": null}
            })))
            .mount(&mock_server)
            .await;

        let client = TfeClient::test_client(&mock_server.uri());
        let teams = client.get_teams("my-org").await.unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[1].id, "team-2");
    }

    #[tokio::test]
    async fn test_get_teams_org_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/organizations/unknown-org/teams"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = TfeClient::test_client(&mock_server.uri());
        let err = client.get_teams("unknown-org").await.unwrap_err();

        assert!(matches!(err, TfeError::Api { status: 404, .. }));
        assert!(err.to_string().contains("Failed to fetch"));
    }

    #[tokio::test]
    async fn test_resolve_team_exact_match() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/organizations/acme/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [team_json("team-999", "Owners"), team_json("team-123", "owners")]
            })))
            .mount(&mock_server)
            .await;

        let client = TfeClient::test_client(&mock_server.uri());
        let team = client.resolve_team("acme", "owners").await.unwrap();
        assert_eq!(team.id, "team-123");
    }

    #[tokio::test]
    async fn test_resolve_team_missing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/organizations/acme/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [team_json("team-123", "owners")]
            })))
            .mount(&mock_server)
            .await;

        let client = TfeClient::test_client(&mock_server.uri());
        let err = client.resolve_team("acme", "missing").await.unwrap_err();
        assert!(matches!(err, TfeError::TeamNotFound { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
