//! Organization membership API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::OrganizationMembership;

impl TfeClient {
    /// Find the organization membership for an email
    ///
    /// Uses the `q` search parameter. When the search returns several
    /// memberships the first one is taken; an empty result is `None`.
    pub async fn find_org_membership(
        &self,
        org: &str,
        email: &str,
    ) -> Result<Option<OrganizationMembership>> {
        let url = format!(
            "{}/{}/{}/{}?q={}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::ORGANIZATION_MEMBERSHIPS,
            urlencoding::encode(email)
        );

        debug!("Looking up membership for {} in {}: {}", email, org, url);

        let response = self.get(&url).send().await?;
        let error_context = format!("membership for '{}' in '{}'", email, org);
        let memberships: ApiListResponse<OrganizationMembership> =
            self.parse_api_response(response, &error_context).await?;

        if memberships.data.len() > 1 {
            debug!(
                "Search for {} returned {} memberships, using the first",
                email,
                memberships.data.len()
            );
        }

        Ok(memberships.data.into_iter().next())
    }
}
