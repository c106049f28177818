//! TFE HTTP client for API interactions

use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::time::Duration;

use crate::config::{api, defaults};
use crate::error::{Result, TfeError};
use crate::hcp::traits::PaginatedResponse;

/// Build the API base URL from a hostname or a full URL
///
/// `app.terraform.io` and `https://app.terraform.io/` both become
/// `https://app.terraform.io/api/v2`. An explicit scheme is kept as-is.
pub fn api_base_url(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    let origin = if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    };
    format!("{}{}", origin, api::BASE_PATH)
}

/// TFE API client
///
/// Holds the bearer token and base URL for the whole run; both are fixed
/// at construction time.
pub struct TfeClient {
    client: Client,
    token: String,
    base_url: String,
    /// Wait applied after a bulk removal so reads observe the change
    grace_period: Duration,
}

impl TfeClient {
    /// Create a new TFE client for the given host (hostname or URL)
    pub fn new(token: String, host: &str) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url: api_base_url(host),
            grace_period: Duration::from_secs(defaults::GRACE_PERIOD_SECS),
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url,
            grace_period: Duration::ZERO,
        }
    }

    /// Set the post-removal consistency grace period
    pub fn set_grace_period(&mut self, grace_period: Duration) {
        self.grace_period = grace_period;
    }

    /// Get the post-removal consistency grace period
    pub fn grace_period(&self) -> Duration {
        self.grace_period
    }

    /// Base URL for API requests
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", api::MEDIA_TYPE)
            .header("Accept", api::MEDIA_TYPE)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Parse an API response, returning error for non-success status codes
    ///
    /// The error message carries the response body so the caller can surface it.
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TfeError::Api {
                status: status.as_u16(),
                message: failure_message(error_context, &body),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch all pages from a paginated API endpoint
    ///
    /// Requests the first page, then follows `links.next` until the API stops
    /// returning one. Pages are fetched one after another.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/organizations/my-org/teams")
    /// * `error_context` - Context for error messages (e.g., "teams for organization 'my-org'")
    pub async fn fetch_all_pages<T, R>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let mut next_url = Some(format!(
            "{}{}{}page[size]={}",
            self.base_url(),
            path,
            separator,
            api::DEFAULT_PAGE_SIZE,
        ));

        let mut all_items = Vec::new();
        let mut visited = HashSet::new();
        let mut page = 0u32;

        while let Some(url) = next_url.take() {
            if !visited.insert(url.clone()) {
                warn!("Pagination loop detected at {}, stopping", url);
                break;
            }
            page += 1;
            debug!("Fetching page {} from: {}", page, url);

            let response = self.get(&url).send().await?;
            let page_context = format!("{} (page {})", error_context, page);
            let resp: R = self.parse_api_response(response, &page_context).await?;

            if let Some(p) = resp.meta().and_then(|m| m.pagination.as_ref()) {
                debug!(
                    "Page {}/{}, total items: {}",
                    p.current_page, p.total_pages, p.total_count
                );
            }

            next_url = resp.next_link().map(|next| self.resolve_link(next));
            all_items.extend(resp.into_data());
        }

        debug!(
            "Fetched {} total items for {} in {} page(s)",
            all_items.len(),
            error_context,
            page
        );
        Ok(all_items)
    }

    /// Turn a pagination link into an absolute URL
    fn resolve_link(&self, link: &str) -> String {
        if link.starts_with("http://") || link.starts_with("https://") {
            link.to_string()
        } else {
            let path = link
                .strip_prefix(api::BASE_PATH)
                .unwrap_or(link)
                .trim_start_matches('/');
            format!("{}/{}", self.base_url(), path)
        }
    }

    /// Wait out the consistency grace period
    pub(crate) async fn wait_grace_period(&self) {
        if self.grace_period.is_zero() {
            return;
        }
        debug!(
            "Waiting {:?} for the API to propagate the change",
            self.grace_period
        );
        tokio::time::sleep(self.grace_period).await;
    }
}

/// Build an error message from a context and an optional response body
pub(crate) fn failure_message(error_context: &str, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("Failed to fetch {}", error_context)
    } else {
        format!("Failed to fetch {}: {}", error_context, body)
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url("test-token".to_string(), base_url.to_string())
    }
}
