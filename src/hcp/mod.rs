//! TFE API client module
//!
//! This module provides functionality to interact with Terraform Enterprise API.

mod client;
mod credentials;
pub mod org_memberships;
pub mod team_members;
pub mod team_removal;
pub mod teams;
pub mod traits;

use serde::Deserialize;

pub use client::{api_base_url, TfeClient};
pub use credentials::TokenResolver;
pub use org_memberships::OrganizationMembership;
pub use team_members::RemovalResult;
pub use team_removal::{run_remove_command, ExitStatus};
pub use teams::Team;
pub use traits::{PaginatedResponse, TfeResource};

/// Pagination metadata from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    #[serde(rename = "current-page")]
    pub current_page: u32,
    #[serde(rename = "total-pages")]
    pub total_pages: u32,
    #[serde(rename = "total-count")]
    pub total_count: u32,
}

/// JSON:API top-level links of a list response
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationLinks {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub next: Option<String>,
}
