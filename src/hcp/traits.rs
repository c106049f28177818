//! Common traits for TFE resources

use crate::hcp::{PaginationLinks, PaginationMeta};
use serde::Deserialize;

/// Common trait for TFE resources identified by ID and name
pub trait TfeResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;
}

/// Find a resource by exact, case-sensitive name
pub fn find_by_name<'a, R: TfeResource>(items: &'a [R], name: &str) -> Option<&'a R> {
    items.iter().find(|item| item.name() == name)
}

/// Trait for API responses that contain paginated data
///
/// Implement this trait for any response struct to enable use with
/// `TfeClient::fetch_all_pages()`.
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn meta(&self) -> Option<&PaginationMeta>;
    /// URL of the next page, if any
    fn next_link(&self) -> Option<&str>;
}

/// Generic API list response wrapper for paginated endpoints
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
    #[serde(default)]
    pub links: Option<PaginationLinks>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_data(self) -> Vec<T> {
        self.data
    }

    fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }

    fn next_link(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|l| l.next.as_deref())
            .filter(|next| !next.is_empty())
    }
}
