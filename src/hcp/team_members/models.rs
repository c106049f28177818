//! Team membership relationship models

use serde::Serialize;

use crate::config::api;

/// Request body for the team organization-memberships relationship
#[derive(Serialize, Debug, PartialEq)]
pub struct MembershipRelationshipRequest {
    pub data: Vec<MembershipRef>,
}

/// Organization membership resource reference
#[derive(Serialize, Debug, PartialEq)]
pub struct MembershipRef {
    #[serde(rename = "type")]
    pub ref_type: String,
    pub id: String,
}

impl MembershipRelationshipRequest {
    /// Build a request referencing the given membership IDs, in order
    pub fn new<S: AsRef<str>>(membership_ids: &[S]) -> Self {
        Self {
            data: membership_ids
                .iter()
                .map(|id| MembershipRef {
                    ref_type: api::ORGANIZATION_MEMBERSHIPS.to_string(),
                    id: id.as_ref().to_string(),
                })
                .collect(),
        }
    }
}

/// Outcome of a bulk removal attempt
///
/// Failures are carried as data, never as an error, so the caller can
/// still report on the whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalResult {
    pub ok: bool,
    /// HTTP status, absent when no response was received
    pub status_code: Option<u16>,
    /// Response body or transport diagnostic
    pub body: String,
}

impl RemovalResult {
    pub(crate) fn success(status: u16) -> Self {
        Self {
            ok: true,
            status_code: Some(status),
            body: String::new(),
        }
    }

    pub(crate) fn failure(status_code: Option<u16>, body: impl Into<String>) -> Self {
        Self {
            ok: false,
            status_code,
            body: body.into(),
        }
    }
}
