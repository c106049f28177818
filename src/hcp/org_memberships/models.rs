//! Organization membership data models

use serde::{Deserialize, Serialize};

/// Organization membership data from TFE API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OrganizationMembership {
    pub id: String,
    #[serde(rename = "type")]
    pub membership_type: Option<String>,
    pub attributes: Option<OrganizationMembershipAttributes>,
    pub relationships: Option<OrganizationMembershipRelationships>,
}

/// Organization membership attributes from TFE API
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct OrganizationMembershipAttributes {
    pub email: Option<String>,
    pub status: Option<String>,
}

/// Organization membership relationships
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OrganizationMembershipRelationships {
    pub user: Option<RelationshipData>,
    pub teams: Option<TeamsRelationship>,
}

/// Single-resource relationship
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RelationshipData {
    pub data: Option<RelationshipItem>,
}

/// Relationship item with id and type
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RelationshipItem {
    pub id: String,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
}

/// Teams relationship (array)
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TeamsRelationship {
    #[serde(default)]
    pub data: Option<Vec<RelationshipItem>>,
}

impl OrganizationMembership {
    /// Get email from attributes
    pub fn email(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.email.as_deref())
            .unwrap_or("")
    }

    /// Get status from attributes
    pub fn status(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.status.as_deref())
            .unwrap_or("unknown")
    }

    /// Get user ID from relationships
    pub fn user_id(&self) -> Option<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.user.as_ref())
            .and_then(|u| u.data.as_ref())
            .map(|d| d.id.as_str())
    }

    /// Get team IDs from relationships
    pub fn team_ids(&self) -> Vec<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.teams.as_ref())
            .and_then(|t| t.data.as_ref())
            .map(|items| {
                items
                    .iter()
                    .map(|d| d.id.as_str())
                    .filter(|id| !id.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check whether the membership is attached to a team
    pub fn has_team(&self, team_id: &str) -> bool {
        self.team_ids().contains(&team_id)
    }
}
