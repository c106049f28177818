//! Team data models

use serde::{Deserialize, Serialize};

use crate::hcp::traits::TfeResource;

/// Team data from TFE API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Team {
    pub id: String,
    #[serde(rename = "type")]
    pub team_type: Option<String>,
    pub attributes: Option<TeamAttributes>,
}

/// Team attributes from TFE API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TeamAttributes {
    pub name: Option<String>,
    #[serde(rename = "users-count")]
    pub users_count: Option<u32>,
    pub visibility: Option<String>,
}

impl Team {
    /// Get team name from attributes
    pub fn name(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .unwrap_or("")
    }

    /// Get users count from attributes
    pub fn users_count(&self) -> u32 {
        self.attributes
            .as_ref()
            .and_then(|a| a.users_count)
            .unwrap_or(0)
    }

    /// Get visibility from attributes
    pub fn visibility(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.visibility.as_deref())
            .unwrap_or("secret")
    }
}

impl TfeResource for Team {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.name()
    }
}
