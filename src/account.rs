//! Account and user models

use serde::{Deserialize, Serialize};

/// The authenticated account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub activated: bool,
    #[serde(default)]
    pub authorities: Vec<Authority>,
    pub email: String,
    pub first_name: Option<String>,
    pub lang_key: String,
    pub last_name: Option<String>,
    pub username: String,
    pub image_url: Option<String>,
}

/// A granted role, e.g. `ROLE_ADMIN`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Authority {
    pub authority: String,
}

impl Authority {
    pub fn new(authority: &str) -> Self {
        Self { authority: authority.to_string() }
    }
}

impl Account {
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a.authority == authority)
    }

    /// First and last name when present, falling back to the username
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            self.username.clone()
        } else {
            parts.join(" ")
        }
    }
}

/// A user entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}
