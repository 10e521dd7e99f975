//! Gitea API payloads
//!
//! Only the fields edison reads are declared; everything else in the
//! responses is ignored by serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language name to size in bytes, as returned by `/repos/{owner}/{repo}/languages`
pub type LanguageBytes = BTreeMap<String, u64>;

/// A Gitea user, either the authenticated user or a repository owner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(alias = "username")]
    pub login: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            ..Self::default()
        }
    }
}

/// A repository as listed by `/user/repos` and `/orgs/{org}/repos`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub id: i64,
    pub owner: User,
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub ssh_url: String,
    #[serde(default)]
    pub clone_url: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Repository {
    /// Build a repository record from owner and name, mostly useful in tests
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        let owner = User::new(owner);
        let name = name.into();
        Self {
            full_name: format!("{}/{}", owner.login, name),
            owner,
            name,
            ..Self::default()
        }
    }

    /// Login of the user or organization owning the repository
    pub fn owner_login(&self) -> &str {
        &self.owner.login
    }

    /// `owner/name`, falling back to joining the parts when the server omits it
    pub fn display_name(&self) -> String {
        if self.full_name.is_empty() {
            format!("{}/{}", self.owner.login, self.name)
        } else {
            self.full_name.clone()
        }
    }
}

/// An organization the authenticated user belongs to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub id: i64,
    #[serde(alias = "name")]
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub description: String,
}

impl Organization {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }
}

/// Response of `/version`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerVersion {
    pub version: String,
}

/// Body of `POST /user/repos`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRepoOption {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    pub private: bool,
}
