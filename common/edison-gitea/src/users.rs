//! User and server operations

use crate::client::GiteaClient;
use crate::types::{ServerVersion, User};
use anyhow::Result;

impl GiteaClient {
    /// Get the user the token belongs to
    pub async fn get_user_info(&self) -> Result<User> {
        self.get_json("/user", "the authenticated user").await
    }

    /// Get the version string reported by the server
    pub async fn get_server_version(&self) -> Result<ServerVersion> {
        self.get_json("/version", "the server version").await
    }
}
