//! Organization operations

use crate::client::GiteaClient;
use crate::types::Organization;
use anyhow::Result;

impl GiteaClient {
    /// List every organization the authenticated user belongs to
    pub async fn list_my_orgs(&self) -> Result<Vec<Organization>> {
        self.get_paginated("/user/orgs", "organizations").await
    }
}
