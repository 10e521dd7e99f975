//! Repository-related operations

use crate::client::{GiteaClient, parse_response};
use crate::types::{CreateRepoOption, LanguageBytes, Repository};
use anyhow::{Context, Result};
use reqwest::Method;

impl GiteaClient {
    /// List every repository the authenticated user can access
    ///
    /// This includes repositories owned by organizations the user belongs to;
    /// callers filter on the owner when they only want personal ones.
    pub async fn list_my_repos(&self) -> Result<Vec<Repository>> {
        self.get_paginated("/user/repos", "repositories").await
    }

    /// List every repository of an organization
    pub async fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        self.get_paginated(
            &format!("/orgs/{org}/repos"),
            &format!("repositories of organization {org}"),
        )
        .await
    }

    /// Get the language to byte-size map of a repository
    pub async fn get_repo_languages(&self, owner: &str, repo: &str) -> Result<LanguageBytes> {
        self.get_json(
            &format!("/repos/{owner}/{repo}/languages"),
            &format!("languages of {owner}/{repo}"),
        )
        .await
    }

    /// Create a repository owned by the authenticated user
    pub async fn create_user_repo(&self, option: &CreateRepoOption) -> Result<Repository> {
        let response = self
            .request(Method::POST, "/user/repos")
            .json(option)
            .send()
            .await
            .with_context(|| {
                format!("Failed to connect to {} while creating repository {}", self.base_url, option.name)
            })?;

        parse_response(response, &format!("created repository {}", option.name)).await
    }
}
