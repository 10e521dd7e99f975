//! The Gitea operations edison depends on
//!
//! Commands and statistics only see this trait, so they can run against an
//! in-memory implementation in tests.

use crate::client::GiteaClient;
use crate::types::{CreateRepoOption, LanguageBytes, Organization, Repository, ServerVersion, User};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait GiteaApi: Send + Sync {
    /// The user the token belongs to
    async fn current_user(&self) -> Result<User>;

    async fn server_version(&self) -> Result<ServerVersion>;

    /// Every repository visible to the user, organization-owned ones included
    async fn my_repos(&self) -> Result<Vec<Repository>>;

    async fn my_orgs(&self) -> Result<Vec<Organization>>;

    async fn org_repos(&self, org: &str) -> Result<Vec<Repository>>;

    /// Language name to byte size for one repository
    async fn repo_languages(&self, owner: &str, repo: &str) -> Result<LanguageBytes>;

    async fn create_repo(&self, option: &CreateRepoOption) -> Result<Repository>;
}

#[async_trait]
impl GiteaApi for GiteaClient {
    async fn current_user(&self) -> Result<User> {
        self.get_user_info().await
    }

    async fn server_version(&self) -> Result<ServerVersion> {
        self.get_server_version().await
    }

    async fn my_repos(&self) -> Result<Vec<Repository>> {
        self.list_my_repos().await
    }

    async fn my_orgs(&self) -> Result<Vec<Organization>> {
        self.list_my_orgs().await
    }

    async fn org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        self.list_org_repos(org).await
    }

    async fn repo_languages(&self, owner: &str, repo: &str) -> Result<LanguageBytes> {
        self.get_repo_languages(owner, repo).await
    }

    async fn create_repo(&self, option: &CreateRepoOption) -> Result<Repository> {
        self.create_user_repo(option).await
    }
}
