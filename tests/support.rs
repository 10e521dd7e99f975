//! In-memory Gitea server for integration tests
#![allow(dead_code)]

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use edison_gitea::{
    CreateRepoOption, GiteaApi, LanguageBytes, Organization, Repository, ServerVersion, User,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeGitea {
    pub user: User,
    pub version: String,
    pub repos: Vec<Repository>,
    pub orgs: Vec<Organization>,
    pub org_repos: HashMap<String, Vec<Repository>>,
    languages: HashMap<String, LanguageBytes>,
    failing_languages: HashSet<String>,
    failing_orgs: HashSet<String>,
    fail_user: bool,
    pub created: Mutex<Vec<CreateRepoOption>>,
}

impl FakeGitea {
    pub fn new(login: &str) -> Self {
        Self {
            user: User::new(login),
            version: "1.21.4".to_string(),
            ..Self::default()
        }
    }

    /// Add a repository owned by `owner` with the given language sizes
    pub fn with_repo(mut self, owner: &str, name: &str, languages: &[(&str, u64)]) -> Self {
        let repo = Repository::new(owner, name);
        self.languages.insert(
            repo.display_name(),
            languages
                .iter()
                .map(|(language, bytes)| (language.to_string(), *bytes))
                .collect(),
        );
        self.repos.push(repo);
        self
    }

    /// Add a repository whose language request fails
    pub fn with_failing_repo(mut self, owner: &str, name: &str) -> Self {
        let repo = Repository::new(owner, name);
        self.failing_languages.insert(repo.display_name());
        self.repos.push(repo);
        self
    }

    pub fn with_org(mut self, org: &str, repos: &[&str]) -> Self {
        self.orgs.push(Organization::new(org));
        self.org_repos.insert(
            org.to_string(),
            repos.iter().map(|name| Repository::new(org, *name)).collect(),
        );
        self
    }

    pub fn with_failing_org(mut self, org: &str) -> Self {
        self.orgs.push(Organization::new(org));
        self.failing_orgs.insert(org.to_string());
        self
    }

    pub fn with_failing_user(mut self) -> Self {
        self.fail_user = true;
        self
    }

    pub fn created(&self) -> Vec<CreateRepoOption> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl GiteaApi for FakeGitea {
    async fn current_user(&self) -> Result<User> {
        if self.fail_user {
            bail!("Failed to fetch the authenticated user: 401 Unauthorized");
        }
        Ok(self.user.clone())
    }

    async fn server_version(&self) -> Result<ServerVersion> {
        Ok(ServerVersion {
            version: self.version.clone(),
        })
    }

    async fn my_repos(&self) -> Result<Vec<Repository>> {
        Ok(self.repos.clone())
    }

    async fn my_orgs(&self) -> Result<Vec<Organization>> {
        Ok(self.orgs.clone())
    }

    async fn org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        if self.failing_orgs.contains(org) {
            bail!("Failed to list repositories of {org}: 404 Not Found");
        }
        Ok(self.org_repos.get(org).cloned().unwrap_or_default())
    }

    async fn repo_languages(&self, owner: &str, repo: &str) -> Result<LanguageBytes> {
        let key = format!("{owner}/{repo}");
        if self.failing_languages.contains(&key) {
            bail!("Failed to fetch languages of {key}: 500 Internal Server Error");
        }
        self.languages
            .get(&key)
            .cloned()
            .ok_or_else(|| anyhow!("Repository {key} not found"))
    }

    async fn create_repo(&self, option: &CreateRepoOption) -> Result<Repository> {
        self.created.lock().unwrap().push(option.clone());
        let mut repo = Repository::new(&self.user.login, &option.name);
        repo.private = option.private;
        repo.description = option.description.clone();
        Ok(repo)
    }
}
