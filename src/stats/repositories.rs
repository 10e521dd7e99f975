//! Repository enumeration and ownership filtering

use anyhow::{Context, Result};
use edison_gitea::{GiteaApi, Repository, User};

/// The authenticated user and the repositories counted for them
#[derive(Debug, Clone)]
pub struct RepositorySet {
    pub user: User,
    pub repositories: Vec<Repository>,
    /// Repositories visible to the user before filtering
    pub visible: usize,
}

impl RepositorySet {
    pub fn count(&self) -> usize {
        self.repositories.len()
    }
}

/// Keep repositories owned by `username`, or all of them with `include_orgs`
pub fn filter_by_owner(
    repositories: &[Repository],
    username: &str,
    include_orgs: bool,
) -> Vec<Repository> {
    if include_orgs {
        return repositories.to_vec();
    }

    repositories
        .iter()
        .filter(|repo| repo.owner_login() == username)
        .cloned()
        .collect()
}

/// Fetch the current user once and the repositories counted for them
///
/// Failing to fetch either aborts the enumeration.
pub async fn enumerate_repositories(api: &dyn GiteaApi, include_orgs: bool) -> Result<RepositorySet> {
    let user = api
        .current_user()
        .await
        .context("Failed to fetch the authenticated user")?;
    let all = api.my_repos().await.context("Failed to list repositories")?;

    let repositories = filter_by_owner(&all, &user.login, include_orgs);
    tracing::debug!(
        visible = all.len(),
        counted = repositories.len(),
        include_orgs,
        "enumerated repositories for {}",
        user.login
    );

    Ok(RepositorySet {
        user,
        visible: all.len(),
        repositories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repos() -> Vec<Repository> {
        vec![
            Repository::new("alice", "dots"),
            Repository::new("infra", "terraform"),
            Repository::new("alice", "site"),
            Repository::new("Alice", "case"),
        ]
    }

    #[test]
    fn test_filter_excludes_other_owners() {
        let kept = filter_by_owner(&repos(), "alice", false);
        let names: Vec<_> = kept.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["dots", "site"]);
        assert!(kept.iter().all(|r| r.owner_login() == "alice"));
    }

    #[test]
    fn test_filter_includes_orgs() {
        assert_eq!(filter_by_owner(&repos(), "alice", true).len(), 4);
    }

    #[test]
    fn test_filter_empty() {
        assert!(filter_by_owner(&[], "alice", false).is_empty());
    }

    #[test]
    fn test_filter_unknown_user() {
        assert!(filter_by_owner(&repos(), "mallory", false).is_empty());
    }
}
