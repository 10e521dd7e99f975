//! Command execution tests against an in-memory Gitea

mod support;

use edison::commands::*;
use edison::config::{Config, LoadedConfig};
use edison::output::Styler;
use edison_gitea::CreateRepoOption;
use std::sync::Arc;
use support::FakeGitea;

fn context_for(api: Arc<FakeGitea>) -> CommandContext {
    CommandContext::with_connection(
        LoadedConfig::default(),
        Styler::plain(),
        Connection::Connected(api),
    )
}

fn offline_context() -> CommandContext {
    CommandContext::new(LoadedConfig::default(), Styler::plain())
}

fn account() -> FakeGitea {
    FakeGitea::new("alice")
        .with_repo("alice", "a", &[("Go", 100)])
        .with_repo("alice", "b", &[("Go", 100), ("Python", 200)])
        .with_repo("acme", "shared", &[("Java", 50)])
        .with_org("acme", &["shared", "infra"])
}

#[tokio::test]
async fn test_network_commands_report_missing_settings() {
    let context = offline_context();

    let error = GetUserCommand.execute(&context).await.unwrap_err();
    assert!(error.to_string().contains("Cannot connect to Gitea"));

    let error = RepoCountCommand.execute(&context).await.unwrap_err();
    assert!(error.to_string().contains("'token' is not set"));
}

#[tokio::test]
async fn test_local_commands_work_offline() {
    let context = offline_context();
    assert!(PrintAsciiCommand.execute(&context).await.is_ok());
    assert!(PrintConfigCommand.execute(&context).await.is_ok());
}

#[tokio::test]
async fn test_statistics_commands_succeed() {
    let context = context_for(Arc::new(account()));

    assert!(GiteaVersionCommand.execute(&context).await.is_ok());
    assert!(GetUserCommand.execute(&context).await.is_ok());
    assert!(RepoCountCommand.execute(&context).await.is_ok());
    assert!(ListReposCommand { json: false }.execute(&context).await.is_ok());
    assert!(ListReposCommand { json: true }.execute(&context).await.is_ok());
    assert!(LanguagesCommand { top: None }.execute(&context).await.is_ok());
    assert!(LanguagesCommand { top: Some(1) }.execute(&context).await.is_ok());
    assert!(CodeSizeCommand.execute(&context).await.is_ok());
}

#[tokio::test]
async fn test_statistics_survive_failing_language_fetch() {
    let api = account().with_failing_repo("alice", "broken");
    let context = context_for(Arc::new(api));

    assert!(LanguagesCommand { top: Some(3) }.execute(&context).await.is_ok());
    assert!(CodeSizeCommand.execute(&context).await.is_ok());
}

#[tokio::test]
async fn test_user_failure_propagates() {
    let context = context_for(Arc::new(account().with_failing_user()));

    assert!(GetUserCommand.execute(&context).await.is_err());
    assert!(RepoCountCommand.execute(&context).await.is_err());
    assert!(LanguagesCommand { top: None }.execute(&context).await.is_err());
}

#[tokio::test]
async fn test_list_org_repos_reports_failed_organization() {
    let api = account().with_failing_org("ghost");
    let context = context_for(Arc::new(api));

    let error = ListOrgReposCommand.execute(&context).await.unwrap_err();
    assert!(error.to_string().contains("ghost"));
    assert!(!error.to_string().contains("acme"));
}

#[tokio::test]
async fn test_list_org_repos_without_organizations() {
    let context = context_for(Arc::new(FakeGitea::new("alice")));
    assert!(ListOrgReposCommand.execute(&context).await.is_ok());
}

#[tokio::test]
async fn test_overview_succeeds_with_server() {
    let context = context_for(Arc::new(account()));
    assert!(OverviewCommand.execute(&context).await.is_ok());
}

#[tokio::test]
async fn test_overview_fails_after_printing_offline_parts() {
    let loaded = LoadedConfig {
        config: Config {
            ascii_art: vec!["EDISON".to_string()],
            ..Config::default()
        },
        path: None,
    };
    let context = CommandContext::new(loaded, Styler::plain());

    let error = OverviewCommand.execute(&context).await.unwrap_err();
    assert!(error.to_string().contains("Gitea version"));
}

#[tokio::test]
async fn test_create_repository_submits_options() {
    let api = FakeGitea::new("alice");
    let option = CreateRepoOption {
        name: "tools".to_string(),
        description: "helpers".to_string(),
        private: false,
    };

    let repo = create_repository(&api, &option).await.unwrap();
    assert_eq!(repo.display_name(), "alice/tools");
    assert!(!repo.private);
    assert_eq!(api.created(), vec![option]);
}

#[tokio::test]
async fn test_create_repository_rejects_invalid_name() {
    let api = FakeGitea::new("alice");
    let option = CreateRepoOption {
        name: "bad name".to_string(),
        ..CreateRepoOption::default()
    };

    assert!(create_repository(&api, &option).await.is_err());
    assert!(api.created().is_empty());
}

#[tokio::test]
async fn test_create_repo_command_with_arguments() {
    let api = Arc::new(FakeGitea::new("alice"));
    let context = context_for(api.clone());

    CreateRepoCommand {
        name: Some("dots".to_string()),
        description: None,
        private: None,
    }
    .execute(&context)
    .await
    .unwrap();

    let created = api.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name, "dots");
    assert!(created[0].private);
}

#[tokio::test]
async fn test_language_commands_run_as_trait_objects() {
    let context = context_for(Arc::new(account()));
    let commands: Vec<Box<dyn Command + Send + Sync>> = vec![
        Box::new(LanguagesCommand { top: None }),
        Box::new(LanguagesCommand { top: Some(2) }),
        Box::new(CodeSizeCommand),
        Box::new(OverviewCommand),
    ];

    for command in &commands {
        command.execute(&context).await.unwrap();
    }
}
