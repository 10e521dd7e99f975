use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use edison::commands::validators;
use edison::utils::translate_legacy_args;
use edison::{commands::*, config::Config, constants, output::Styler};
use std::{env, io, path::PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "edison")]
#[command(about = "A cli tool to explore your Gitea account")]
#[command(version)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    debug: bool,

    /// Fetch repository languages concurrently
    #[arg(long, global = true)]
    parallel: bool,

    /// Count repositories owned by your organizations too
    #[arg(long, global = true)]
    include_orgs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the configured ASCII art
    #[command(visible_alias = "pa")]
    PrintAscii,

    /// Print the version of the Gitea server
    #[command(visible_alias = "gv")]
    GiteaVersion,

    /// Print the loaded configuration with the token masked
    #[command(visible_alias = "pc")]
    PrintConfig,

    /// Print the authenticated user
    #[command(visible_alias = "gu")]
    GetUser,

    /// List your repositories with their SSH URLs
    #[command(visible_alias = "lr")]
    ListRepos {
        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// List the repositories of your organizations
    #[command(visible_alias = "lor")]
    ListOrgRepos,

    /// Print how many repositories you own
    #[command(visible_alias = "rc")]
    RepoCount,

    /// Create a repository, asking for details when no name is given
    #[command(visible_alias = "cr")]
    CreateRepo {
        /// Repository name
        #[arg(long)]
        name: Option<String>,

        /// Repository description
        #[arg(long, requires = "name")]
        description: Option<String>,

        /// Make the repository private (default)
        #[arg(long, requires = "name")]
        private: bool,

        /// Make the repository public
        #[arg(long, requires = "name")]
        public: bool,
    },

    /// Print every language you use with its share of code size
    #[command(visible_alias = "pul")]
    PrintUserLangs,

    /// Print your most used languages
    #[command(visible_alias = "tul")]
    TopUserLangs {
        /// Number of languages to show (defaults to `top_langs` from the config)
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },

    /// Print the total size of your code in bytes
    #[command(visible_alias = "loc")]
    LinesOfCode,

    /// Generate a shell completion script
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn init_tracing(debug: bool) {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) if !debug => filter,
        _ if debug => EnvFilter::new(constants::logging::DEBUG_FILTER),
        _ => EnvFilter::new(constants::logging::DEFAULT_FILTER),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_from(translate_legacy_args(env::args()));
    init_tracing(cli.debug);

    // Completions need neither configuration nor a server
    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "edison", &mut io::stdout());
        return Ok(());
    }

    let loaded = Config::load_or_default(cli.config.as_deref())?;
    let styler = Styler::new(loaded.config.color && !cli.no_color);

    let mut context = CommandContext::new(loaded, styler);
    context.include_orgs |= cli.include_orgs;
    context.parallel = cli.parallel;

    match cli.command {
        Some(command) => execute_builtin_command(command, &context).await,
        None => OverviewCommand.execute(&context).await,
    }
}

async fn execute_builtin_command(command: Commands, context: &CommandContext) -> Result<()> {
    match command {
        Commands::Completions { .. } => {
            unreachable!("Completions are handled in main()")
        }
        Commands::PrintAscii => PrintAsciiCommand.execute(context).await,
        Commands::GiteaVersion => GiteaVersionCommand.execute(context).await,
        Commands::PrintConfig => PrintConfigCommand.execute(context).await,
        Commands::GetUser => GetUserCommand.execute(context).await,
        Commands::ListRepos { json } => ListReposCommand { json }.execute(context).await,
        Commands::ListOrgRepos => ListOrgReposCommand.execute(context).await,
        Commands::RepoCount => RepoCountCommand.execute(context).await,
        Commands::CreateRepo {
            name,
            description,
            private,
            public,
        } => {
            validators::validate_visibility_flags(private, public)?;
            if let Some(name) = &name {
                validators::validate_repository_name(name.trim())?;
            }

            CreateRepoCommand {
                name,
                description,
                private: if public { Some(false) } else if private { Some(true) } else { None },
            }
            .execute(context)
            .await
        }
        Commands::PrintUserLangs => LanguagesCommand { top: None }.execute(context).await,
        Commands::TopUserLangs { top } => {
            validators::validate_top_count(top)?;
            LanguagesCommand {
                top: Some(top.unwrap_or(context.config.top_langs)),
            }
            .execute(context)
            .await
        }
        Commands::LinesOfCode => CodeSizeCommand.execute(context).await,
    }
}
