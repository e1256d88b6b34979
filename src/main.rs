use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use artifact2pr::actions;
use artifact2pr::config::ActionConfig;
use artifact2pr::event::{ActionEnvironment, EventPayload, RunContext};
use artifact2pr::platform::github::GitHubPlatform;
use artifact2pr::workflow::{self, SyncOptions};

#[derive(Parser)]
#[command(
    name = "artifact2pr",
    version,
    about = "Comment on a pull request with links to the workflow run's artifacts"
)]
struct Cli {
    /// Path to an optional configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "artifact2pr failed");
            println!("{}", actions::error_command(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = ActionConfig::load(cli.config.as_deref())?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Running artifact2pr");

    let env = ActionEnvironment::from_env();
    let payload = EventPayload::read(env.event_path.as_deref())?;
    let resolution = RunContext::resolve(&env, &payload)?;

    let platform = GitHubPlatform::new(&config.github_token, env.api_url.as_deref())?;
    let outcome = workflow::run(&platform, &resolution, &SyncOptions::from(&config)).await?;
    let outcome = workflow::enforce_pull_request(outcome, config.fail_on_non_pull_request)?;

    if let Some(path) = env.output_path.as_deref() {
        actions::write_outputs(
            path,
            &[
                (
                    "comment-id",
                    outcome.comment_id().map(|id| id.to_string()).unwrap_or_default(),
                ),
                ("artifact-count", outcome.artifact_count().to_string()),
            ],
        )?;
    }

    Ok(())
}
