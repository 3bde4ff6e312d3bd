use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use pr_scripts_bot::{
    api::GithubClient,
    context::{ExecutionContext, TracingLogger},
    logging, output,
    scripts::Script,
};
use serde::Deserialize;
use shared::EventContext;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

#[derive(Deserialize)]
struct Env {
    github_token: String,
    script: String,
    script_args: Option<String>,
    github_api_url: Option<String>,
    github_output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let env = envy::from_env::<Env>()?;

    let subscriber = tracing_subscriber::registry()
        .with(logging::env_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .with(tracing_subscriber::fmt::layer());
    tracing::subscriber::set_global_default(subscriber)?;

    let script: Script = env
        .script
        .parse()
        .with_context(|| format!("Unknown script: {}", env.script))?;
    let args = match env.script_args.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            serde_json::from_str(raw).context("SCRIPT_ARGS should be a JSON object")?
        }
        _ => serde_json::json!({}),
    };

    let github = GithubClient::new(env.github_token, env.github_api_url)?;
    let context = ExecutionContext {
        logger: Arc::new(TracingLogger),
        github: Arc::new(github),
        event: EventContext::from_env()?,
    };

    info!("Running {script} script");
    let result = script.execute(&context, args).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    if let Some(path) = env.github_output {
        output::write_step_output(&path, &result)?;
    }

    Ok(())
}
