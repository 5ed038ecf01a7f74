// ABOUTME: Entry point for the render-deploy CLI application.
// ABOUTME: Parses inputs, builds the API clients and runs one deploy.

mod cli;

use clap::Parser;
use cli::Cli;
use render_deploy::config::{Config, Secret, Settings};
use render_deploy::deploy::{PollPolicy, Report, RunOptions, Tracking, orchestrate};
use render_deploy::error::{Error, Result};
use render_deploy::github::GitHubClient;
use render_deploy::ops::TokioWait;
use render_deploy::output::{Output, OutputMode};
use render_deploy::render::RenderClient;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise the verbose flag picks the level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut output = Output::new(cli.output.unwrap_or_else(OutputMode::detect));
    output.start_timer();

    // Mask before anything can echo a credential, even if validation fails later
    for value in [&cli.api_key, &cli.github_token].into_iter().flatten() {
        output.mask(&Secret::new(value.trim()));
    }

    match run(cli, &output).await {
        Ok(report) => output.success(report.message()),
        Err(e) => {
            output.error(&e.to_string());
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli, output: &Output) -> Result<Report> {
    // Inputs first, so a missing option is reported before a bad settings file
    let config = Config::from_inputs(&cli.inputs())?;
    let cwd = env::current_dir().map_err(|e| Error::Other(e.to_string()))?;
    let config = config.with_settings(Settings::resolve(cli.config.as_deref(), &cwd)?);

    tracing::debug!(
        service_id = %config.service_id,
        clear_cache = config.clear_cache,
        wait_deploy = config.wait_deploy,
        github_deployment = config.tracking.is_some(),
        environment = ?config.tracking.as_ref().and_then(|t| t.environment.as_deref()),
        poll_interval = ?config.poll_interval,
        timeout = ?config.timeout,
        "configuration loaded"
    );

    let render = RenderClient::new(
        &config.render_api_url,
        &config.service_id,
        config.api_key.clone(),
    )?;
    let github = config
        .tracking
        .as_ref()
        .map(|t| GitHubClient::new(&t.api_url, &t.repository, t.token.clone()))
        .transpose()?;

    let tracking = config
        .tracking
        .as_ref()
        .zip(github.as_ref())
        .map(|(t, tracker)| Tracking {
            tracker,
            git_ref: &t.git_ref,
            environment: t.environment.as_deref(),
        });

    let options = RunOptions {
        clear_cache: config.clear_cache,
        wait_deploy: config.wait_deploy,
        policy: PollPolicy {
            interval: config.poll_interval,
            timeout: config.timeout,
        },
    };

    tracing::debug!(service_id = %config.service_id, "triggering deploy on render.com");
    let report = orchestrate(&render, tracking, &TokioWait, output, options).await?;
    Ok(report)
}
