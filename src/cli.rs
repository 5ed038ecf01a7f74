// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Every option can also come from the variable GitHub Actions sets for it.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use render_deploy::config::Inputs;
use render_deploy::output::OutputMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "render-deploy")]
#[command(about = "Trigger a Render deploy and optionally track it as a GitHub deployment")]
#[command(version)]
pub struct Cli {
    /// Render service to deploy (srv-...)
    #[arg(long, env = "INPUT_SERVICE_ID")]
    pub service_id: Option<String>,

    /// Render API key
    #[arg(long, env = "INPUT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Clear the build cache before building
    #[arg(long, env = "INPUT_CLEAR_CACHE", num_args = 0..=1, default_missing_value = "true")]
    pub clear_cache: Option<String>,

    /// Wait until the deploy is live or has failed
    #[arg(long, env = "INPUT_WAIT_DEPLOY", num_args = 0..=1, default_missing_value = "true")]
    pub wait_deploy: Option<String>,

    /// Mirror the deploy into a GitHub deployment
    #[arg(long, env = "INPUT_GITHUB_DEPLOYMENT", num_args = 0..=1, default_missing_value = "true")]
    pub github_deployment: Option<String>,

    /// Token for the GitHub deployments API
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// GitHub deployment environment name
    #[arg(long, env = "INPUT_DEPLOYMENT_ENVIRONMENT")]
    pub deployment_environment: Option<String>,

    /// Commit reference the deployment is for
    #[arg(long = "ref", env = "GITHUB_REF")]
    pub git_ref: Option<String>,

    /// Repository as owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    pub github_api_url: Option<String>,

    /// Render REST API base URL
    #[arg(long, env = "RENDER_API_URL")]
    pub render_api_url: Option<String>,

    /// Settings file (default: render-deploy.yml in the working directory, if present)
    #[arg(long, env = "RENDER_DEPLOY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (default: actions inside GitHub Actions, normal elsewhere)
    #[arg(long, value_enum)]
    pub output: Option<OutputMode>,

    /// Enable debug logging
    #[arg(
        short,
        long,
        env = "RUNNER_DEBUG",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub verbose: bool,
}

impl Cli {
    pub fn inputs(&self) -> Inputs {
        Inputs {
            service_id: self.service_id.clone(),
            api_key: self.api_key.clone(),
            clear_cache: self.clear_cache.clone(),
            wait_deploy: self.wait_deploy.clone(),
            github_deployment: self.github_deployment.clone(),
            github_token: self.github_token.clone(),
            deployment_environment: self.deployment_environment.clone(),
            git_ref: self.git_ref.clone(),
            repository: self.repository.clone(),
            github_api_url: self.github_api_url.clone(),
            render_api_url: self.render_api_url.clone(),
        }
    }
}
