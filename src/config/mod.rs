// ABOUTME: Validated run configuration built from action inputs and settings.
// ABOUTME: Every required option is checked before any remote call is made.

mod inputs;
mod secret;
mod settings;

pub use inputs::Inputs;
pub use secret::Secret;
pub use settings::{SETTINGS_FILENAME, SETTINGS_FILENAME_HIDDEN, Settings};

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::types::{Repository, ServiceId};
use crate::{github, render};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error("input does not meet YAML 1.2 \"Core Schema\" specification: {0}")]
    InvalidBoolean(&'static str),

    #[error("invalid input {name}: {reason}")]
    InvalidInput { name: &'static str, reason: String },

    #[error("invalid settings: {0}")]
    InvalidSetting(String),

    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("settings parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Everything needed to mirror a deploy into GitHub deployments.
#[derive(Debug, Clone)]
pub struct TrackingConfig {
    pub token: Secret,
    pub repository: Repository,
    pub git_ref: String,
    pub environment: Option<String>,
    pub api_url: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service_id: ServiceId,
    pub api_key: Secret,
    pub render_api_url: String,
    pub clear_cache: bool,
    pub wait_deploy: bool,
    /// `None` when GitHub deployment tracking is disabled.
    pub tracking: Option<TrackingConfig>,
    pub poll_interval: Duration,
    pub timeout: Option<Duration>,
}

impl Config {
    /// Validate inputs in a fixed order so the first missing option is reported.
    ///
    /// Polling uses the default settings until `with_settings` replaces them.
    pub fn from_inputs(inputs: &Inputs) -> Result<Self, ConfigError> {
        let service_id = inputs::required(inputs.service_id.as_deref(), "service_id")?;
        let service_id =
            ServiceId::new(&service_id).map_err(|e| ConfigError::InvalidInput {
                name: "service_id",
                reason: e.to_string(),
            })?;
        let api_key = Secret::new(inputs::required(inputs.api_key.as_deref(), "api_key")?);

        let clear_cache = inputs::boolean(inputs.clear_cache.as_deref(), "clear_cache")?;
        let wait_deploy = inputs::boolean(inputs.wait_deploy.as_deref(), "wait_deploy")?;
        let github_deployment =
            inputs::boolean(inputs.github_deployment.as_deref(), "github_deployment")?;

        let tracking = if github_deployment {
            Some(Self::tracking_from_inputs(inputs)?)
        } else {
            None
        };

        let settings = Settings::default();
        Ok(Config {
            service_id,
            api_key,
            render_api_url: inputs::optional(inputs.render_api_url.as_deref())
                .unwrap_or_else(|| render::DEFAULT_API_URL.to_string()),
            clear_cache,
            wait_deploy,
            tracking,
            poll_interval: settings.poll_interval,
            timeout: settings.timeout,
        })
    }

    /// Take the polling behaviour from a loaded settings file.
    pub fn with_settings(self, settings: Settings) -> Self {
        Config {
            poll_interval: settings.poll_interval,
            timeout: settings.timeout,
            ..self
        }
    }

    fn tracking_from_inputs(inputs: &Inputs) -> Result<TrackingConfig, ConfigError> {
        let token = Secret::new(inputs::required(
            inputs.github_token.as_deref(),
            "github_token",
        )?);
        let repository = inputs::required(inputs.repository.as_deref(), "repository")?;
        let repository =
            Repository::parse(&repository).map_err(|e| ConfigError::InvalidInput {
                name: "repository",
                reason: e.to_string(),
            })?;
        let git_ref = inputs::required(inputs.git_ref.as_deref(), "ref")?;

        Ok(TrackingConfig {
            token,
            repository,
            git_ref,
            environment: inputs::optional(inputs.deployment_environment.as_deref()),
            api_url: inputs::optional(inputs.github_api_url.as_deref())
                .unwrap_or_else(|| github::DEFAULT_API_URL.to_string()),
        })
    }

    /// Credentials that must be masked in any log output.
    pub fn secrets(&self) -> Vec<&Secret> {
        let mut secrets = vec![&self.api_key];
        if let Some(tracking) = &self.tracking {
            secrets.push(&tracking.token);
        }
        secrets
    }
}
