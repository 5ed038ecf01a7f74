// ABOUTME: Optional YAML settings file for polling behaviour.
// ABOUTME: Durations use humantime syntax such as `10s` or `30m`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::ConfigError;

pub const SETTINGS_FILENAME: &str = "render-deploy.yml";
pub const SETTINGS_FILENAME_HIDDEN: &str = ".render-deploy.yml";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Pause before each status poll.
    #[serde(default = "default_poll_interval", with = "humantime_serde")]
    pub poll_interval: Duration,

    /// Give up polling after this long. Absent means poll until terminal.
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

fn default_poll_interval() -> Duration {
    Duration::from_secs(10)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            poll_interval: default_poll_interval(),
            timeout: None,
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_yaml::from_str(yaml)?;
        if settings.poll_interval.is_zero() {
            return Err(ConfigError::InvalidSetting(
                "poll_interval must be greater than zero".to_string(),
            ));
        }
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load `explicit` if given, else the first settings file found in `dir`,
    /// else defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::candidates(dir).into_iter().find(|p| p.exists()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading settings file");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    fn candidates(dir: &Path) -> [PathBuf; 2] {
        [
            dir.join(SETTINGS_FILENAME),
            dir.join(SETTINGS_FILENAME_HIDDEN),
        ]
    }
}
