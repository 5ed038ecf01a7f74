// ABOUTME: Render deploy status values and their terminal classification.
// ABOUTME: Unknown values are kept verbatim and always classify as pending.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status of a single Render deploy, as reported by `GET /deploys/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeployStatus {
    Created,
    BuildInProgress,
    UpdateInProgress,
    Live,
    Deactivated,
    BuildFailed,
    UpdateFailed,
    Canceled,
    PreDeployFailed,
    /// A value this build does not know about yet.
    Other(String),
}

/// Where a deploy stands after looking at one status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The deploy is live.
    Success,
    /// The deploy stopped and will not become live.
    Failure,
    /// Keep polling.
    Pending,
}

impl DeployStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "created" => Self::Created,
            "build_in_progress" => Self::BuildInProgress,
            "update_in_progress" => Self::UpdateInProgress,
            "live" => Self::Live,
            "deactivated" => Self::Deactivated,
            "build_failed" => Self::BuildFailed,
            "update_failed" => Self::UpdateFailed,
            "canceled" => Self::Canceled,
            "pre_deploy_failed" => Self::PreDeployFailed,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire spelling of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Created => "created",
            Self::BuildInProgress => "build_in_progress",
            Self::UpdateInProgress => "update_in_progress",
            Self::Live => "live",
            Self::Deactivated => "deactivated",
            Self::BuildFailed => "build_failed",
            Self::UpdateFailed => "update_failed",
            Self::Canceled => "canceled",
            Self::PreDeployFailed => "pre_deploy_failed",
            Self::Other(value) => value,
        }
    }

    pub fn classify(&self) -> Outcome {
        match self {
            Self::Live => Outcome::Success,
            Self::BuildFailed
            | Self::Canceled
            | Self::Deactivated
            | Self::UpdateFailed
            | Self::PreDeployFailed => Outcome::Failure,
            Self::Created | Self::BuildInProgress | Self::UpdateInProgress | Self::Other(_) => {
                Outcome::Pending
            }
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Classify a raw status string. Total: never fails, never guesses success.
pub fn classify(status: &str) -> Outcome {
    DeployStatus::parse(status).classify()
}

impl fmt::Display for DeployStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DeployStatus {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl Serialize for DeployStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeployStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}
