// ABOUTME: Capability trait for the external deployment-record system.
// ABOUTME: Create one record per run and move it through its visible states.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use super::error::ApiError;
use crate::types::DeploymentId;

/// Visible state of a deployment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentState {
    InProgress,
    Success,
    Failure,
}

impl DeploymentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentState::InProgress => "in_progress",
            DeploymentState::Success => "success",
            DeploymentState::Failure => "failure",
        }
    }
}

impl fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment record operations.
#[async_trait]
pub trait TrackerOps: Send + Sync {
    /// Create a record for `git_ref`. Failure is fatal to the run.
    async fn create(
        &self,
        git_ref: &str,
        environment: Option<&str>,
    ) -> Result<DeploymentId, ApiError>;

    /// Set the record's state. `url` is `None` when no URL is meaningful yet.
    async fn update_status(
        &self,
        deployment: &DeploymentId,
        state: DeploymentState,
        url: Option<&str>,
    ) -> Result<(), ApiError>;
}
