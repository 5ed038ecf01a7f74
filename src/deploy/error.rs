// ABOUTME: Error types for deploy run transitions.
// ABOUTME: Remote failures keep the step they happened in; terminal statuses name the status.

use std::fmt;
use std::time::Duration;

use crate::ops::ApiError;
use crate::status::DeployStatus;

/// Which remote call a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    TriggerDeploy,
    PollStatus,
    ResolveServiceUrl,
    CreateDeployment,
    UpdateDeployment,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Step::TriggerDeploy => "trigger deploy",
            Step::PollStatus => "poll deploy status",
            Step::ResolveServiceUrl => "resolve service url",
            Step::CreateDeployment => "create deployment",
            Step::UpdateDeployment => "update deployment status",
        };
        f.write_str(s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// A remote call failed. Never retried.
    #[error("{step} failed: {source}")]
    Api {
        step: Step,
        #[source]
        source: ApiError,
    },

    /// The deploy reached a failure status.
    #[error("deploy exited with status: {0}")]
    Failed(DeployStatus),

    /// Polling exceeded the configured timeout.
    #[error("deploy did not reach a terminal status within {}s", .0.as_secs())]
    TimedOut(Duration),
}

impl DeployError {
    pub(crate) fn api(step: Step) -> impl FnOnce(ApiError) -> DeployError {
        move |source| DeployError::Api { step, source }
    }

    /// The step a remote failure happened in.
    pub fn step(&self) -> Option<Step> {
        match self {
            DeployError::Api { step, .. } => Some(*step),
            _ => None,
        }
    }
}
