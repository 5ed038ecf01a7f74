// ABOUTME: Application-wide error types for render-deploy.
// ABOUTME: Variant order is the reporting priority: config, transport, terminal status, other.

use thiserror::Error;

use crate::config::ConfigError;
use crate::deploy::DeployError;
use crate::ops::ApiError;
use crate::status::DeployStatus;
use crate::transport::TransportFailure;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid input. No remote call was made.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A remote call came back with an error status.
    #[error("{}", .0.message())]
    Transport(TransportFailure),

    /// The deploy reached a failure status.
    #[error("deploy exited with status: {status}")]
    DeployFailed { status: DeployStatus },

    #[error("deploy did not reach a terminal status within {0}s")]
    PollTimeout(u64),

    /// Anything else, reported with the collaborator's own message.
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { source } => Error::Transport(source),
            other => Error::Other(other.to_string()),
        }
    }
}

impl From<DeployError> for Error {
    fn from(err: DeployError) -> Self {
        match err {
            DeployError::Api { step, source } => {
                tracing::debug!(%step, error = %source, "remote call failed");
                Error::from(source)
            }
            DeployError::Failed(status) => Error::DeployFailed { status },
            DeployError::TimedOut(limit) => Error::PollTimeout(limit.as_secs()),
        }
    }
}
