// ABOUTME: Capability traits the orchestrator is written against.
// ABOUTME: Defines DeployOps, TrackerOps, Wait and the shared ApiError.

mod deploy;
mod error;
mod tracker;
mod wait;

pub use deploy::DeployOps;
pub use error::{ApiError, ApiErrorKind};
pub use tracker::{DeploymentState, TrackerOps};
pub use wait::{TokioWait, Wait};

pub(crate) use error::{DecodeSnafu, RequestSnafu};
