// ABOUTME: Error type shared by the remote API clients, SNAFU pattern.
// ABOUTME: Separates classified HTTP failures from network and decoding problems.

use snafu::Snafu;

use crate::transport::TransportFailure;

/// Failure of a single remote call.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ApiError {
    /// The server answered with an error-class status.
    #[snafu(display("{source}"))]
    Status { source: TransportFailure },

    #[snafu(display("request to {url} failed: {source}"))]
    Request { url: String, source: reqwest::Error },

    #[snafu(display("could not decode {what}: {source}"))]
    Decode {
        what: &'static str,
        source: serde_json::Error,
    },

    #[snafu(display("response is missing {field}"))]
    MissingField { field: &'static str },

    /// The server accepted the request but declined to act on it.
    #[snafu(display("{message}"))]
    Rejected { message: String },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Non-2xx response.
    Status,
    /// Connection, TLS or timeout failure.
    Network,
    /// Body did not have the expected shape.
    Malformed,
    /// 2xx response that still did not do what was asked.
    Rejected,
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Status { .. } => ApiErrorKind::Status,
            ApiError::Request { .. } => ApiErrorKind::Network,
            ApiError::Decode { .. } | ApiError::MissingField { .. } => ApiErrorKind::Malformed,
            ApiError::Rejected { .. } => ApiErrorKind::Rejected,
        }
    }

    /// The HTTP failure, if the server answered with an error status.
    pub fn transport_failure(&self) -> Option<&TransportFailure> {
        match self {
            ApiError::Status { source } => Some(source),
            _ => None,
        }
    }
}

impl From<TransportFailure> for ApiError {
    fn from(source: TransportFailure) -> Self {
        ApiError::Status { source }
    }
}
