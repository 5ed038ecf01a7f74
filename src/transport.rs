// ABOUTME: Failed HTTP responses and their stable, human-readable messages.
// ABOUTME: The message table is fixed; unmapped codes share a generic fallback.

use std::fmt;

/// Message used for any status code without a dedicated entry.
pub const UNEXPECTED_ERROR: &str = "unexpected error";

/// A remote call that came back with an error-class status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub status: u16,
    pub body: Option<String>,
}

impl TransportFailure {
    pub fn new(status: u16, body: Option<String>) -> Self {
        let body = body.filter(|b| !b.trim().is_empty());
        Self { status, body }
    }

    /// The classified message for this failure's status code.
    pub fn message(&self) -> &'static str {
        classify(self.status)
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for TransportFailure {}

/// Map an HTTP status code from a failed call to its message.
pub fn classify(status: u16) -> &'static str {
    match status {
        400 => "request could not be understood by the server",
        401 => "authorization information is missing or invalid",
        403 => "no permissions for the requested resource",
        404 => "unable to find the requested resource",
        406 => "unable to generate preferred media type for Accept header",
        410 => "requested resource no longer available",
        429 => "rate limit surpassed",
        500 => "unexpected server error",
        503 => "server currently unavailable",
        _ => UNEXPECTED_ERROR,
    }
}
