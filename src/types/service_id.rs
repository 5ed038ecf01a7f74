// ABOUTME: Render service identifier validation.
// ABOUTME: Rejects values that cannot be a single URL path segment.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceIdError {
    #[error("service id cannot be empty")]
    Empty,

    #[error("invalid character in service id: '{0}'")]
    InvalidChar(char),
}

/// Identifier of the Render service to deploy (e.g. `srv-cukouhrtq21c73e9scng`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceId(String);

impl ServiceId {
    pub fn new(value: &str) -> Result<Self, ServiceIdError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ServiceIdError::Empty);
        }

        if let Some(c) = value
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
        {
            return Err(ServiceIdError::InvalidChar(c));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
