// ABOUTME: Raw action inputs and their GitHub Actions boolean semantics.
// ABOUTME: Values arrive as optional strings from flags or INPUT_* variables.

use super::ConfigError;

/// Unvalidated inputs, one field per recognised option.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub service_id: Option<String>,
    pub api_key: Option<String>,
    pub clear_cache: Option<String>,
    pub wait_deploy: Option<String>,
    pub github_deployment: Option<String>,
    pub github_token: Option<String>,
    pub deployment_environment: Option<String>,
    pub git_ref: Option<String>,
    pub repository: Option<String>,
    pub github_api_url: Option<String>,
    pub render_api_url: Option<String>,
}

/// A required input; blank counts as missing.
pub(crate) fn required(value: Option<&str>, name: &'static str) -> Result<String, ConfigError> {
    optional(value).ok_or(ConfigError::MissingInput(name))
}

/// An optional input; blank counts as absent.
pub(crate) fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Boolean input using the YAML 1.2 core schema spellings. Absent means false.
pub(crate) fn boolean(value: Option<&str>, name: &'static str) -> Result<bool, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Ok(false),
        Some("true" | "True" | "TRUE") => Ok(true),
        Some("false" | "False" | "FALSE") => Ok(false),
        Some(_) => Err(ConfigError::InvalidBoolean(name)),
    }
}
