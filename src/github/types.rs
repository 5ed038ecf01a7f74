// ABOUTME: GitHub deployments REST API request and response shapes.
// ABOUTME: Covers deployment creation and deployment status updates.

use serde::{Deserialize, Serialize};

use crate::ops::DeploymentState;

#[derive(Debug, Serialize)]
pub(crate) struct CreateDeploymentRequest<'a> {
    #[serde(rename = "ref")]
    pub git_ref: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<&'a str>,
    pub production_environment: bool,
}

/// Response to a create request. 201 carries `id`; 202 carries only `message`.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateDeploymentResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateStatusRequest<'a> {
    pub state: DeploymentState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_url: Option<&'a str>,
}
