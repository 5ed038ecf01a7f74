// ABOUTME: Capability trait for the hosting service that builds and releases.
// ABOUTME: Trigger a deploy, read its status, find the public URL.

use async_trait::async_trait;

use super::error::ApiError;
use crate::status::DeployStatus;
use crate::types::DeployId;

/// Deploy operations against the hosting service.
#[async_trait]
pub trait DeployOps: Send + Sync {
    /// Start a new deploy of the configured service.
    async fn trigger_deploy(&self, clear_cache: bool) -> Result<DeployId, ApiError>;

    /// Current status of a deploy.
    async fn poll_status(&self, deploy: &DeployId) -> Result<DeployStatus, ApiError>;

    /// Externally reachable URL, preferring a verified custom domain.
    async fn resolve_service_url(&self) -> Result<String, ApiError>;
}
