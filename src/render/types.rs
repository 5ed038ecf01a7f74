// ABOUTME: Render REST API request and response shapes.
// ABOUTME: Only the fields the deploy flow reads are modelled.

use serde::{Deserialize, Serialize};

use crate::status::DeployStatus;
use crate::types::DeployId;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TriggerDeployRequest {
    pub clear_cache: ClearCache,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ClearCache {
    Clear,
    DoNotClear,
}

impl From<bool> for ClearCache {
    fn from(clear: bool) -> Self {
        if clear {
            ClearCache::Clear
        } else {
            ClearCache::DoNotClear
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeployResponse {
    pub id: DeployId,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeployStatusResponse {
    pub status: DeployStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomDomainEntry {
    pub custom_domain: CustomDomain,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CustomDomain {
    pub name: String,
}

/// Older API versions put `url` at the top level, current ones under `serviceDetails`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ServiceResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub service_details: Option<ServiceDetails>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceDetails {
    #[serde(default)]
    pub url: Option<String>,
}

impl ServiceResponse {
    pub fn into_url(self) -> Option<String> {
        self.url
            .or_else(|| self.service_details.and_then(|d| d.url))
            .filter(|u| !u.is_empty())
    }
}
