// ABOUTME: Render REST API client implementing DeployOps.
// ABOUTME: All calls are scoped to one service and authenticated with a bearer key.

use async_trait::async_trait;
use reqwest::Client;

use super::types::{
    ClearCache, CustomDomainEntry, DeployResponse, DeployStatusResponse, ServiceResponse,
    TriggerDeployRequest,
};
use crate::config::Secret;
use crate::http::{self, build_client};
use crate::ops::{ApiError, DeployOps};
use crate::status::DeployStatus;
use crate::types::{DeployId, ServiceId};

pub const DEFAULT_API_URL: &str = "https://api.render.com/v1";

/// Client for a single Render service.
#[derive(Debug, Clone)]
pub struct RenderClient {
    client: Client,
    service_url: String,
    api_key: Secret,
}

impl RenderClient {
    /// Create a client for `service` against the API rooted at `api_url`.
    pub fn new(api_url: &str, service: &ServiceId, api_key: Secret) -> Result<Self, ApiError> {
        let client = build_client(api_url)?;
        let service_url = http::join(
            api_url,
            &format!("services/{}", urlencoding::encode(service.as_str())),
        );

        Ok(Self {
            client,
            service_url,
            api_key,
        })
    }

    fn url(&self, path: &str) -> String {
        http::join(&self.service_url, path)
    }

    async fn custom_domain(&self) -> Result<Option<String>, ApiError> {
        let url = self.url("custom-domains");
        let request = self
            .client
            .get(&url)
            .bearer_auth(self.api_key.expose())
            .query(&[("verificationStatus", "verified")]);

        let response = http::send(request, &url).await?;
        let entries: Vec<CustomDomainEntry> =
            http::decode(response, &url, "custom domain list").await?;

        Ok(entries.into_iter().next().map(|e| e.custom_domain.name))
    }
}

#[async_trait]
impl DeployOps for RenderClient {
    async fn trigger_deploy(&self, clear_cache: bool) -> Result<DeployId, ApiError> {
        let url = self.url("deploys");
        let body = TriggerDeployRequest {
            clear_cache: ClearCache::from(clear_cache),
        };
        tracing::debug!(%url, ?body, "triggering deploy");

        let request = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .json(&body);

        let response = http::send(request, &url).await?;
        let deploy: DeployResponse = http::decode(response, &url, "deploy").await?;
        Ok(deploy.id)
    }

    async fn poll_status(&self, deploy: &DeployId) -> Result<DeployStatus, ApiError> {
        let url = self.url(&format!(
            "deploys/{}",
            urlencoding::encode(deploy.as_str())
        ));

        let request = self.client.get(&url).bearer_auth(self.api_key.expose());
        let response = http::send(request, &url).await?;
        let deploy: DeployStatusResponse = http::decode(response, &url, "deploy status").await?;

        tracing::debug!(%url, status = %deploy.status, "polled deploy");
        Ok(deploy.status)
    }

    async fn resolve_service_url(&self) -> Result<String, ApiError> {
        if let Some(domain) = self.custom_domain().await? {
            tracing::debug!(%domain, "using verified custom domain");
            return Ok(format!("https://{domain}"));
        }

        let url = self.service_url.clone();
        let request = self.client.get(&url).bearer_auth(self.api_key.expose());
        let response = http::send(request, &url).await?;
        let service: ServiceResponse = http::decode(response, &url, "service").await?;

        service
            .into_url()
            .ok_or(ApiError::MissingField { field: "url" })
    }
}
