// ABOUTME: GitHub deployments API client implementing TrackerOps.
// ABOUTME: Creates a deployment for a ref and posts status updates to it.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};

use super::types::{CreateDeploymentRequest, CreateDeploymentResponse, CreateStatusRequest};
use crate::config::Secret;
use crate::http::{self, build_client};
use crate::ops::{ApiError, DeploymentState, TrackerOps};
use crate::types::{DeploymentId, Repository};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

/// Client for the deployments of one repository.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    repo_url: String,
    token: Secret,
}

impl GitHubClient {
    pub fn new(api_url: &str, repository: &Repository, token: Secret) -> Result<Self, ApiError> {
        let client = build_client(api_url)?;
        let repo_url = http::join(
            api_url,
            &format!(
                "repos/{}/{}",
                urlencoding::encode(repository.owner()),
                urlencoding::encode(repository.name())
            ),
        );

        Ok(Self {
            client,
            repo_url,
            token,
        })
    }

    fn post(&self, url: &str) -> RequestBuilder {
        self.client
            .post(url)
            .bearer_auth(self.token.expose())
            .header(reqwest::header::ACCEPT, ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
    }
}

#[async_trait]
impl TrackerOps for GitHubClient {
    async fn create(
        &self,
        git_ref: &str,
        environment: Option<&str>,
    ) -> Result<DeploymentId, ApiError> {
        let url = http::join(&self.repo_url, "deployments");
        let body = CreateDeploymentRequest {
            git_ref,
            environment,
            production_environment: true,
        };
        tracing::debug!(%url, ?body, "creating deployment");

        let response = http::send(self.post(&url).json(&body), &url).await?;
        let status = response.status();
        let created: CreateDeploymentResponse =
            http::decode(response, &url, "deployment").await?;

        match (status, created.id) {
            (StatusCode::CREATED, Some(id)) => Ok(DeploymentId::new(id.to_string())),
            (StatusCode::CREATED, None) => Err(ApiError::MissingField { field: "id" }),
            _ => Err(ApiError::Rejected {
                message: format!(
                    "github api error: {}",
                    created.message.as_deref().unwrap_or("deployment was not created")
                ),
            }),
        }
    }

    async fn update_status(
        &self,
        deployment: &DeploymentId,
        state: DeploymentState,
        url: Option<&str>,
    ) -> Result<(), ApiError> {
        let endpoint = http::join(
            &self.repo_url,
            &format!(
                "deployments/{}/statuses",
                urlencoding::encode(deployment.as_str())
            ),
        );
        let body = CreateStatusRequest {
            state,
            environment_url: url,
            log_url: url,
        };
        tracing::debug!(url = %endpoint, ?body, "updating deployment status");

        http::send(self.post(&endpoint).json(&body), &endpoint).await?;
        Ok(())
    }
}
