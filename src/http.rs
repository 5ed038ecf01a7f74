// ABOUTME: Shared reqwest plumbing for the Render and GitHub clients.
// ABOUTME: Turns non-2xx responses into TransportFailure and decodes JSON bodies.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use std::time::Duration;

use crate::ops::{ApiError, DecodeSnafu, RequestSnafu};
use crate::transport::TransportFailure;

pub(crate) const USER_AGENT: &str = concat!("render-deploy/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn build_client(base_url: &str) -> Result<Client, ApiError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context(RequestSnafu { url: base_url })
}

/// Send a request and keep the response only if it is 2xx.
pub(crate) async fn send(request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
    let response = request.send().await.context(RequestSnafu { url })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.ok();
    tracing::debug!(%url, status = status.as_u16(), body = ?body, "error response");
    Err(TransportFailure::new(status.as_u16(), body).into())
}

/// Read a JSON body into `T`.
pub(crate) async fn decode<T: DeserializeOwned>(
    response: Response,
    url: &str,
    what: &'static str,
) -> Result<T, ApiError> {
    let text = response.text().await.context(RequestSnafu { url })?;
    serde_json::from_str(&text).context(DecodeSnafu { what })
}

/// Join a base URL and a path without doubling the slash.
pub(crate) fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
