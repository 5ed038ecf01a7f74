// ABOUTME: In-memory stand-ins for the remote services and the sleep primitive.
// ABOUTME: Each fake records its calls so tests can assert on the exact sequence.

use async_trait::async_trait;
use parking_lot::Mutex;
use render_deploy::ops::{ApiError, DeployOps, DeploymentState, TrackerOps, Wait};
use render_deploy::output::Reporter;
use render_deploy::status::DeployStatus;
use render_deploy::transport::TransportFailure;
use render_deploy::types::{DeployId, DeploymentId};
use std::collections::VecDeque;
use std::time::Duration;

pub const DEPLOY_ID: &str = "dep-test123";
pub const DEPLOYMENT_ID: &str = "7";
pub const SERVICE_URL: &str = "https://my-app.onrender.com";

fn http_error(status: u16) -> ApiError {
    ApiError::from(TransportFailure::new(status, None))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployCall {
    Trigger { clear_cache: bool },
    Poll(String),
    ResolveUrl,
}

/// Scripted hosting service. Polls return the scripted statuses in order.
pub struct FakeDeploy {
    trigger_failure: Option<u16>,
    url_failure: Option<u16>,
    statuses: Mutex<VecDeque<Result<String, u16>>>,
    calls: Mutex<Vec<DeployCall>>,
}

impl FakeDeploy {
    pub fn new() -> Self {
        Self {
            trigger_failure: None,
            url_failure: None,
            statuses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_statuses<'a>(self, statuses: impl IntoIterator<Item = &'a str>) -> Self {
        self.statuses
            .lock()
            .extend(statuses.into_iter().map(|s| Ok(s.to_string())));
        self
    }

    pub fn then_poll_fails(self, status: u16) -> Self {
        self.statuses.lock().push_back(Err(status));
        self
    }

    pub fn failing_trigger(mut self, status: u16) -> Self {
        self.trigger_failure = Some(status);
        self
    }

    pub fn failing_url(mut self, status: u16) -> Self {
        self.url_failure = Some(status);
        self
    }

    pub fn calls(&self) -> Vec<DeployCall> {
        self.calls.lock().clone()
    }

    pub fn poll_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, DeployCall::Poll(_)))
            .count()
    }
}

#[async_trait]
impl DeployOps for FakeDeploy {
    async fn trigger_deploy(&self, clear_cache: bool) -> Result<DeployId, ApiError> {
        self.calls.lock().push(DeployCall::Trigger { clear_cache });
        match self.trigger_failure {
            Some(status) => Err(http_error(status)),
            None => Ok(DeployId::new(DEPLOY_ID.to_string())),
        }
    }

    async fn poll_status(&self, deploy: &DeployId) -> Result<DeployStatus, ApiError> {
        self.calls
            .lock()
            .push(DeployCall::Poll(deploy.as_str().to_string()));
        match self.statuses.lock().pop_front() {
            Some(Ok(status)) => Ok(DeployStatus::parse(&status)),
            Some(Err(status)) => Err(http_error(status)),
            None => panic!("polled more often than the test scripted"),
        }
    }

    async fn resolve_service_url(&self) -> Result<String, ApiError> {
        self.calls.lock().push(DeployCall::ResolveUrl);
        match self.url_failure {
            Some(status) => Err(http_error(status)),
            None => Ok(SERVICE_URL.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerCall {
    Create {
        git_ref: String,
        environment: Option<String>,
    },
    Update {
        deployment: String,
        state: DeploymentState,
        url: Option<String>,
    },
}

/// Deployment-record system that remembers every call.
pub struct FakeTracker {
    create_failure: Option<ApiErrorScript>,
    calls: Mutex<Vec<TrackerCall>>,
}

enum ApiErrorScript {
    Status(u16),
    Rejected(&'static str),
}

impl FakeTracker {
    pub fn new() -> Self {
        Self {
            create_failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_create(mut self, status: u16) -> Self {
        self.create_failure = Some(ApiErrorScript::Status(status));
        self
    }

    pub fn rejecting_create(mut self, message: &'static str) -> Self {
        self.create_failure = Some(ApiErrorScript::Rejected(message));
        self
    }

    pub fn calls(&self) -> Vec<TrackerCall> {
        self.calls.lock().clone()
    }

    /// Just the (state, url) pairs of the status updates, in order.
    pub fn updates(&self) -> Vec<(DeploymentState, Option<String>)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                TrackerCall::Update { state, url, .. } => Some((*state, url.clone())),
                TrackerCall::Create { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl TrackerOps for FakeTracker {
    async fn create(
        &self,
        git_ref: &str,
        environment: Option<&str>,
    ) -> Result<DeploymentId, ApiError> {
        self.calls.lock().push(TrackerCall::Create {
            git_ref: git_ref.to_string(),
            environment: environment.map(str::to_string),
        });
        match &self.create_failure {
            Some(ApiErrorScript::Status(status)) => Err(http_error(*status)),
            Some(ApiErrorScript::Rejected(message)) => Err(ApiError::Rejected {
                message: message.to_string(),
            }),
            None => Ok(DeploymentId::new(DEPLOYMENT_ID.to_string())),
        }
    }

    async fn update_status(
        &self,
        deployment: &DeploymentId,
        state: DeploymentState,
        url: Option<&str>,
    ) -> Result<(), ApiError> {
        self.calls.lock().push(TrackerCall::Update {
            deployment: deployment.as_str().to_string(),
            state,
            url: url.map(str::to_string),
        });
        Ok(())
    }
}

/// Returns immediately and remembers how long it was asked to wait.
#[derive(Default)]
pub struct InstantWait {
    waits: Mutex<Vec<Duration>>,
}

impl InstantWait {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().clone()
    }
}

#[async_trait]
impl Wait for InstantWait {
    async fn wait(&self, duration: Duration) {
        self.waits.lock().push(duration);
    }
}

/// Collects progress notices.
#[derive(Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn count(&self, message: &str) -> usize {
        self.messages.lock().iter().filter(|m| *m == message).count()
    }
}

impl Reporter for RecordingReporter {
    fn progress(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
