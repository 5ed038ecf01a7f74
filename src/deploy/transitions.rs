// ABOUTME: State transition methods for a deploy run.
// ABOUTME: Each method consumes self and returns the next state on success.

use super::error::{DeployError, Step};
use super::run::Run;
use super::state::{InProgress, Initialized, Record, Tracked, Triggered};
use crate::ops::{DeployOps, DeploymentState, TrackerOps, Wait};
use crate::output::Reporter;
use crate::status::{DeployStatus, Outcome};
use crate::types::DeployId;

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The deploy was started; nobody waited for it.
    Triggered,
    /// The deploy was observed live.
    Live,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Report {
    pub deploy_id: DeployId,
    pub completion: Completion,
    pub service_url: Option<String>,
}

impl Report {
    pub fn message(&self) -> &'static str {
        match self.completion {
            Completion::Triggered => "Deploy triggered.",
            Completion::Live => "The service has been deployed.",
        }
    }
}

/// How the polling loop ended.
enum Terminal {
    Live,
    Failed(DeployStatus),
    TimedOut,
}

// =============================================================================
// Initialized -> Triggered
// =============================================================================

impl Run<Initialized> {
    /// Ask the hosting service for a new deploy.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::Api` if the service rejects the request.
    #[must_use = "run state must be used"]
    pub async fn trigger<D: DeployOps>(self, ops: &D) -> Result<Run<Triggered>, DeployError> {
        let deploy = ops
            .trigger_deploy(self.clear_cache)
            .await
            .map_err(DeployError::api(Step::TriggerDeploy))?;

        tracing::info!(deploy = %deploy, "deploy triggered");
        Ok(self.with_state(Triggered { deploy }))
    }
}

// =============================================================================
// Triggered -> Tracked | Report
// =============================================================================

impl Run<Triggered> {
    /// Create the deployment record and resolve the URL it will point at.
    ///
    /// # Errors
    ///
    /// Fails if the record cannot be created or the URL cannot be resolved.
    #[must_use = "run state must be used"]
    pub async fn track<D: DeployOps, T: TrackerOps>(
        self,
        ops: &D,
        tracker: &T,
        git_ref: &str,
        environment: Option<&str>,
    ) -> Result<Run<Tracked>, DeployError> {
        let id = tracker
            .create(git_ref, environment)
            .await
            .map_err(DeployError::api(Step::CreateDeployment))?;
        tracing::debug!(deployment = %id, "created deployment record");

        let service_url = ops
            .resolve_service_url()
            .await
            .map_err(DeployError::api(Step::ResolveServiceUrl))?;
        tracing::debug!(%service_url, "resolved service url");

        let deploy = self.state.deploy.clone();
        Ok(self.with_state(Tracked {
            deploy,
            record: Record { id, service_url },
        }))
    }

    /// Poll until the deploy is live, fails, or polling times out.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::Failed` for a failure status, `TimedOut` past the
    /// timeout, and `Api` if a poll fails.
    pub async fn poll_until_terminal<D: DeployOps, W: Wait, R: Reporter>(
        self,
        ops: &D,
        wait: &W,
        reporter: &R,
    ) -> Result<Report, DeployError> {
        let deploy = self.state.deploy;
        match poll(ops, wait, reporter, &deploy, &self.policy).await? {
            Terminal::Live => Ok(Report {
                deploy_id: deploy,
                completion: Completion::Live,
                service_url: None,
            }),
            Terminal::Failed(status) => Err(DeployError::Failed(status)),
            Terminal::TimedOut => Err(timed_out(&self.policy)),
        }
    }

    /// End the run without waiting for the deploy.
    pub fn finish(self) -> Report {
        Report {
            deploy_id: self.state.deploy,
            completion: Completion::Triggered,
            service_url: None,
        }
    }
}

// =============================================================================
// Tracked -> InProgress | Report
// =============================================================================

impl Run<Tracked> {
    /// Show the record as in progress while the deploy is watched. No URL yet.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::Api` if the status update fails.
    #[must_use = "run state must be used"]
    pub async fn mark_in_progress<T: TrackerOps>(
        self,
        tracker: &T,
    ) -> Result<Run<InProgress>, DeployError> {
        update(tracker, &self.state.record, DeploymentState::InProgress, None).await?;

        let Run {
            clear_cache,
            policy,
            state: Tracked { deploy, record },
        } = self;
        Ok(Run {
            clear_cache,
            policy,
            state: InProgress { deploy, record },
        })
    }

    /// Show the record as successful right away, for runs that do not wait.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::Api` if the status update fails.
    pub async fn mark_live<T: TrackerOps>(self, tracker: &T) -> Result<Report, DeployError> {
        let Tracked { deploy, record } = self.state;
        update(
            tracker,
            &record,
            DeploymentState::Success,
            Some(&record.service_url),
        )
        .await?;

        Ok(Report {
            deploy_id: deploy,
            completion: Completion::Triggered,
            service_url: Some(record.service_url),
        })
    }
}

// =============================================================================
// InProgress -> Report
// =============================================================================

impl Run<InProgress> {
    /// Poll until terminal, then move the record to `success` or `failure`.
    ///
    /// Remote failures while polling abort without touching the record.
    ///
    /// # Errors
    ///
    /// Same as `Run<Triggered>::poll_until_terminal`, plus record update failures.
    pub async fn poll_until_terminal<D: DeployOps, T: TrackerOps, W: Wait, R: Reporter>(
        self,
        ops: &D,
        tracker: &T,
        wait: &W,
        reporter: &R,
    ) -> Result<Report, DeployError> {
        let InProgress { deploy, record } = self.state;

        match poll(ops, wait, reporter, &deploy, &self.policy).await? {
            Terminal::Live => {
                update(
                    tracker,
                    &record,
                    DeploymentState::Success,
                    Some(&record.service_url),
                )
                .await?;
                Ok(Report {
                    deploy_id: deploy,
                    completion: Completion::Live,
                    service_url: Some(record.service_url),
                })
            }
            Terminal::Failed(status) => {
                update(tracker, &record, DeploymentState::Failure, None).await?;
                Err(DeployError::Failed(status))
            }
            Terminal::TimedOut => {
                update(tracker, &record, DeploymentState::Failure, None).await?;
                Err(timed_out(&self.policy))
            }
        }
    }
}

// =============================================================================
// Internal Helpers
// =============================================================================

async fn update<T: TrackerOps>(
    tracker: &T,
    record: &Record,
    state: DeploymentState,
    url: Option<&str>,
) -> Result<(), DeployError> {
    tracing::debug!(deployment = %record.id, %state, url = url.unwrap_or("-"), "set deployment state");
    tracker
        .update_status(&record.id, state, url)
        .await
        .map_err(DeployError::api(Step::UpdateDeployment))
}

fn timed_out(policy: &super::PollPolicy) -> DeployError {
    DeployError::TimedOut(policy.timeout.unwrap_or_default())
}

/// Wait, poll, classify; repeat until terminal.
async fn poll<D: DeployOps, W: Wait, R: Reporter>(
    ops: &D,
    wait: &W,
    reporter: &R,
    deploy: &DeployId,
    policy: &super::PollPolicy,
) -> Result<Terminal, DeployError> {
    reporter.progress("Waiting for deploy successful status.");

    // None until the first poll, so the first status is always reported.
    let mut last_seen: Option<DeployStatus> = None;
    let mut waited = std::time::Duration::ZERO;

    loop {
        wait.wait(policy.interval).await;
        waited += policy.interval;

        let status = ops
            .poll_status(deploy)
            .await
            .map_err(DeployError::api(Step::PollStatus))?;

        match status.classify() {
            Outcome::Success => return Ok(Terminal::Live),
            Outcome::Failure => return Ok(Terminal::Failed(status)),
            Outcome::Pending => {
                if last_seen.as_ref() != Some(&status) {
                    if !status.is_recognized() {
                        tracing::warn!(%status, "unrecognized deploy status, still waiting");
                    }
                    reporter.progress(&format!("Deploy status: {status}."));
                    last_seen = Some(status);
                }
            }
        }

        if policy.timeout.is_some_and(|limit| waited >= limit) {
            return Ok(Terminal::TimedOut);
        }
    }
}
