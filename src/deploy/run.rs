// ABOUTME: Generic run struct parameterized by state marker.
// ABOUTME: Holds the per-run options; states hold the remote ids.

use std::time::Duration;

use super::state::{InProgress, Initialized, Record, Tracked, Triggered};
use crate::types::DeployId;

/// How often to poll and when to give up.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub timeout: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            timeout: None,
        }
    }
}

/// One deploy run, parameterized by its current state.
///
/// Transitions consume the run, so steps cannot be repeated or skipped.
/// Polling an untriggered run does not compile:
///
/// ```compile_fail
/// use render_deploy::deploy::{PollPolicy, Run};
/// use render_deploy::ops::{DeployOps, Wait};
/// use render_deploy::output::Reporter;
///
/// async fn poll_first<D: DeployOps, W: Wait, R: Reporter>(ops: &D, wait: &W, out: &R) {
///     let run = Run::new(false, PollPolicy::default());
///     run.poll_until_terminal(ops, wait, out).await;
/// }
/// ```
///
/// Nor can a record be marked live before it exists:
///
/// ```compile_fail
/// use render_deploy::deploy::{PollPolicy, Run, Triggered};
/// use render_deploy::ops::TrackerOps;
///
/// async fn skip_create<T: TrackerOps>(run: render_deploy::deploy::Run<Triggered>, tracker: &T) {
///     run.mark_live(tracker).await;
/// }
/// ```
#[derive(Debug)]
pub struct Run<S> {
    pub(crate) clear_cache: bool,
    pub(crate) policy: PollPolicy,
    pub(crate) state: S,
}

impl Run<Initialized> {
    pub fn new(clear_cache: bool, policy: PollPolicy) -> Self {
        Run {
            clear_cache,
            policy,
            state: Initialized,
        }
    }
}

impl<S> Run<S> {
    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    pub(crate) fn with_state<T>(self, state: T) -> Run<T> {
        Run {
            clear_cache: self.clear_cache,
            policy: self.policy,
            state,
        }
    }
}

impl Run<Triggered> {
    pub fn deploy_id(&self) -> &DeployId {
        &self.state.deploy
    }
}

impl Run<Tracked> {
    pub fn deploy_id(&self) -> &DeployId {
        &self.state.deploy
    }

    pub fn record(&self) -> &Record {
        &self.state.record
    }
}

impl Run<InProgress> {
    pub fn deploy_id(&self) -> &DeployId {
        &self.state.deploy
    }

    pub fn record(&self) -> &Record {
        &self.state.record
    }
}
