// ABOUTME: End-to-end driver for one deploy run.
// ABOUTME: Picks the transitions to take from the wait and tracking options.

use super::error::DeployError;
use super::run::{PollPolicy, Run};
use super::transitions::Report;
use crate::ops::{DeployOps, TrackerOps, Wait};
use crate::output::Reporter;

/// Per-run choices made by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub clear_cache: bool,
    pub wait_deploy: bool,
    pub policy: PollPolicy,
}

/// Where and for what to create a deployment record.
#[derive(Debug)]
pub struct Tracking<'a, T> {
    pub tracker: &'a T,
    pub git_ref: &'a str,
    pub environment: Option<&'a str>,
}

/// Trigger a deploy, optionally track it, optionally wait for it.
///
/// # Errors
///
/// The first failing step ends the run; nothing is retried.
pub async fn orchestrate<D, T, W, R>(
    ops: &D,
    tracking: Option<Tracking<'_, T>>,
    wait: &W,
    reporter: &R,
    options: RunOptions,
) -> Result<Report, DeployError>
where
    D: DeployOps,
    T: TrackerOps,
    W: Wait,
    R: Reporter,
{
    let run = Run::new(options.clear_cache, options.policy)
        .trigger(ops)
        .await?;

    match tracking {
        None if options.wait_deploy => run.poll_until_terminal(ops, wait, reporter).await,
        None => Ok(run.finish()),
        Some(t) => {
            let run = run.track(ops, t.tracker, t.git_ref, t.environment).await?;
            if options.wait_deploy {
                run.mark_in_progress(t.tracker)
                    .await?
                    .poll_until_terminal(ops, t.tracker, wait, reporter)
                    .await
            } else {
                run.mark_live(t.tracker).await
            }
        }
    }
}
