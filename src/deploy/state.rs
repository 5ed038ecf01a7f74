// ABOUTME: Run state marker types for the type state pattern.
// ABOUTME: States carry the remote ids that exist once they are reached.

use crate::types::{DeployId, DeploymentId};

/// Nothing has been sent yet.
/// Available actions: `trigger()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Initialized;

/// The hosting service accepted a new deploy.
/// Available actions: `track()`, `poll_until_terminal()`, `finish()`
#[derive(Debug, Clone)]
pub struct Triggered {
    pub(crate) deploy: DeployId,
}

/// A deployment record exists and the service URL is known.
/// Available actions: `mark_in_progress()`, `mark_live()`
#[derive(Debug, Clone)]
pub struct Tracked {
    pub(crate) deploy: DeployId,
    pub(crate) record: Record,
}

/// The deployment record shows the deploy as in progress.
/// Available actions: `poll_until_terminal()`
#[derive(Debug, Clone)]
pub struct InProgress {
    pub(crate) deploy: DeployId,
    pub(crate) record: Record,
}

/// The external deployment record mirroring this run.
#[derive(Debug, Clone)]
pub struct Record {
    pub id: DeploymentId,
    pub service_url: String,
}
