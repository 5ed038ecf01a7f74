// ABOUTME: Deploy orchestration using the type state pattern.
// ABOUTME: Exports state markers, Run, the transitions' results and the driver.

mod error;
mod orchestrate;
mod run;
mod state;
mod transitions;

pub use error::{DeployError, Step};
pub use orchestrate::{RunOptions, Tracking, orchestrate};
pub use run::{PollPolicy, Run};
pub use state::{InProgress, Initialized, Record, Tracked, Triggered};
pub use transitions::{Completion, Report};
