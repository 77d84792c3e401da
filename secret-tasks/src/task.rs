use std::error::Error;

use crate::task::config::TaskConfig;

pub mod config;

/// A unit of work invoked by an external workflow scheduler.
///
/// `Input` carries per-invocation overrides; its [Default] value is what a
/// scheduler passes when the caller supplied none. Implementations must not
/// mutate their own state in [Task::run], so a single instance can be run
/// from several workers at once.
pub trait Task {
    type Input: Default;
    type Output;
    type Error: Error;

    /// Scheduler-facing configuration. Opaque to the task itself.
    fn config(&self) -> &TaskConfig;

    fn run(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
