use std::time::Duration;

use duration_str::deserialize_duration;
use serde::Deserialize;

/// Default delay between retries of a failed run.
const DEFAULT_RETRY_DELAY: Duration = Duration::ZERO;

fn default_checkpoint() -> bool {
    true
}

/// Scheduler-facing task configuration.
///
/// Stored by every task and forwarded verbatim to the scheduler; the task
/// itself never acts on these fields. Retry policy in particular belongs to
/// the scheduler, not to [crate::task::Task::run].
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct TaskConfig {
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub max_retries: u32,

    #[serde(default)]
    pub retry_delay: RetryDelay,

    /// Whether the scheduler may persist the task result.
    #[serde(default = "default_checkpoint")]
    pub checkpoint: bool,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            max_retries: 0,
            retry_delay: RetryDelay::default(),
            checkpoint: true,
        }
    }
}

/// Type to represent the delay between retries. It adds a default
/// implementation to [std::time::Duration].
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RetryDelay(#[serde(deserialize_with = "deserialize_duration")] Duration);

impl Default for RetryDelay {
    fn default() -> Self {
        Self(DEFAULT_RETRY_DELAY)
    }
}

impl From<Duration> for RetryDelay {
    fn from(value: Duration) -> Self {
        Self(value)
    }
}

impl From<RetryDelay> for Duration {
    fn from(value: RetryDelay) -> Self {
        value.0
    }
}
