//! Executor pacing from TOML (`[executor]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutorConfig {
    /// Attempts of a verified choice
    pub retry_max: u32,
    /// Pause after every remote action, in milliseconds
    pub action_wait_ms: u64,
    /// Pause before checking that a choice took effect, in milliseconds
    pub verify_wait_ms: u64,
}

impl Default for FileExecutorConfig {
    fn default() -> Self {
        Self {
            retry_max: 5,
            action_wait_ms: 1000,
            verify_wait_ms: 2000,
        }
    }
}

impl FileExecutorConfig {
    pub fn action_wait(&self) -> Duration {
        Duration::from_millis(self.action_wait_ms)
    }

    pub fn verify_wait(&self) -> Duration {
        Duration::from_millis(self.verify_wait_ms)
    }
}
