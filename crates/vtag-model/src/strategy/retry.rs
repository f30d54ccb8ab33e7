use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

use super::BackoffStrategy;

/// How many times a failed operation is attempted and how long to wait in between.
///
/// The default (two attempts, no delay) reconnects and retries exactly once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryStrategy {
    /// Total attempts, including the first one. Must be at least 1.
    pub attempts: u32,
    pub backoff: BackoffStrategy,
}

impl RetryStrategy {
    /// Single attempt, failures surface immediately.
    pub fn never() -> Self {
        Self {
            attempts: 1,
            backoff: BackoffStrategy::immediate(),
        }
    }

    pub fn validate(&self) -> ModelResult<()> {
        if self.attempts == 0 {
            return Err(ModelError::InvalidConfig(
                "retry.attempts cannot be zero".into(),
            ));
        }
        self.backoff.validate()
    }
}

impl Default for RetryStrategy {
    fn default() -> Self {
        Self {
            attempts: 2,
            backoff: BackoffStrategy::immediate(),
        }
    }
}
