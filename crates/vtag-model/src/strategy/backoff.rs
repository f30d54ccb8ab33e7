use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Exponential delay between retry attempts.
///
/// The delay before retry `n` (starting at 1) is `min(max_ms, first_ms * factor^(n-1))`,
/// after which `jitter` is applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackoffStrategy {
    pub jitter: super::JitterStrategy,
    pub first_ms: u64,
    pub max_ms: u64,
    pub factor: f64,
}

impl BackoffStrategy {
    /// No delay at all between attempts.
    pub const fn immediate() -> Self {
        Self {
            jitter: super::JitterStrategy::None,
            first_ms: 0,
            max_ms: 0,
            factor: 1.0,
        }
    }

    pub fn validate(&self) -> ModelResult<()> {
        if !self.factor.is_finite() || self.factor < 1.0 {
            return Err(ModelError::InvalidConfig(format!(
                "backoff.factor must be a finite value >= 1.0, got {}",
                self.factor
            )));
        }
        if self.max_ms < self.first_ms {
            return Err(ModelError::InvalidConfig(format!(
                "backoff.max_ms ({}) is lower than backoff.first_ms ({})",
                self.max_ms, self.first_ms
            )));
        }
        // Decorrelated sampling grows from `first_ms`; zero pins every delay at zero.
        if self.jitter == super::JitterStrategy::Decorrelated && self.first_ms == 0 && self.max_ms > 0 {
            return Err(ModelError::InvalidConfig(
                "backoff.first_ms must be > 0 with decorrelated jitter".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BackoffStrategy {
    fn default() -> Self {
        Self::immediate()
    }
}
