//! Retry runtime for [`vtag_model::RetryStrategy`].
//!
//! [`RetryPolicy::run`] drives a fallible async operation; what happens between attempts
//! (such as refreshing a session) is up to the operation, which receives the attempt number.
mod jitter;

use std::{future::Future, time::Duration};

use tracing::warn;
use vtag_model::{BackoffStrategy, RetryStrategy};

use crate::error::ApiResult;

#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    attempts: u32,
    backoff: BackoffStrategy,
}

impl RetryPolicy {
    /// Run once, never retry.
    pub fn none() -> Self {
        Self::from(&RetryStrategy::never())
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Un-jittered delay before retry `retry` (1-based), capped at `max_ms`.
    pub fn base_delay(&self, retry: u32) -> Duration {
        let b = &self.backoff;
        let exp = retry.saturating_sub(1).min(i32::MAX as u32) as i32;
        let ms = (b.first_ms as f64) * b.factor.powi(exp);
        let capped = if ms.is_finite() { ms.min(b.max_ms as f64) } else { b.max_ms as f64 };
        Duration::from_millis(capped.max(0.0) as u64)
    }

    /// Delay actually slept before retry `retry`, given the previous one.
    fn delay(&self, retry: u32, prev: Duration) -> Duration {
        let base = self.base_delay(retry);
        let prev = if prev.is_zero() {
            Duration::from_millis(self.backoff.first_ms)
        } else {
            prev
        };
        jitter::apply(self.backoff.jitter, base, prev, &self.backoff, &mut rand::thread_rng())
    }

    /// Call `op(attempt)` until it succeeds or the attempts are used up.
    ///
    /// `attempt` starts at 0. The error of the last attempt is returned.
    pub async fn run<T, F, Fut>(&self, name: &str, mut op: F) -> ApiResult<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let mut attempt = 0;
        let mut prev = Duration::ZERO;
        loop {
            match op(attempt).await {
                Ok(out) => return Ok(out),
                Err(e) if attempt + 1 >= self.attempts => return Err(e),
                Err(e) => {
                    attempt += 1;
                    let delay = self.delay(attempt, prev);
                    prev = delay;
                    warn!(
                        operation = name,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "operation failed, retrying"
                    );
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }
    }
}

impl From<&RetryStrategy> for RetryPolicy {
    fn from(s: &RetryStrategy) -> Self {
        Self {
            attempts: s.attempts.max(1),
            backoff: s.backoff.clone(),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryStrategy::default())
    }
}
