//! Bounded retry with exponential backoff for transient HTTP failures.
//!
//! Only timeouts, connection failures, HTTP 429 and 5xx are retried. When retries run out the last
//! outcome is returned as-is, so callers report the same error kind they would without retrying.

use reqwest::{RequestBuilder, Response, StatusCode};
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; 0 disables retrying.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Upper bound for any single delay.
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(300),
            max_delay: Duration::from_secs(3),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Delay before retry number `retry` (1-based): `base * multiplier^(retry-1)`, capped at `max_delay`.
    pub fn delay_for(&self, retry: u32) -> Duration {
        if retry == 0 {
            return Duration::ZERO;
        }
        let factor = self.backoff_multiplier.powi(retry.saturating_sub(1) as i32);
        let millis = (self.base_delay.as_millis() as f64 * factor)
            .min(self.max_delay.as_millis() as f64);
        Duration::from_millis(millis as u64)
    }
}

pub(crate) fn is_transient_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

pub(crate) fn is_transient_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

/// Sends the request built by `make_request`, retrying transient failures per `policy`.
pub async fn send_with_retry<F>(
    policy: &RetryPolicy,
    target: &str,
    mut make_request: F,
) -> Result<Response, reqwest::Error>
where
    F: FnMut() -> RequestBuilder,
{
    let mut retry = 0;
    loop {
        let outcome = make_request().send().await;
        let transient = match &outcome {
            Ok(response) => is_transient_status(response.status()),
            Err(e) => is_transient_error(e),
        };
        if !transient || retry >= policy.max_retries {
            return outcome;
        }

        retry += 1;
        let delay = policy.delay_for(retry);
        match &outcome {
            Ok(response) => warn!(
                url = %target,
                status = response.status().as_u16(),
                retry = retry,
                delay_ms = delay.as_millis() as u64,
                "Transient HTTP status, retrying"
            ),
            Err(e) => warn!(
                url = %target,
                error = %e,
                retry = retry,
                delay_ms = delay.as_millis() as u64,
                "Transient request failure, retrying"
            ),
        }
        tokio::time::sleep(delay).await;
    }
}
