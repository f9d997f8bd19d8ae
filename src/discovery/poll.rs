// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Bounded fixed-interval polling

use crate::constants::discovery::{POLL_INTERVAL_SECS, POLL_TIMEOUT_SECS};
use crate::error::{Result, VwError};
use std::fmt;
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep_until, timeout_at, Instant};
use tracing::{debug, warn};

/// How a failed attempt affects the poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retry {
    /// Not ready yet, try again at the next tick
    Retryable,
    /// Give up and return this error
    Terminal,
}

/// Treats every error as transient. A permanent misconfiguration therefore
/// only surfaces once the full timeout has elapsed.
pub fn retry_everything(_: &VwError) -> Retry {
    Retry::Retryable
}

#[derive(Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub timeout: Duration,
    pub classify: fn(&VwError) -> Retry,
}

impl fmt::Debug for PollPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PollPolicy")
            .field("interval", &self.interval)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(POLL_INTERVAL_SECS),
            timeout: Duration::from_secs(POLL_TIMEOUT_SECS),
            classify: retry_everything,
        }
    }
}

/// Run `attempt` immediately and then once per interval until it succeeds,
/// fails terminally or the timeout elapses. No attempt starts at or after
/// the deadline, and an attempt still running at the deadline is dropped.
/// An attempt that overruns the interval is followed by the next one at once,
/// and the schedule continues one interval apart from there.
pub async fn poll_immediate<T, F, Fut>(policy: &PollPolicy, what: &str, mut attempt: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let deadline = Instant::now() + policy.timeout;
    let mut next = Instant::now();
    let mut last_error = "no attempt completed".to_string();

    loop {
        match timeout_at(deadline, attempt()).await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(e)) => {
                if (policy.classify)(&e) == Retry::Terminal {
                    debug!("Giving up on {}: {}", what, e);
                    return Err(e);
                }
                // Ticks missed by a slow attempt are skipped, not replayed
                next = (next + policy.interval).max(Instant::now());
                if next >= deadline {
                    warn!("Error looking up {}: {}", what, e);
                    last_error = e.to_string();
                    sleep_until(deadline).await;
                    break;
                }
                warn!(
                    "Error looking up {}: {}, retrying in {:?}",
                    what, e, policy.interval
                );
                last_error = e.to_string();
                sleep_until(next).await;
            }
            Err(_) => break,
        }
    }

    Err(VwError::EndpointDiscoveryTimeout {
        timeout: policy.timeout,
        last_error,
    })
}
