//! Bounded fixed-delay retry for connection establishment.
//!
//! A database container that is still starting up refuses connections
//! for a short window; the policy here masks that window by retrying
//! sequentially with a fixed wait. Attempts are never classified: bad
//! credentials retry exactly like "connection refused".

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

use crate::{AppError, Result};

/// Fixed-interval bounded retry policy.
///
/// `max_attempts` counts total attempts. The delay is slept only
/// between attempts, never after the final failure; no jitter, no
/// exponential growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total connection attempts before giving up.
    pub max_attempts: u32,
    /// Fixed wait between consecutive attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Create a policy with the given attempt bound and delay.
    #[must_use]
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

impl Default for RetryPolicy {
    /// Observed deployment default: five attempts, five seconds apart.
    fn default() -> Self {
        Self::new(5, Duration::from_secs(5))
    }
}

/// Attempt `connect` until it succeeds or the policy is exhausted,
/// sleeping with `tokio::time::sleep` between attempts.
///
/// The first success wins; no further attempts are made. The sleep
/// blocks the calling task for the full delay — acceptable on the
/// startup path, a latency cliff on a request path (see the module
/// docs on [`crate::display::DbMessageSource`]).
///
/// # Errors
///
/// Returns [`AppError::ConnectionExhausted`] carrying the last
/// underlying error once every attempt has failed.
pub async fn acquire<C, F, S, E>(policy: RetryPolicy, connect: C) -> Result<S>
where
    C: FnMut() -> F,
    F: Future<Output = std::result::Result<S, E>>,
    E: Display,
{
    acquire_with_sleep(policy, connect, tokio::time::sleep).await
}

/// Same as [`acquire`] but with an injectable sleep, so the policy is
/// testable without a runtime clock.
///
/// A policy with `max_attempts == 0` still makes one attempt.
///
/// # Errors
///
/// Returns [`AppError::ConnectionExhausted`] carrying the last
/// underlying error once every attempt has failed.
pub async fn acquire_with_sleep<C, F, S, E, Sl, SlF>(
    policy: RetryPolicy,
    mut connect: C,
    mut sleep: Sl,
) -> Result<S>
where
    C: FnMut() -> F,
    F: Future<Output = std::result::Result<S, E>>,
    E: Display,
    Sl: FnMut(Duration) -> SlF,
    SlF: Future<Output = ()>,
{
    let attempts = policy.max_attempts.max(1);
    let mut last = String::new();

    for attempt in 1..=attempts {
        match connect().await {
            Ok(session) => {
                info!(attempt, "database connection established");
                return Ok(session);
            }
            Err(err) => {
                let remaining = attempts - attempt;
                warn!(attempt, remaining, error = %err, "database connection failed");
                last = err.to_string();
                if remaining > 0 {
                    sleep(policy.delay).await;
                }
            }
        }
    }

    Err(AppError::ConnectionExhausted { attempts, last })
}
