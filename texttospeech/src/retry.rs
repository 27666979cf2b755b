//! # Retry Policy
//!
//! This module wraps a single RPC attempt with the retry and timeout behaviour bound to a method.
//!
//! ## How it works
//!
//! 1. Every attempt is bounded by the effective timeout. An attempt that does not finish in time
//!    fails with `DEADLINE_EXCEEDED`, like any other remote failure.
//! 2. A failed attempt is retried only if its status code is one of the codes of the [`Retry`]
//!    policy and the budget (maximum attempts and overall deadline) allows another attempt.
//! 3. Between attempts the executor sleeps following an exponential backoff capped at
//!    [`Retry::max_delay`].
//!
//! Failures that are not retryable surface verbatim as [`CallError::Status`]. A retryable failure
//! that outlives the budget surfaces as [`CallError::RetryExhausted`].
use crate::client::CallError;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tonic::{Code, Status};

/// Exponential backoff retry policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Retry {
    codes: Vec<Code>,
    initial_delay: Duration,
    multiplier: f64,
    max_delay: Duration,
    deadline: Option<Duration>,
    max_attempts: Option<u32>,
}

impl Default for Retry {
    /// Retries `DEADLINE_EXCEEDED` and `UNAVAILABLE` for up to ten minutes.
    fn default() -> Self {
        Self::new([Code::DeadlineExceeded, Code::Unavailable])
    }
}

impl Retry {
    /// Creates a policy that retries the given status codes with the default backoff
    /// (100ms initial delay, 1.3 multiplier, 60s cap, 600s deadline).
    pub fn new(codes: impl IntoIterator<Item = Code>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
            initial_delay: Duration::from_millis(100),
            multiplier: 1.3,
            max_delay: Duration::from_secs(60),
            deadline: Some(Duration::from_secs(600)),
            max_attempts: None,
        }
    }

    #[must_use]
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    #[must_use]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Overall time budget across every attempt. `None` removes the limit.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Maximum number of attempts, the first one included. `None` removes the limit.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: Option<u32>) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    pub fn is_retryable(&self, status: &Status) -> bool {
        self.codes.contains(&status.code())
    }

    /// Infinite sequence of sleep durations between attempts.
    pub fn backoff(&self) -> Backoff {
        Backoff {
            next: self.initial_delay,
            multiplier: self.multiplier,
            max: self.max_delay,
        }
    }
}

/// Iterator over the exponential backoff delays of a [`Retry`] policy.
#[derive(Debug, Clone)]
pub struct Backoff {
    next: Duration,
    multiplier: f64,
    max: Duration,
}

impl Iterator for Backoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.min(self.max);
        self.next = Duration::try_from_secs_f64(self.next.as_secs_f64() * self.multiplier)
            .map_or(self.max, |next| next.min(self.max));
        Some(current)
    }
}

/// Runs `attempt` until it succeeds, fails with a non-retryable status or the retry budget runs out.
///
/// `retry: None` performs exactly one attempt and returns its status on failure.
pub(crate) async fn execute<T, F, Fut>(
    method: &'static str,
    retry: Option<&Retry>,
    timeout: Option<Duration>,
    mut attempt: F,
) -> Result<T, CallError>
where
    F: FnMut() -> Result<Fut, CallError>,
    Fut: Future<Output = Result<T, Status>>,
{
    let started = Instant::now();
    let mut backoff = retry.map(Retry::backoff);
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;

        let status = match run_attempt(attempt()?, timeout).await {
            Ok(value) => return Ok(value),
            Err(status) => status,
        };

        let (Some(policy), Some(delays)) = (retry, backoff.as_mut()) else {
            return Err(CallError::Status(status));
        };

        if !policy.is_retryable(&status) {
            return Err(CallError::Status(status));
        }

        let delay = delays.next().unwrap_or(policy.max_delay);

        let attempts_left = policy.max_attempts.is_none_or(|max| attempts < max);
        let time_left = policy
            .deadline
            .is_none_or(|deadline| started.elapsed() + delay < deadline);

        if !attempts_left || !time_left {
            return Err(CallError::RetryExhausted {
                attempts,
                last: status,
            });
        }

        tracing::debug!(
            method,
            attempt = attempts,
            code = ?status.code(),
            delay_ms = delay.as_millis() as u64,
            "Retrying after retryable error"
        );

        tokio::time::sleep(delay).await;
    }
}

async fn run_attempt<T>(
    fut: impl Future<Output = Result<T, Status>>,
    timeout: Option<Duration>,
) -> Result<T, Status> {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, fut).await.unwrap_or_else(|_| {
            Err(Status::deadline_exceeded(format!(
                "Deadline of {:.1}s exceeded",
                limit.as_secs_f64()
            )))
        }),
        None => fut.await,
    }
}
