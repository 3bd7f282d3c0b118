use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay before the first retry; doubled for every later one.
    pub base_delay: Duration,
    /// Total number of remote calls allowed while rate limited.
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_millis(1000),
            max_attempts: 5,
        }
    }
}

impl RetryPolicy {
    /// `base_delay * 2^attempt`, attempt being 0-indexed.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    pub(crate) fn attempt_limit(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// One scheduled wait after a rate-limited response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Backoff {
    /// Retries made so far for the current request, including this one.
    pub attempt: u32,
    pub delay: Duration,
}
