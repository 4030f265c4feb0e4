//! Retry and backoff policy
//!
//! Retry is a cross-cutting concern wrapped around the raw network call,
//! parameterized independently of what is being retried.

use std::time::Duration;

/// Statuses that signal a transient condition worth retrying.
/// Everything else at or above 400 is terminal.
const RETRIABLE_STATUSES: [u16; 9] = [404, 408, 409, 425, 429, 500, 502, 503, 504];

pub fn is_retriable_status(status: u16) -> bool {
    RETRIABLE_STATUSES.contains(&status)
}

/// Exponential backoff schedule for participant calls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Additional attempts after the first, on transient failure
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub multiplier: f64,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(500),
            multiplier: 2.0,
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Sleep before the given retry (0-indexed). The first request is
    /// never delayed; sleeps only occur between attempts.
    pub fn delay_for(&self, retry_index: u32) -> Duration {
        let factor = self.multiplier.powi(retry_index as i32);
        self.initial_delay.mul_f64(factor).min(self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retriable_statuses() {
        for status in [404, 408, 409, 425, 429, 500, 502, 503, 504] {
            assert!(is_retriable_status(status), "{status} should be retriable");
        }
        for status in [400, 401, 403, 410, 418, 422, 501] {
            assert!(!is_retriable_status(status), "{status} should be terminal");
        }
    }

    #[test]
    fn test_default_backoff_doubles_up_to_cap() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(0), Duration::from_millis(500));
        assert_eq!(policy.delay_for(1), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(2), Duration::from_millis(2000));
        // Capped from here on.
        assert_eq!(policy.delay_for(3), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(8), Duration::from_millis(2000));
    }

    #[test]
    fn test_custom_policy_schedule() {
        let policy = RetryPolicy {
            max_retries: 4,
            initial_delay: Duration::from_millis(10),
            multiplier: 3.0,
            max_delay: Duration::from_millis(50),
        };
        assert_eq!(policy.delay_for(0), Duration::from_millis(10));
        assert_eq!(policy.delay_for(1), Duration::from_millis(30));
        assert_eq!(policy.delay_for(2), Duration::from_millis(50));
    }
}
