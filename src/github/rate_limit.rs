//! Rate limit snapshot attached to quota failures.
//!
//! When GitHub refuses a call because the quota is spent, the gateway fetches
//! `/rate_limit` so the failure can say when the next scheduled run is worth
//! attempting.

use std::time::{SystemTime, UNIX_EPOCH};

/// Remaining core API quota and the moment it refills.
///
/// # Example
///
/// ```
/// use greeter::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(0, 1_700_000_000);
/// assert_eq!(info.remaining(), 0);
/// assert_eq!(info.reset_at(), 1_700_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    remaining: u32,
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates a snapshot from the remaining count and reset timestamp.
    #[must_use]
    pub const fn new(remaining: u32, reset_at: u64) -> Self {
        Self {
            remaining,
            reset_at,
        }
    }

    /// Requests left in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Unix timestamp at which the window resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }

    /// Seconds until the window resets, or 0 when it already has.
    #[must_use]
    pub fn seconds_until_reset(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |duration| duration.as_secs());

        self.reset_at.saturating_sub(now)
    }
}

#[cfg(test)]
mod tests {
    use super::RateLimitInfo;

    #[test]
    fn past_reset_reports_zero_seconds() {
        let info = RateLimitInfo::new(0, 0);
        assert_eq!(info.seconds_until_reset(), 0);
    }
}
