//! Clock abstraction port for time operations
//!
//! Helpers that need "now" take this port rather than calling `Utc::now()`
//! directly, so tests can pin the current instant.

use chrono::{DateTime, Utc};

/// Wall-clock time source.
///
/// # Example
///
/// ```ignore
/// pub struct Calendar {
///     clock: Arc<dyn ClockPort>,
/// }
///
/// impl Calendar {
///     pub fn current_year(&self) -> i32 {
///         self.clock.now().year()
///     }
/// }
/// ```
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ClockPort: Send + Sync {
    /// Get current time as DateTime<Utc>
    fn now(&self) -> DateTime<Utc>;

    /// Get current time as Unix timestamp in milliseconds
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// Get current time as Unix timestamp in seconds
    fn now_unix_secs(&self) -> i64 {
        self.now().timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Pinned(DateTime<Utc>);

    impl ClockPort for Pinned {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn provided_methods_derive_from_now() {
        let clock = Pinned(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
        assert_eq!(clock.now_unix_secs(), 1_705_314_600);
        assert_eq!(clock.now_millis(), 1_705_314_600_000);
    }

    #[test]
    fn mock_clock_returns_configured_time() {
        let fixed = Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap();
        let mut clock = MockClockPort::new();
        clock.expect_now().returning(move || fixed);

        assert_eq!(clock.now(), fixed);
    }
}
