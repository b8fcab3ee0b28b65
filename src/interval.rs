use chrono::{DateTime, Duration, Utc};

/// Error type for date interval construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    /// Start of the interval is after its end.
    #[error("Invalid date interval: from ({from}) is after to ({to})")]
    InvalidOrder {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}

/// An absolute date interval with `from <= to`.
///
/// Dashboard resolutions use both bounds; table resolutions reuse this type
/// but only `from` is part of the caller's contract (`to` is the instant the
/// resolution was computed at).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl DateInterval {
    /// Creates a new interval with validation.
    ///
    /// # Errors
    /// Returns `IntervalError::InvalidOrder` if `from > to`.
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self, IntervalError> {
        if from > to {
            return Err(IntervalError::InvalidOrder { from, to });
        }
        Ok(Self { from, to })
    }

    /// Creates the interval ending at `now` and reaching `minutes` back.
    /// Ordered by construction since the duration is non-negative.
    pub fn lookback(now: DateTime<Utc>, minutes: u32) -> Self {
        Self {
            from: now - Duration::minutes(i64::from(minutes)),
            to: now,
        }
    }

    /// Returns the start of the interval
    pub const fn from(&self) -> DateTime<Utc> {
        self.from
    }

    /// Returns the end of the interval
    pub const fn to(&self) -> DateTime<Utc> {
        self.to
    }

    /// Returns both bounds as a tuple
    pub const fn bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.from, self.to)
    }

    /// Returns the length of the interval
    pub fn duration(&self) -> Duration {
        self.to - self.from
    }

    /// Returns the length of the interval in milliseconds
    pub fn duration_ms(&self) -> i64 {
        self.duration().num_milliseconds()
    }

    /// Checks if the interval contains a given instant (inclusive bounds)
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.from <= *instant && *instant <= self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().expect("valid timestamp")
    }

    #[test]
    fn test_new_interval_cases() {
        struct TestCase {
            from_secs: i64,
            to_secs: i64,
            should_succeed: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                from_secs: 1_000,
                to_secs: 2_000,
                should_succeed: true,
                description: "valid interval (from < to)",
            },
            TestCase {
                from_secs: 2_000,
                to_secs: 1_000,
                should_succeed: false,
                description: "invalid interval (from > to)",
            },
            TestCase {
                from_secs: 1_000,
                to_secs: 1_000,
                should_succeed: true,
                description: "empty interval (from == to)",
            },
        ];

        for case in &cases {
            let result = DateInterval::new(instant(case.from_secs), instant(case.to_secs));
            if case.should_succeed {
                assert!(result.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(result.is_err(), "Expected failure for: {}", case.description);
            }
        }
    }

    #[test]
    fn test_accessors() {
        let from = instant(1_000);
        let to = instant(2_000);
        let interval = DateInterval::new(from, to).expect("failed to construct interval");

        assert_eq!(interval.from(), from);
        assert_eq!(interval.to(), to);
        assert_eq!(interval.bounds(), (from, to));
    }

    #[test]
    fn test_duration() {
        let interval =
            DateInterval::new(instant(1_000), instant(1_090)).expect("failed to construct interval");
        assert_eq!(interval.duration(), Duration::seconds(90));
        assert_eq!(interval.duration_ms(), 90_000);
    }

    #[test]
    fn test_lookback() {
        let now = instant(1_000_000);
        let interval = DateInterval::lookback(now, 30);

        assert_eq!(interval.to(), now);
        assert_eq!(interval.from(), now - Duration::minutes(30));
        assert_eq!(interval.duration_ms(), 30 * 60_000);
    }

    #[test]
    fn test_lookback_zero_minutes() {
        let now = instant(1_000_000);
        let interval = DateInterval::lookback(now, 0);
        assert_eq!(interval.from(), interval.to());
        assert_eq!(interval.duration_ms(), 0);
    }

    #[test]
    fn test_contains() {
        let interval =
            DateInterval::new(instant(1_000), instant(2_000)).expect("failed to construct interval");

        assert!(interval.contains(&instant(1_000)));
        assert!(interval.contains(&instant(1_500)));
        assert!(interval.contains(&instant(2_000)));
        assert!(!interval.contains(&instant(999)));
        assert!(!interval.contains(&instant(2_001)));
    }

    #[test]
    fn test_invalid_order_error_message() {
        let result = DateInterval::new(instant(2_000), instant(1_000));
        let err = result.expect_err("expected ordering error");
        assert!(err.to_string().contains("is after"));
    }
}
