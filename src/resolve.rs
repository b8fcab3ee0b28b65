use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{DashboardOption, TableOption};
use crate::consts::{MS_PER_MINUTE, PAST_PREFIX};
use crate::interval::DateInterval;

/// A range selection tagged with the product surface it came from.
///
/// The two catalogs are distinct types; this union is the only sanctioned
/// way to pass a selection across a scope-agnostic boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "source", content = "option")]
pub enum SelectedTimeOption {
    #[serde(rename = "TABLE")]
    Table(TableOption),
    #[serde(rename = "DASHBOARD")]
    Dashboard(DashboardOption),
}

impl SelectedTimeOption {
    /// Resolves the selection into an absolute interval anchored at the
    /// current instant. See [`Self::resolve_at`].
    pub fn resolve(&self) -> Option<DateInterval> {
        self.resolve_at(Utc::now())
    }

    /// Resolves the selection into `[now - duration, now]`.
    ///
    /// Returns `None` for the unbounded sentinels: `AllTime` has no lower
    /// bound, and `Custom` means the caller supplies its own interval,
    /// bypassing resolution. `now` is a single captured instant, so
    /// `from <= to` holds regardless of clock granularity.
    ///
    /// For table selections only `from` is contractually meaningful;
    /// `to` is the capture instant.
    pub fn resolve_at(&self, now: DateTime<Utc>) -> Option<DateInterval> {
        let minutes = match self {
            Self::Table(option) => option.duration_minutes()?,
            Self::Dashboard(option) => option.settings()?.minutes,
        };
        Some(DateInterval::lookback(now, minutes))
    }
}

/// Finds the dashboard catalog entry whose duration is numerically nearest
/// to the interval's duration. Ties go to the option declared earlier in
/// the catalog.
pub fn closest_dashboard_option(interval: &DateInterval) -> DashboardOption {
    let target_ms = interval.duration_ms();

    let mut best = DashboardOption::AGGREGATIONS[0];
    let mut best_diff = duration_diff(target_ms, best);
    for &option in &DashboardOption::AGGREGATIONS[1..] {
        let diff = duration_diff(target_ms, option);
        if diff < best_diff {
            best = option;
            best_diff = diff;
        }
    }
    best
}

fn duration_diff(target_ms: i64, option: DashboardOption) -> i64 {
    match option.settings() {
        Some(setting) => (target_ms - i64::from(setting.minutes) * MS_PER_MINUTE).abs(),
        None => i64::MAX,
    }
}

/// Maps a range label to its abbreviated form ("Past 7 days" -> "7d").
///
/// Strips a leading "Past " prefix before matching, then falls back to
/// matching the full input, then echoes the input unchanged. Never fails.
pub fn abbreviate(label: &str) -> &str {
    let clean = label.strip_prefix(PAST_PREFIX).unwrap_or(label);
    short_form(clean)
        .or_else(|| short_form(label))
        .unwrap_or(label)
}

fn short_form(label: &str) -> Option<&'static str> {
    let abbreviated = match label {
        "5 min" => "5m",
        "30 min" => "30m",
        "1 hour" => "1h",
        "3 hours" => "3h",
        "6 hours" => "6h",
        "1 day" => "1d",
        "3 days" => "3d",
        "7 days" => "7d",
        "14 days" => "14d",
        "30 days" => "30d",
        "90 days" => "90d",
        "1 year" => "1y",
        "All time" => "All",
        "Custom" => "Custom",
        _ => return None,
    };
    Some(abbreviated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MINUTES_PER_DAY;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn test_resolve_dashboard_durations() {
        for option in DashboardOption::AGGREGATIONS {
            let interval = SelectedTimeOption::Dashboard(option)
                .resolve_at(now())
                .expect("catalog option must resolve");
            let minutes = option.settings().expect("catalog entry missing").minutes;

            assert_eq!(interval.to(), now(), "to anchor for {option}");
            assert_eq!(
                interval.duration_ms(),
                i64::from(minutes) * 60_000,
                "duration for {option}"
            );
        }
    }

    #[test]
    fn test_resolve_dashboard_custom_is_absent() {
        let result = SelectedTimeOption::Dashboard(DashboardOption::Custom).resolve_at(now());
        assert_eq!(result, None);
    }

    #[test]
    fn test_resolve_table_durations() {
        for option in TableOption::OPTIONS {
            let result = SelectedTimeOption::Table(option).resolve_at(now());
            match option.duration_minutes() {
                Some(minutes) => {
                    let interval = result.expect("bounded option must resolve");
                    assert_eq!(
                        interval.from(),
                        now() - Duration::minutes(i64::from(minutes)),
                        "from anchor for {option}"
                    );
                    assert_eq!(interval.to(), now());
                }
                None => assert_eq!(result, None, "unbounded option must not resolve"),
            }
        }
    }

    #[test]
    fn test_resolve_all_time_is_absent() {
        let result = SelectedTimeOption::Table(TableOption::AllTime).resolve_at(now());
        assert_eq!(result, None);
    }

    #[test]
    fn test_resolve_captures_now_once() {
        let interval = SelectedTimeOption::Dashboard(DashboardOption::Past5Min)
            .resolve()
            .expect("catalog option must resolve");
        assert!(interval.from() <= interval.to());
    }

    #[test]
    fn test_closest_is_idempotent_on_exact_match() {
        for option in DashboardOption::AGGREGATIONS {
            let interval = SelectedTimeOption::Dashboard(option)
                .resolve_at(now())
                .expect("catalog option must resolve");
            assert_eq!(closest_dashboard_option(&interval), option);
        }
    }

    #[test]
    fn test_closest_on_arbitrary_intervals() {
        struct TestCase {
            minutes: u32,
            expected: DashboardOption,
            description: &'static str,
        }

        let cases = [
            TestCase {
                minutes: 0,
                expected: DashboardOption::Past5Min,
                description: "empty interval snaps to smallest option",
            },
            TestCase {
                minutes: 2 * MINUTES_PER_DAY,
                expected: DashboardOption::Past1Day,
                description: "two days is nearer one day than seven",
            },
            TestCase {
                minutes: 600 * MINUTES_PER_DAY,
                expected: DashboardOption::Past1Year,
                description: "huge interval snaps to largest option",
            },
            TestCase {
                minutes: 45,
                expected: DashboardOption::Past30Min,
                description: "equidistant tie goes to the earlier catalog entry",
            },
        ];

        for case in &cases {
            let interval = DateInterval::lookback(now(), case.minutes);
            assert_eq!(
                closest_dashboard_option(&interval),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_abbreviate_known_labels() {
        let cases = [
            ("Past 5 min", "5m"),
            ("Past 30 min", "30m"),
            ("Past 1 hour", "1h"),
            ("Past 3 hours", "3h"),
            ("Past 6 hours", "6h"),
            ("Past 1 day", "1d"),
            ("Past 3 days", "3d"),
            ("Past 7 days", "7d"),
            ("Past 14 days", "14d"),
            ("Past 30 days", "30d"),
            ("Past 90 days", "90d"),
            ("Past 1 year", "1y"),
            ("All time", "All"),
            ("Custom", "Custom"),
        ];
        for (label, expected) in cases {
            assert_eq!(abbreviate(label), expected);
        }
    }

    #[test]
    fn test_abbreviate_without_prefix() {
        // Bare forms (no "Past " prefix) still match
        assert_eq!(abbreviate("7 days"), "7d");
        assert_eq!(abbreviate("1 hour"), "1h");
    }

    #[test]
    fn test_abbreviate_unknown_echoes_input() {
        assert_eq!(abbreviate("unknown-label"), "unknown-label");
        assert_eq!(abbreviate(""), "");
        assert_eq!(abbreviate("Past "), "Past ");
    }

    #[test]
    fn test_serde_tagged_union() {
        let selection = SelectedTimeOption::Table(TableOption::Past7Days);
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"{"source":"TABLE","option":"Past 7 days"}"#);
        let parsed: SelectedTimeOption = serde_json::from_str(&json).unwrap();
        assert_eq!(selection, parsed);

        let selection = SelectedTimeOption::Dashboard(DashboardOption::Past1Year);
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"{"source":"DASHBOARD","option":"Past 1 year"}"#);
        let parsed: SelectedTimeOption = serde_json::from_str(&json).unwrap();
        assert_eq!(selection, parsed);
    }

    #[test]
    fn test_serde_rejects_cross_scope_option() {
        // A dashboard-only label under the TABLE tag must fail validation
        let json = r#"{"source":"TABLE","option":"Past 1 year"}"#;
        let result: Result<SelectedTimeOption, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
