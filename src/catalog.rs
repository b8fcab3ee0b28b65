use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_YEAR, MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::prelude::*;

/// Time-bucket size used to aggregate data within a resolved interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Truncation {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

/// Duration and aggregation bucket attached to a dashboard range option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeSetting {
    /// Lookback duration in minutes
    pub minutes: u32,
    /// Bucket size for downstream aggregation
    pub truncation: Truncation,
}

/// A labeled range option selectable on the dashboard view.
///
/// `Custom` is a sentinel for an arbitrary, non-cataloged interval; it has
/// no [`RangeSetting`] and never appears in [`Self::AGGREGATIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardOption {
    Past5Min,
    Past30Min,
    Past1Hour,
    Past3Hours,
    Past1Day,
    Past7Days,
    Past30Days,
    Past90Days,
    Past1Year,
    Custom,
}

/// A labeled range option selectable on the table view.
///
/// `AllTime` is a sentinel meaning unbounded; unlike the dashboard `Custom`
/// it is a regular row in the dropdown and part of [`Self::OPTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableOption {
    Past30Min,
    Past1Hour,
    Past6Hours,
    Past1Day,
    Past3Days,
    Past7Days,
    Past14Days,
    Past30Days,
    Past90Days,
    AllTime,
}

/// Error type for range option and truncation label parsing.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Unknown dashboard range option: {_0}")]
    UnknownDashboardOption(String),
    #[display(fmt = "Unknown table range option: {_0}")]
    UnknownTableOption(String),
    #[display(fmt = "Unknown truncation granularity: {_0}")]
    UnknownTruncation(String),
}

impl std::error::Error for ParseError {}

impl Truncation {
    /// Returns the canonical lowercase label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Truncation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minute" => Ok(Self::Minute),
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(ParseError::UnknownTruncation(s.to_owned())),
        }
    }
}

impl DashboardOption {
    /// Dashboard catalog in display order. `Custom` is deliberately absent.
    pub const AGGREGATIONS: [Self; 9] = [
        Self::Past5Min,
        Self::Past30Min,
        Self::Past1Hour,
        Self::Past3Hours,
        Self::Past1Day,
        Self::Past7Days,
        Self::Past30Days,
        Self::Past90Days,
        Self::Past1Year,
    ];

    /// Initial dashboard selection
    pub const DEFAULT: Self = Self::Past1Day;

    /// Returns the canonical display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Past5Min => "Past 5 min",
            Self::Past30Min => "Past 30 min",
            Self::Past1Hour => "Past 1 hour",
            Self::Past3Hours => "Past 3 hours",
            Self::Past1Day => "Past 1 day",
            Self::Past7Days => "Past 7 days",
            Self::Past30Days => "Past 30 days",
            Self::Past90Days => "Past 90 days",
            Self::Past1Year => "Past 1 year",
            Self::Custom => "Custom",
        }
    }

    /// Returns the duration and aggregation bucket for this option.
    /// `Custom` has no catalog entry and returns `None`.
    pub const fn settings(self) -> Option<RangeSetting> {
        let (minutes, truncation) = match self {
            Self::Past5Min => (5, Truncation::Minute),
            Self::Past30Min => (30, Truncation::Minute),
            Self::Past1Hour => (MINUTES_PER_HOUR, Truncation::Minute),
            Self::Past3Hours => (3 * MINUTES_PER_HOUR, Truncation::Minute),
            Self::Past1Day => (MINUTES_PER_DAY, Truncation::Hour),
            Self::Past7Days => (7 * MINUTES_PER_DAY, Truncation::Hour),
            Self::Past30Days => (30 * MINUTES_PER_DAY, Truncation::Day),
            Self::Past90Days => (90 * MINUTES_PER_DAY, Truncation::Week),
            Self::Past1Year => (DAYS_PER_YEAR * MINUTES_PER_DAY, Truncation::Month),
            Self::Custom => return None,
        };
        Some(RangeSetting { minutes, truncation })
    }

    /// Membership test against the dashboard catalog, total over all strings.
    /// The `Custom` sentinel is not a catalog entry and is rejected.
    pub fn is_valid_label(value: &str) -> bool {
        Self::AGGREGATIONS
            .iter()
            .any(|option| option.label() == value)
    }
}

impl Default for DashboardOption {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DashboardOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DashboardOption {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Past 5 min" => Ok(Self::Past5Min),
            "Past 30 min" => Ok(Self::Past30Min),
            "Past 1 hour" => Ok(Self::Past1Hour),
            "Past 3 hours" => Ok(Self::Past3Hours),
            "Past 1 day" => Ok(Self::Past1Day),
            "Past 7 days" => Ok(Self::Past7Days),
            "Past 30 days" => Ok(Self::Past30Days),
            "Past 90 days" => Ok(Self::Past90Days),
            "Past 1 year" => Ok(Self::Past1Year),
            "Custom" => Ok(Self::Custom),
            _ => Err(ParseError::UnknownDashboardOption(s.to_owned())),
        }
    }
}

impl TableOption {
    /// Table catalog in display order, `AllTime` included.
    pub const OPTIONS: [Self; 10] = [
        Self::Past30Min,
        Self::Past1Hour,
        Self::Past6Hours,
        Self::Past1Day,
        Self::Past3Days,
        Self::Past7Days,
        Self::Past14Days,
        Self::Past30Days,
        Self::Past90Days,
        Self::AllTime,
    ];

    /// Returns the canonical display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Past30Min => "Past 30 min",
            Self::Past1Hour => "Past 1 hour",
            Self::Past6Hours => "Past 6 hours",
            Self::Past1Day => "Past 1 day",
            Self::Past3Days => "Past 3 days",
            Self::Past7Days => "Past 7 days",
            Self::Past14Days => "Past 14 days",
            Self::Past30Days => "Past 30 days",
            Self::Past90Days => "Past 90 days",
            Self::AllTime => "All time",
        }
    }

    /// Returns the lookback duration in minutes.
    /// `AllTime` is unbounded and returns `None`.
    pub const fn duration_minutes(self) -> Option<u32> {
        match self {
            Self::Past30Min => Some(30),
            Self::Past1Hour => Some(MINUTES_PER_HOUR),
            Self::Past6Hours => Some(6 * MINUTES_PER_HOUR),
            Self::Past1Day => Some(MINUTES_PER_DAY),
            Self::Past3Days => Some(3 * MINUTES_PER_DAY),
            Self::Past7Days => Some(7 * MINUTES_PER_DAY),
            Self::Past14Days => Some(14 * MINUTES_PER_DAY),
            Self::Past30Days => Some(30 * MINUTES_PER_DAY),
            Self::Past90Days => Some(90 * MINUTES_PER_DAY),
            Self::AllTime => None,
        }
    }

    /// Membership test against the table catalog, total over all strings.
    pub fn is_valid_label(value: &str) -> bool {
        Self::OPTIONS.iter().any(|option| option.label() == value)
    }
}

impl fmt::Display for TableOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TableOption {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Past 30 min" => Ok(Self::Past30Min),
            "Past 1 hour" => Ok(Self::Past1Hour),
            "Past 6 hours" => Ok(Self::Past6Hours),
            "Past 1 day" => Ok(Self::Past1Day),
            "Past 3 days" => Ok(Self::Past3Days),
            "Past 7 days" => Ok(Self::Past7Days),
            "Past 14 days" => Ok(Self::Past14Days),
            "Past 30 days" => Ok(Self::Past30Days),
            "Past 90 days" => Ok(Self::Past90Days),
            "All time" => Ok(Self::AllTime),
            _ => Err(ParseError::UnknownTableOption(s.to_owned())),
        }
    }
}

impl Serialize for DashboardOption {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for DashboardOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for TableOption {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TableOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
