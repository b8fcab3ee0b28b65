use serde::{Deserialize, Serialize};

use crate::catalog::{DashboardOption, TableOption};
use crate::consts::MINUTES_PER_DAY;

/// Capability key under which the entitlement service publishes the
/// lookback limit.
pub const DATA_ACCESS_DAYS: &str = "data-access-days";

/// How many days of historical data the caller's plan permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntitlementLimit {
    /// No restriction on lookback
    Unlimited,
    /// At most this many days of lookback
    Days(u32),
}

impl EntitlementLimit {
    /// Returns true if this limit imposes no restriction
    pub const fn is_unlimited(self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// Checks whether a lookback of `minutes` fits within this limit.
    /// Exact integer arithmetic; no rounding at day boundaries.
    pub fn allows_minutes(self, minutes: u32) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Days(days) => {
                u64::from(days) * u64::from(MINUTES_PER_DAY) >= u64::from(minutes)
            }
        }
    }
}

/// External collaborator supplying per-capability entitlement limits.
pub trait EntitlementLookup {
    /// Returns the limit configured for the given capability key.
    fn limit(&self, capability: &str) -> EntitlementLimit;
}

/// Fetches the lookback limit from an entitlement service.
pub fn lookback_limit(lookup: &impl EntitlementLookup) -> EntitlementLimit {
    lookup.limit(DATA_ACCESS_DAYS)
}

/// Checks whether a dashboard range option is permitted under the limit.
///
/// Unlimited permits everything. Under a finite limit, the `Custom`
/// sentinel has no catalog duration and is never available.
pub fn is_dashboard_option_available(option: DashboardOption, limit: EntitlementLimit) -> bool {
    if limit.is_unlimited() {
        return true;
    }
    match option.settings() {
        Some(setting) => limit.allows_minutes(setting.minutes),
        None => false,
    }
}

/// Checks whether a table range option is permitted under the limit.
///
/// Unlimited permits everything. Under a finite limit, the unbounded
/// `AllTime` sentinel never fits.
pub fn is_table_option_available(option: TableOption, limit: EntitlementLimit) -> bool {
    if limit.is_unlimited() {
        return true;
    }
    match option.duration_minutes() {
        Some(minutes) => limit.allows_minutes(minutes),
        None => false,
    }
}

// Wire format kept from the entitlement service: `false` means unlimited,
// a bare number is the day count.
impl Serialize for EntitlementLimit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Unlimited => serializer.serialize_bool(false),
            Self::Days(days) => serializer.serialize_u32(*days),
        }
    }
}

impl<'de> Deserialize<'de> for EntitlementLimit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Days(u32),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(false) => Ok(Self::Unlimited),
            Repr::Flag(true) => Err(serde::de::Error::custom(
                "entitlement limit must be false or a day count, not true",
            )),
            Repr::Days(days) => Ok(Self::Days(days)),
        }
    }
}
