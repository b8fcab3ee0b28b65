/// Minutes per hour
pub const MINUTES_PER_HOUR: u32 = 60;

/// Hours per day
pub const HOURS_PER_DAY: u32 = 24;

/// Minutes per day, the unit entitlement limits are expressed in
pub const MINUTES_PER_DAY: u32 = HOURS_PER_DAY * MINUTES_PER_HOUR;

/// Days per (non-leap) year, used for the "Past 1 year" duration
pub const DAYS_PER_YEAR: u32 = 365;

/// Milliseconds per minute, used when comparing interval durations
pub const MS_PER_MINUTE: i64 = 60_000;

/// Prefix shared by all relative range labels ("Past 7 days")
pub const PAST_PREFIX: &str = "Past ";

/// Tooltip shown on range options disabled by the caller's plan
pub const PLAN_LIMIT_MESSAGE: &str =
    "This time range is not available in your current plan.";
