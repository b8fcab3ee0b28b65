//! Date-range catalogs and lookback-window resolution for dashboard and
//! table views.
//!
//! Two fixed catalogs map human-readable range labels ("Past 7 days") to
//! durations and aggregation bucket sizes; pure resolvers turn a selection
//! into an absolute [`DateInterval`] anchored at now, and an entitlement
//! filter grays out options the caller's plan does not permit.

mod catalog;
mod consts;
mod entitlement;
mod interval;
mod picker;
mod prelude;
mod resolve;

pub use catalog::{DashboardOption, ParseError, RangeSetting, TableOption, Truncation};
pub use consts::*;
pub use entitlement::{
    DATA_ACCESS_DAYS, EntitlementLimit, EntitlementLookup, is_dashboard_option_available,
    is_table_option_available, lookback_limit,
};
pub use interval::{DateInterval, IntervalError};
pub use picker::{DashboardRangePicker, TableRangePicker};
pub use resolve::{SelectedTimeOption, abbreviate, closest_dashboard_option};
