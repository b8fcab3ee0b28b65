use crate::catalog::{DashboardOption, TableOption};
use crate::consts::PLAN_LIMIT_MESSAGE;
use crate::entitlement::{
    EntitlementLimit, EntitlementLookup, is_dashboard_option_available,
    is_table_option_available, lookback_limit,
};
use crate::interval::DateInterval;
use crate::resolve::{SelectedTimeOption, abbreviate};

/// Renderer-agnostic state for the dashboard range dropdown.
///
/// Enumerates the catalog in display order, grays out options the caller's
/// plan does not entitle them to, and resolves the date interval on
/// selection before notifying the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardRangePicker {
    selected: DashboardOption,
    limit: EntitlementLimit,
}

impl DashboardRangePicker {
    /// Creates a picker at the default selection
    pub const fn new(limit: EntitlementLimit) -> Self {
        Self {
            selected: DashboardOption::DEFAULT,
            limit,
        }
    }

    /// Creates a picker with the limit fetched from an entitlement service
    pub fn from_lookup(lookup: &impl EntitlementLookup) -> Self {
        Self::new(lookback_limit(lookup))
    }

    /// Returns the current selection
    pub const fn selected(&self) -> DashboardOption {
        self.selected
    }

    /// Options to render, in display order. The `Custom` placeholder is
    /// appended only while it is the active selection.
    pub fn options(&self) -> Vec<DashboardOption> {
        let mut options = DashboardOption::AGGREGATIONS.to_vec();
        if self.selected == DashboardOption::Custom {
            options.push(DashboardOption::Custom);
        }
        options
    }

    /// Catalog options the plan does not permit, in display order
    pub fn disabled_options(&self) -> Vec<DashboardOption> {
        DashboardOption::AGGREGATIONS
            .into_iter()
            .filter(|&option| !is_dashboard_option_available(option, self.limit))
            .collect()
    }

    /// Checks if an option is rendered inert. The `Custom` placeholder is
    /// never entitlement-gated; it is selected programmatically.
    pub fn is_disabled(&self, option: DashboardOption) -> bool {
        option != DashboardOption::Custom && !is_dashboard_option_available(option, self.limit)
    }

    /// Tooltip for an option, present only when it is disabled
    pub fn tooltip(&self, option: DashboardOption) -> Option<&'static str> {
        self.is_disabled(option).then_some(PLAN_LIMIT_MESSAGE)
    }

    /// Applies a user pick. Disabled options are inert: the selection is
    /// unchanged, the callback is not invoked and `false` is returned.
    /// `Custom` selects with no interval (the caller supplies its own).
    pub fn select(
        &mut self,
        option: DashboardOption,
        on_change: impl FnOnce(DashboardOption, Option<DateInterval>),
    ) -> bool {
        if self.is_disabled(option) {
            return false;
        }
        self.selected = option;
        on_change(option, SelectedTimeOption::Dashboard(option).resolve());
        true
    }
}

/// Renderer-agnostic state for the table range dropdown.
///
/// Same contract as [`DashboardRangePicker`], with no default selection and
/// an abbreviated badge for the dropdown trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRangePicker {
    selected: Option<TableOption>,
    limit: EntitlementLimit,
}

impl TableRangePicker {
    /// Creates a picker with no selection yet
    pub const fn new(limit: EntitlementLimit) -> Self {
        Self {
            selected: None,
            limit,
        }
    }

    /// Creates a picker with the limit fetched from an entitlement service
    pub fn from_lookup(lookup: &impl EntitlementLookup) -> Self {
        Self::new(lookback_limit(lookup))
    }

    /// Returns the current selection, if any
    pub const fn selected(&self) -> Option<TableOption> {
        self.selected
    }

    /// Options to render, in display order
    pub fn options(&self) -> Vec<TableOption> {
        TableOption::OPTIONS.to_vec()
    }

    /// Catalog options the plan does not permit, in display order.
    /// Under a finite limit this always includes `AllTime`.
    pub fn disabled_options(&self) -> Vec<TableOption> {
        TableOption::OPTIONS
            .into_iter()
            .filter(|&option| !is_table_option_available(option, self.limit))
            .collect()
    }

    /// Checks if an option is rendered inert
    pub fn is_disabled(&self, option: TableOption) -> bool {
        !is_table_option_available(option, self.limit)
    }

    /// Tooltip for an option, present only when it is disabled
    pub fn tooltip(&self, option: TableOption) -> Option<&'static str> {
        self.is_disabled(option).then_some(PLAN_LIMIT_MESSAGE)
    }

    /// Short label for the dropdown trigger badge ("Past 7 days" -> "7d")
    pub fn abbreviation(&self) -> Option<&'static str> {
        self.selected.map(|option| abbreviate(option.label()))
    }

    /// Applies a user pick. Disabled options are inert: the selection is
    /// unchanged, the callback is not invoked and `false` is returned.
    /// `AllTime` selects with no interval (no lower bound).
    pub fn select(
        &mut self,
        option: TableOption,
        on_change: impl FnOnce(TableOption, Option<DateInterval>),
    ) -> bool {
        if self.is_disabled(option) {
            return false;
        }
        self.selected = Some(option);
        on_change(option, SelectedTimeOption::Table(option).resolve());
        true
    }
}
