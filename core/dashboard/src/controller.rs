//! FILENAME: core/dashboard/src/controller.rs
//! The dashboard session - panel computation and the filter
//! transition.
//!
//! Construction computes every static panel once; `apply_filter` is
//! the only recomputation path afterwards, and it recomputes only the
//! status breakdown (the single reactive panel). Validation happens
//! before any state is touched, so a rejected filter leaves the
//! session exactly as it was.

use log::{debug, warn};
use metrics_engine::{
    category_counts, count_by, histogram, spread, time_series, AggregateResult, Histogram,
    KeyOrder, RowPredicate, SpreadSummary,
};
use records::{Dimension, OrderTable, ProductTable};
use serde::{Deserialize, Serialize};

use crate::error::FilterError;
use crate::filter::FilterState;
use crate::view::{DashboardSnapshot, EmptyResultWarning, StatusBreakdown};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Knobs of the precomputed panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Entries kept in the top-categories ranking.
    pub top_category_count: usize,
    /// Bin count of the delivery-time histogram.
    pub histogram_bins: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            top_category_count: 10,
            histogram_bins: 40,
        }
    }
}

// ============================================================================
// DASHBOARD SESSION
// ============================================================================

/// One interactive session over immutable, derived tables.
///
/// The session owns the selector domains (which months and states are
/// valid choices), the static panels, and the applied filter with its
/// breakdown. The tables themselves stay with the caller and are
/// passed back in for each transition.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: PanelConfig,
    months: Vec<String>,
    states: Vec<String>,
    total_orders: u64,
    state_distribution: AggregateResult,
    top_categories: AggregateResult,
    monthly_volume: AggregateResult,
    delivery_histogram: Histogram,
    delivery_spread: Option<SpreadSummary>,
    filter: FilterState,
    breakdown: StatusBreakdown,
}

impl Dashboard {
    /// Builds a session with default panel knobs.
    pub fn new(orders: &OrderTable, products: &ProductTable) -> Result<Self, FilterError> {
        Self::with_config(orders, products, PanelConfig::default())
    }

    /// Builds a session over derived tables: computes every static
    /// panel and the initial breakdown for the earliest month with no
    /// state filter. Fails when the data holds no derivable months,
    /// because then no valid filter exists at all.
    pub fn with_config(
        orders: &OrderTable,
        products: &ProductTable,
        config: PanelConfig,
    ) -> Result<Self, FilterError> {
        let months = orders.months();
        if months.is_empty() {
            return Err(FilterError::NoMonths);
        }
        let states = orders.states();

        let delivery_times = orders.delivery_times();
        let filter = FilterState::new(months[0].clone(), None);
        let breakdown = Self::compute_breakdown(orders, &filter);

        Ok(Dashboard {
            total_orders: orders.len() as u64,
            state_distribution: count_by(orders, Dimension::State, KeyOrder::CountDescending, None),
            top_categories: category_counts(products, config.top_category_count),
            monthly_volume: time_series(orders, Dimension::Month),
            delivery_histogram: histogram(&delivery_times, config.histogram_bins),
            delivery_spread: spread(&delivery_times),
            config,
            months,
            states,
            filter,
            breakdown,
        })
    }

    /// Validates and applies a new filter, recomputing the status
    /// breakdown. On rejection the previous filter and breakdown are
    /// untouched.
    ///
    /// A valid selection that matches zero rows is still applied; the
    /// returned breakdown carries an [`EmptyResultWarning`] instead of
    /// an error.
    pub fn apply_filter(
        &mut self,
        orders: &OrderTable,
        month: &str,
        state: Option<&str>,
    ) -> Result<StatusBreakdown, FilterError> {
        if !self.months.iter().any(|m| m == month) {
            debug!("rejected filter: unknown month {:?}", month);
            return Err(FilterError::UnknownMonth(month.to_string()));
        }
        if let Some(state) = state {
            if !self.states.iter().any(|s| s == state) {
                debug!("rejected filter: unknown state {:?}", state);
                return Err(FilterError::UnknownState(state.to_string()));
            }
        }

        let next = FilterState::new(month, state.map(|s| s.to_string()));
        debug!("filter {:?} -> {:?}", self.filter, next);
        let breakdown = Self::compute_breakdown(orders, &next);
        self.filter = next;
        self.breakdown = breakdown.clone();
        Ok(breakdown)
    }

    fn compute_breakdown(orders: &OrderTable, filter: &FilterState) -> StatusBreakdown {
        let predicate: &RowPredicate<'_> = &|record| filter.matches(record);
        let statuses = count_by(orders, Dimension::Status, KeyOrder::KeyAscending, Some(predicate));
        let warning = if statuses.total() == 0 {
            warn!("filter {:?} matches no orders", filter);
            Some(EmptyResultWarning {
                filter: filter.clone(),
            })
        } else {
            None
        };
        StatusBreakdown {
            filter: filter.clone(),
            statuses,
            warning,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> PanelConfig {
        self.config
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Month selector options, earliest first.
    pub fn months(&self) -> &[String] {
        &self.months
    }

    /// State selector options, sorted.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn total_orders(&self) -> u64 {
        self.total_orders
    }

    pub fn state_distribution(&self) -> &AggregateResult {
        &self.state_distribution
    }

    pub fn top_categories(&self) -> &AggregateResult {
        &self.top_categories
    }

    pub fn monthly_volume(&self) -> &AggregateResult {
        &self.monthly_volume
    }

    pub fn delivery_histogram(&self) -> &Histogram {
        &self.delivery_histogram
    }

    pub fn delivery_spread(&self) -> Option<&SpreadSummary> {
        self.delivery_spread.as_ref()
    }

    /// The breakdown computed under the currently applied filter.
    pub fn status_breakdown(&self) -> &StatusBreakdown {
        &self.breakdown
    }

    /// Full serializable snapshot for the rendering layer.
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            months: self.months.clone(),
            states: self.states.clone(),
            total_orders: self.total_orders,
            state_distribution: self.state_distribution.clone(),
            top_categories: self.top_categories.clone(),
            monthly_volume: self.monthly_volume.clone(),
            delivery_histogram: self.delivery_histogram.clone(),
            delivery_spread: self.delivery_spread.clone(),
            status_breakdown: self.breakdown.clone(),
        }
    }
}
