//! FILENAME: core/dashboard/src/view.rs
//! Serializable views handed to the rendering layer.
//!
//! Field names here are read by the frontend; renaming one is a
//! breaking change to the rendering contract.

use std::fmt;

use metrics_engine::{AggregateResult, Histogram, SpreadSummary};
use serde::{Deserialize, Serialize};

use crate::filter::FilterState;

/// Advisory attached to a valid filter that matched zero rows. Not an
/// error: the selection is legitimate, there is just nothing in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResultWarning {
    /// The filter that produced no rows.
    pub filter: FilterState,
}

impl fmt::Display for EmptyResultWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filter.state {
            Some(state) => write!(f, "no orders in {} for state {}", self.filter.month, state),
            None => write!(f, "no orders in {}", self.filter.month),
        }
    }
}

/// The reactive panel: status counts under the applied filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    /// The filter this breakdown was computed under.
    pub filter: FilterState,
    /// Status counts, key-ascending.
    pub statuses: AggregateResult,
    /// Present when the filter matched zero rows.
    pub warning: Option<EmptyResultWarning>,
}

/// Everything the rendering layer needs to draw the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Month selector options, earliest first.
    pub months: Vec<String>,
    /// State selector options, sorted; rows without a state yield no
    /// option.
    pub states: Vec<String>,
    pub total_orders: u64,
    /// Orders per customer state, count-descending, nulls bucketed.
    pub state_distribution: AggregateResult,
    /// Top product categories, count-descending.
    pub top_categories: AggregateResult,
    /// Orders per month, chronological.
    pub monthly_volume: AggregateResult,
    pub delivery_histogram: Histogram,
    pub delivery_spread: Option<SpreadSummary>,
    /// The reactive panel under the current filter.
    pub status_breakdown: StatusBreakdown,
}
