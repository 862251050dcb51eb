//! FILENAME: core/records/src/order.rs
//! Order records - the primary fact table.
//!
//! One `OrderRecord` per source row. The two derived fields start out as
//! `None` and are filled by the derivation pass; everything else comes
//! straight from the loader.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// ORDER RECORD
// ============================================================================

/// A single order as loaded from the orders table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Unique order identifier.
    pub order_id: String,

    /// Order status (enum-like but unconstrained: "delivered", "shipped",
    /// "canceled", ...). Empty when the source field was blank.
    pub status: String,

    /// Two-letter customer region code, `None` when absent in the source.
    pub customer_state: Option<String>,

    /// Purchase timestamp. `None` when the source value failed to parse;
    /// the row is kept either way.
    pub purchased: Option<NaiveDateTime>,

    /// Delivered-to-customer timestamp, nullable in the source.
    pub delivered: Option<NaiveDateTime>,

    /// Derived "YYYY-MM" bucket of `purchased`. `None` until derivation
    /// runs, and `None` afterwards iff `purchased` is `None`.
    #[serde(default)]
    pub order_month: Option<String>,

    /// Derived whole-day difference between the delivered and purchase
    /// dates. Negative when a record claims delivery before purchase;
    /// such anomalies are preserved, not clamped.
    #[serde(default)]
    pub delivery_time: Option<i64>,
}

// ============================================================================
// ORDER TABLE
// ============================================================================

/// All loaded orders, in source row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTable {
    pub rows: Vec<OrderRecord>,
}

impl OrderTable {
    pub fn new(rows: Vec<OrderRecord>) -> Self {
        OrderTable { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderRecord> {
        self.rows.iter()
    }

    /// Sorted unique derived months. Rows without a month are skipped;
    /// the "YYYY-MM" format makes lexicographic order chronological.
    pub fn months(&self) -> Vec<String> {
        let mut months: Vec<String> = self
            .rows
            .iter()
            .filter_map(|r| r.order_month.clone())
            .collect();
        months.sort();
        months.dedup();
        months
    }

    /// Sorted unique customer states, nulls skipped.
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = self
            .rows
            .iter()
            .filter_map(|r| r.customer_state.clone())
            .collect();
        states.sort();
        states.dedup();
        states
    }

    /// Non-null delivery times, in row order.
    pub fn delivery_times(&self) -> Vec<i64> {
        self.rows.iter().filter_map(|r| r.delivery_time).collect()
    }
}
