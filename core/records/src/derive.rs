//! FILENAME: core/records/src/derive.rs
//! Derivation pass - fills the computed order columns.
//!
//! Runs once after load, before any aggregation. Both derived fields are
//! pure functions of the loaded timestamps, so re-running the pass is a
//! no-op on already-derived data.

use crate::order::OrderTable;

/// Format of the derived month bucket. Lexicographic order on the result
/// is chronological order.
const MONTH_FORMAT: &str = "%Y-%m";

/// Fills `order_month` and `delivery_time` on every row.
///
/// - `order_month` is the "YYYY-MM" truncation of the purchase
///   timestamp, `None` when the timestamp is missing.
/// - `delivery_time` is the whole-day difference between the delivered
///   and purchase dates, `None` when either endpoint is missing.
///   Negative differences (delivered before purchased) are kept as-is.
///
/// Row order and every other field are untouched.
pub fn derive(mut orders: OrderTable) -> OrderTable {
    for record in orders.rows.iter_mut() {
        record.order_month = record
            .purchased
            .map(|ts| ts.format(MONTH_FORMAT).to_string());
        record.delivery_time = match (record.purchased, record.delivered) {
            (Some(purchased), Some(delivered)) => {
                Some((delivered.date() - purchased.date()).num_days())
            }
            _ => None,
        };
    }
    orders
}
