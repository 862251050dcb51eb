//! FILENAME: core/metrics-engine/src/engine.rs
//! Counting engine - groups rows by a dimension under an optional
//! row predicate.
//!
//! Every function here is a pure scan over an immutable table: tally
//! into a hash map, then sort the entries into the ordering the view
//! asked for. The hash map is only the intermediate; output order is
//! always fully specified.

use records::{Dimension, MissingPolicy, OrderRecord, OrderTable, ProductTable, BLANK_LABEL};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::result::{AggregateEntry, AggregateResult};

/// Row filter applied before grouping. The lifetime lets a predicate
/// borrow the filter state it closes over.
pub type RowPredicate<'a> = dyn Fn(&OrderRecord) -> bool + 'a;

// ============================================================================
// ORDERING
// ============================================================================

/// Entry ordering of an aggregate result. The choice is part of each
/// view's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyOrder {
    /// Keys ascending (time series, categorical listings).
    KeyAscending,
    /// Counts descending, ties broken by key ascending (ranking views).
    CountDescending,
}

// ============================================================================
// COUNTING
// ============================================================================

/// Groups order rows passing the predicate by the dimension's key.
///
/// Absent keys follow the dimension's missing policy: status and state
/// bucket them under [`BLANK_LABEL`]; month tallies them in
/// `missing_keys` rather than inventing a bucket, since a derived month
/// is guaranteed for every well-formed row.
pub fn count_by(
    orders: &OrderTable,
    dimension: Dimension,
    order: KeyOrder,
    predicate: Option<&RowPredicate<'_>>,
) -> AggregateResult {
    let policy = dimension.missing_policy();
    let mut tally: FxHashMap<&str, u64> = FxHashMap::default();
    let mut missing = 0u64;

    for record in orders.iter() {
        if let Some(pred) = predicate {
            if !pred(record) {
                continue;
            }
        }
        match dimension.order_key(record) {
            Some(key) => *tally.entry(key).or_insert(0) += 1,
            None => match policy {
                MissingPolicy::BucketBlank => *tally.entry(BLANK_LABEL).or_insert(0) += 1,
                MissingPolicy::Tally => missing += 1,
            },
        }
    }

    finish(tally, missing, order)
}

/// Unfiltered count over the dimension, sorted count-descending and
/// truncated to the `n` largest entries. Truncation drops tail entries
/// only; `missing_keys` still reports the full absent-key tally.
pub fn top_n(orders: &OrderTable, dimension: Dimension, n: usize) -> AggregateResult {
    let mut result = count_by(orders, dimension, KeyOrder::CountDescending, None);
    result.entries.truncate(n);
    result
}

/// Counts per dimension key in ascending key order, no predicate. With
/// [`Dimension::Month`] this is the orders-over-time series: "YYYY-MM"
/// keys sort chronologically.
pub fn time_series(orders: &OrderTable, dimension: Dimension) -> AggregateResult {
    count_by(orders, dimension, KeyOrder::KeyAscending, None)
}

/// Top product categories by row count. Rows without a category are
/// tallied in `missing_keys`, never bucketed.
pub fn category_counts(products: &ProductTable, n: usize) -> AggregateResult {
    let mut tally: FxHashMap<&str, u64> = FxHashMap::default();
    let mut missing = 0u64;

    for record in products.iter() {
        match Dimension::Category.product_key(record) {
            Some(key) => *tally.entry(key).or_insert(0) += 1,
            None => missing += 1,
        }
    }

    let mut result = finish(tally, missing, KeyOrder::CountDescending);
    result.entries.truncate(n);
    result
}

fn finish(tally: FxHashMap<&str, u64>, missing: u64, order: KeyOrder) -> AggregateResult {
    let mut entries: Vec<AggregateEntry> = tally
        .into_iter()
        .map(|(key, count)| AggregateEntry::new(key, count))
        .collect();
    sort_entries(&mut entries, order);
    AggregateResult {
        entries,
        missing_keys: missing,
    }
}

fn sort_entries(entries: &mut [AggregateEntry], order: KeyOrder) {
    match order {
        KeyOrder::KeyAscending => entries.sort_by(|a, b| a.key.cmp(&b.key)),
        KeyOrder::CountDescending => {
            entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)))
        }
    }
}
