//! FILENAME: core/metrics-engine/src/lib.rs
//! Aggregation engine for the order analytics core.
//!
//! Pure, stateless functions from (table, dimension, optional
//! predicate) to ordered, serializable results. No I/O and no mutable
//! state; the dashboard layer owns filter state and calls in here.
//!
//! Layers:
//! - `result`: The ordered key/count output contract
//! - `engine`: Grouping and counting over the order/product tables
//! - `histogram`: Equal-width binning of delivery times
//! - `summary`: Spread summary (box-plot feed)

pub mod engine;
pub mod histogram;
pub mod result;
pub mod summary;

pub use engine::{category_counts, count_by, time_series, top_n, KeyOrder, RowPredicate};
pub use histogram::{histogram, Histogram, HistogramBin};
pub use result::{AggregateEntry, AggregateResult};
pub use summary::{spread, SpreadSummary};
