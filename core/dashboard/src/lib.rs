//! FILENAME: core/dashboard/src/lib.rs
//! Query controller for the order analytics core.
//!
//! Owns the one piece of mutable state in the system - the applied
//! filter - and exposes the precomputed panels plus the validated
//! filter transition. Rendering and hosting sit outside this crate:
//! it hands over serializable snapshots and receives (month, state)
//! selections.
//!
//! Layers:
//! - `filter`: The applied month/state selection
//! - `controller`: Session construction and the filter transition
//! - `view`: Serializable panel snapshots for the rendering layer
//! - `error`: Recoverable filter rejections

pub mod controller;
pub mod error;
pub mod filter;
pub mod view;

pub use controller::{Dashboard, PanelConfig};
pub use error::FilterError;
pub use filter::FilterState;
pub use view::{DashboardSnapshot, EmptyResultWarning, StatusBreakdown};
