//! FILENAME: core/ingest/src/lib.rs
//! Order analytics ingest module
//!
//! Loads the orders and products CSV sources into the typed tables the
//! rest of the workspace aggregates over.

mod csv;
mod error;
mod loader;

pub use error::LoadError;
pub use loader::{load_orders, load_products, load_tables};
