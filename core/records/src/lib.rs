//! FILENAME: core/records/src/lib.rs
//! PURPOSE: Shared record types for the order analytics core.
//! CONTEXT: Loaded tables, the dimension (group-by key) abstraction, and
//! the derivation pass that fills the computed order columns. Every
//! other crate in the workspace consumes these types.

pub mod derive;
pub mod dimension;
pub mod order;
pub mod product;

// Re-export commonly used types at the crate root
pub use derive::derive;
pub use dimension::{Dimension, MissingPolicy, BLANK_LABEL};
pub use order::{OrderRecord, OrderTable};
pub use product::{ProductRecord, ProductTable};
