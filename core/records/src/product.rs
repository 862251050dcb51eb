//! FILENAME: core/records/src/product.rs
//! Product category records.

use serde::{Deserialize, Serialize};

/// A single product row, reduced to the one column the aggregations use.
/// The category is read from the first column of the products table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Category identifier, `None` when the source field was blank.
    pub category: Option<String>,
}

/// All loaded products plus the reconciled header names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductTable {
    /// Header names after load-time reconciliation.
    pub headers: Vec<String>,
    pub rows: Vec<ProductRecord>,
}

impl ProductTable {
    pub fn new(headers: Vec<String>, rows: Vec<ProductRecord>) -> Self {
        ProductTable { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> {
        self.rows.iter()
    }
}
