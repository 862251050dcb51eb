//! FILENAME: core/records/src/dimension.rs
//! Dimensions - the categorical group-by keys.
//!
//! A dimension names the column an aggregation groups by, together with
//! its policy for rows where that column is absent. Status and state
//! treat an absent value as its own bucket; month and category never
//! bucket an absent value, because a missing month after derivation (or
//! a missing category) is a data gap worth reporting, not a chartable
//! group.

use serde::{Deserialize, Serialize};

use crate::order::OrderRecord;
use crate::product::ProductRecord;

/// Label used for the bucket of absent values in blank-bucketing
/// dimensions.
pub const BLANK_LABEL: &str = "(blank)";

// ============================================================================
// DIMENSION
// ============================================================================

/// Categorical group-by keys over the loaded tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Order status (order table).
    Status,
    /// Customer state (order table).
    State,
    /// Derived order month (order table).
    Month,
    /// Product category (product table).
    Category,
}

/// What an aggregation does with a row whose key is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingPolicy {
    /// Count the row under the [`BLANK_LABEL`] bucket.
    BucketBlank,
    /// Exclude the row from the entries and tally it separately.
    Tally,
}

impl Dimension {
    pub fn missing_policy(&self) -> MissingPolicy {
        match self {
            Dimension::Status | Dimension::State => MissingPolicy::BucketBlank,
            Dimension::Month | Dimension::Category => MissingPolicy::Tally,
        }
    }

    /// The key this dimension reads from an order record. `None` means
    /// the value is absent (including a blank status). `Category` is a
    /// product-table dimension and yields no key here.
    pub fn order_key<'a>(&self, record: &'a OrderRecord) -> Option<&'a str> {
        match self {
            Dimension::Status => {
                if record.status.is_empty() {
                    None
                } else {
                    Some(record.status.as_str())
                }
            }
            Dimension::State => record.customer_state.as_deref(),
            Dimension::Month => record.order_month.as_deref(),
            Dimension::Category => None,
        }
    }

    /// The key this dimension reads from a product record. Only
    /// `Category` applies to products.
    pub fn product_key<'a>(&self, record: &'a ProductRecord) -> Option<&'a str> {
        match self {
            Dimension::Category => record.category.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: &str, state: Option<&str>, month: Option<&str>) -> OrderRecord {
        OrderRecord {
            order_id: "o1".to_string(),
            status: status.to_string(),
            customer_state: state.map(|s| s.to_string()),
            purchased: None,
            delivered: None,
            order_month: month.map(|m| m.to_string()),
            delivery_time: None,
        }
    }

    #[test]
    fn test_order_key_extraction() {
        let record = order("delivered", Some("SP"), Some("2017-01"));
        assert_eq!(Dimension::Status.order_key(&record), Some("delivered"));
        assert_eq!(Dimension::State.order_key(&record), Some("SP"));
        assert_eq!(Dimension::Month.order_key(&record), Some("2017-01"));
        assert_eq!(Dimension::Category.order_key(&record), None);
    }

    #[test]
    fn test_absent_values_yield_no_key() {
        let record = order("", None, None);
        assert_eq!(Dimension::Status.order_key(&record), None);
        assert_eq!(Dimension::State.order_key(&record), None);
        assert_eq!(Dimension::Month.order_key(&record), None);
    }

    #[test]
    fn test_missing_policies() {
        assert_eq!(Dimension::Status.missing_policy(), MissingPolicy::BucketBlank);
        assert_eq!(Dimension::State.missing_policy(), MissingPolicy::BucketBlank);
        assert_eq!(Dimension::Month.missing_policy(), MissingPolicy::Tally);
        assert_eq!(Dimension::Category.missing_policy(), MissingPolicy::Tally);
    }

    #[test]
    fn test_product_key_extraction() {
        let record = ProductRecord {
            category: Some("toys".to_string()),
        };
        assert_eq!(Dimension::Category.product_key(&record), Some("toys"));
        assert_eq!(Dimension::Status.product_key(&record), None);
    }
}
