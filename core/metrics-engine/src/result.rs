//! FILENAME: core/metrics-engine/src/result.rs
//! Aggregate results - the ordered key/count output contract.
//!
//! These structures are what the rendering layer consumes, so their
//! shape (including entry order and serialized field names) is part of
//! the external contract, not an implementation detail.

use serde::{Deserialize, Serialize};

/// One key and its row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateEntry {
    pub key: String,
    pub count: u64,
}

impl AggregateEntry {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        AggregateEntry {
            key: key.into(),
            count,
        }
    }
}

/// Ordered key/count sequence plus the tally of rows whose key was
/// absent under a non-bucketing dimension.
///
/// Invariants:
/// - keys are unique;
/// - entry order is part of each view's contract (key-ascending, or
///   count-descending with key-ascending tie-break), never incidental;
/// - for untruncated results, entry counts plus `missing_keys` sum to
///   the number of rows that passed the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub entries: Vec<AggregateEntry>,
    pub missing_keys: u64,
}

impl AggregateResult {
    /// Rows accounted for: entry counts plus the missing-key tally.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum::<u64>() + self.missing_keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for a key, if present.
    pub fn count_of(&self, key: &str) -> Option<u64> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.count)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_includes_missing() {
        let result = AggregateResult {
            entries: vec![AggregateEntry::new("a", 3), AggregateEntry::new("b", 2)],
            missing_keys: 4,
        };
        assert_eq!(result.total(), 9);
    }

    #[test]
    fn test_count_of() {
        let result = AggregateResult {
            entries: vec![AggregateEntry::new("delivered", 7)],
            missing_keys: 0,
        };
        assert_eq!(result.count_of("delivered"), Some(7));
        assert_eq!(result.count_of("shipped"), None);
    }

    #[test]
    fn test_serialized_field_names_are_stable() {
        // The rendering layer reads these names; changing them is a
        // breaking change, not a refactor.
        let result = AggregateResult {
            entries: vec![AggregateEntry::new("delivered", 2)],
            missing_keys: 1,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["entries"][0]["key"], "delivered");
        assert_eq!(json["entries"][0]["count"], 2);
        assert_eq!(json["missing_keys"], 1);
    }
}
