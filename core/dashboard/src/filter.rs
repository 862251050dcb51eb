//! FILENAME: core/dashboard/src/filter.rs
//! Filter state - the one piece of mutable session state.

use records::OrderRecord;
use serde::{Deserialize, Serialize};

/// The applied filter: a required month plus an optional customer
/// state. A `None` state means "all states".
///
/// Only the dashboard session mutates this, and only through a
/// validated transition; the aggregation functions never touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub month: String,
    pub state: Option<String>,
}

impl FilterState {
    pub fn new(month: impl Into<String>, state: Option<String>) -> Self {
        FilterState {
            month: month.into(),
            state,
        }
    }

    /// Whether a derived order row falls inside this filter.
    pub fn matches(&self, record: &OrderRecord) -> bool {
        if record.order_month.as_deref() != Some(self.month.as_str()) {
            return false;
        }
        match &self.state {
            Some(state) => record.customer_state.as_deref() == Some(state.as_str()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(month: Option<&str>, state: Option<&str>) -> OrderRecord {
        OrderRecord {
            order_id: "o1".to_string(),
            status: "delivered".to_string(),
            customer_state: state.map(|s| s.to_string()),
            purchased: None,
            delivered: None,
            order_month: month.map(|m| m.to_string()),
            delivery_time: None,
        }
    }

    #[test]
    fn test_month_only_filter() {
        let filter = FilterState::new("2017-01", None);
        assert!(filter.matches(&order(Some("2017-01"), Some("SP"))));
        assert!(filter.matches(&order(Some("2017-01"), None)));
        assert!(!filter.matches(&order(Some("2017-02"), Some("SP"))));
        assert!(!filter.matches(&order(None, Some("SP"))));
    }

    #[test]
    fn test_month_and_state_filter() {
        let filter = FilterState::new("2017-01", Some("SP".to_string()));
        assert!(filter.matches(&order(Some("2017-01"), Some("SP"))));
        assert!(!filter.matches(&order(Some("2017-01"), Some("RJ"))));
        // A row without a state never matches a state filter.
        assert!(!filter.matches(&order(Some("2017-01"), None)));
    }
}
