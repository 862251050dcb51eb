//! FILENAME: core/dashboard/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("unknown month: {0}")]
    UnknownMonth(String),

    #[error("unknown state: {0}")]
    UnknownState(String),

    #[error("order data contains no months to select")]
    NoMonths,
}
