//! FILENAME: core/ingest/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{table}: missing required column '{column}'")]
    MissingColumn { table: &'static str, column: String },

    #[error("{0}: source has no header row")]
    EmptyTable(&'static str),
}
