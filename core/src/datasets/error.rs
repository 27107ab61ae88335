//! Error types for dataset loading

use std::path::PathBuf;

use datafusion::error::DataFusionError;
use thiserror::Error;

/// Errors while loading the startup datasets. All of these are fatal:
/// the dashboard cannot render without its source tables.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("missing dataset file {path}")]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to register dataset {path}")]
    Register {
        path: PathBuf,
        #[source]
        source: DataFusionError,
    },

    #[error("query against the {table} table failed")]
    Query {
        table: &'static str,
        #[source]
        source: DataFusionError,
    },

    #[error("bad column in the {table} table: {message}")]
    Column {
        table: &'static str,
        message: String,
    },

    #[error("invalid playoff tier {value} in the {table} table")]
    InvalidTier { table: &'static str, value: i64 },

    #[error("unrecognized season result '{value}'")]
    InvalidResult { value: String },

    #[error("failed to parse team lookup {path}")]
    ParseLookup {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
