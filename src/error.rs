use std::path::PathBuf;

use thiserror::Error;

/// Failures the dashboard can surface to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// Source file missing, unreadable, or malformed. Fatal for the session.
    #[error("Data unavailable ({path}): {reason}")]
    DataUnavailable { path: PathBuf, reason: String },

    /// A column required by a transform or render step is absent.
    #[error("Schema mismatch: column '{column}' not found")]
    SchemaMismatch { column: String },
}

impl DashboardError {
    pub fn missing_column(column: &str) -> Self {
        DashboardError::SchemaMismatch {
            column: column.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
