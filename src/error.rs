// src/error.rs

use crate::day_filter::DayFilter;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a picker run can end early.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Directory {} does not exist or is not a directory", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Failed to scan recordings directory: {0}")]
    Scan(#[from] walkdir::Error),

    #[error("'{name}' does not contain a valid ddMMyyyy-HHmmss timestamp (found '{token}')")]
    MalformedTimestamp { name: String, token: String },

    #[error("No recordings found {filter}.")]
    NoRecordings { filter: DayFilter },

    #[error("Selected entry '{0}' is not in the recording list")]
    UnknownSelection(String),

    #[error("Menu error: {0}")]
    Menu(#[from] dialoguer::Error),
}

impl PickerError {
    /// Process exit status for this error. An empty listing and a real
    /// failure both end the run with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            PickerError::NoRecordings { .. } => 1,
            _ => 1,
        }
    }

    /// True for the expected "nothing to show" outcome, as opposed to a failure.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, PickerError::NoRecordings { .. })
    }
}
