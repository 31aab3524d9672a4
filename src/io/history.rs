// src/io/history.rs

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::model::{weeks_from_value, WeekRecord};

#[derive(Debug, Error)]
pub enum HistoryFileError {
    #[error("failed to read history file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("history file {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads a recorded game history from a JSON file: either a bare array of
/// week objects or the full request shape `{"weeks": [...]}` as the game
/// server sends it.
pub fn load_history(path: &Path) -> Result<Vec<WeekRecord>, HistoryFileError> {
    let text = fs::read_to_string(path).map_err(|source| HistoryFileError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|source| HistoryFileError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(weeks_from_value(&value))
}
