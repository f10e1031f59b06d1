use std::path::PathBuf;

use thiserror::Error;

use crate::app::domain::settings::SettingKey;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed settings file {}: {reason}", .path.display())]
    MalformedSettings { path: PathBuf, reason: String },

    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfRange {
        key: SettingKey,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Unknown language: {0:?}")]
    UnknownLanguage(String),

    #[error("No table found. Cannot save as CSV.")]
    NoTableFound,

    #[error("Highlight error: {0}")]
    Highlight(String),

    #[error("Viewer error: {0}")]
    Viewer(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
