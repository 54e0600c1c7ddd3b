//! Error types for the review analytics library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not valid CSV (or not UTF-8, or has no header row)
    #[error("Failed to parse CSV: {0}")]
    Parse(String),

    /// A required column is missing from the uploaded table
    #[error("The uploaded CSV file does not contain a '{column}' column.")]
    Schema { column: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Column lengths that no longer line up with the table
    #[error("Table shape mismatch: {0}")]
    Shape(String),

    /// Chart or word cloud rendering failed
    #[error("Rendering failed: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Errors caused by the user's input rather than the environment
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::Parse(_) | Error::Schema { .. } | Error::Config(_)
        )
    }

    /// Shortcut for a missing column
    pub fn missing_column(column: impl Into<String>) -> Self {
        Error::Schema {
            column: column.into(),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            let message = err.to_string();
            return match err.into_kind() {
                csv::ErrorKind::Io(io) => Error::Io(io),
                _ => Error::Parse(message),
            };
        }
        Error::Parse(err.to_string())
    }
}
