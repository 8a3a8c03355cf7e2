//! Error types for the ratings crate.

use thiserror::Error;

/// Errors that can occur while loading or indexing the ratings dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Ratings file could not be read
    #[error("Failed to read ratings file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Ratings file is not the expected users -> movies -> rating JSON object
    #[error("Malformed ratings file {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Target user is not present in the dataset
    #[error("Unknown user: {user}")]
    UnknownUser { user: String },

    /// A rating value failed validation (non-finite)
    #[error("Invalid rating {value} for movie {movie:?} of user {user:?}")]
    InvalidValue {
        user: String,
        movie: String,
        value: f64,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DatasetError>;
