//! Error types for the matching crate.

use ratings::DatasetError;
use thiserror::Error;

/// Errors that can occur while ranking users or selecting recommendations
#[derive(Error, Debug)]
pub enum MatchError {
    /// Dataset lookup failed (unknown user, etc.)
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// The dataset holds no user other than the target, so there is no
    /// best match to recommend from
    #[error("No other users to compare against")]
    NoPeers,

    /// The not-recommended list pools ratings from three ranked users and
    /// cannot be built with fewer
    #[error("Need at least 3 other users for the not-recommended list, found {found}")]
    NotEnoughPeers { found: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, MatchError>;
