//! # Matching Crate
//!
//! This crate implements the similarity matching between users and the
//! selection of recommended movies.
//!
//! ## Components
//!
//! ### Scorer
//! Two interchangeable similarity metrics over the ratings two users share:
//! - **Euclidean**: inverse distance over common ratings, bounded to (0, 1]
//! - **Pearson**: linear correlation over common ratings, range [-1, 1]
//!
//! ### Ranker
//! Scores the target user against every other user and sorts descending.
//! Ties keep dataset order, so a run is fully deterministic.
//!
//! ### Selector
//! - Recommended: the best match's favourite movies the target hasn't seen
//! - Not recommended: the lowest-rated movies pooled from the top three
//!   matches, again minus what the target has already seen
//!
//! ## Example Usage
//!
//! ```ignore
//! use matching::{recommendations_for, Metric};
//!
//! let report = recommendations_for(&dataset, "Paweł Czapiewski", Metric::Euclidean)?;
//! for movie in &report.recommended {
//!     println!("{movie}");
//! }
//! ```

// Public modules
pub mod error;
pub mod rank;
pub mod score;
pub mod select;

// Re-export commonly used items
pub use error::{MatchError, Result};
pub use rank::{rank, ScoreEntry};
pub use score::{euclidean_score, pearson_score, Metric};
pub use select::{not_recommended, recommended, recommendations_for, MetricReport};
