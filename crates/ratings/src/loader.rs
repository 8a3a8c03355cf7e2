//! Loader for the ratings JSON file.
//!
//! The file is a single JSON object:
//!
//! ```json
//! {
//!     "Some User": { "Movie Title": 7.5, "Another Movie": 4.0 },
//!     "Other User": { "Movie Title": 6.0 }
//! }
//! ```
//!
//! Key order in the file is preserved all the way into the dataset.

use crate::error::{DatasetError, Result};
use crate::types::RatingDataset;
use std::fs;
use std::path::Path;
use tracing::debug;

impl RatingDataset {
    /// Load and validate the ratings dataset from a JSON file.
    ///
    /// This is the main entry point for loading data. The dataset is read
    /// once at startup and never written back.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let dataset: RatingDataset =
            serde_json::from_str(&contents).map_err(|source| DatasetError::Malformed {
                path: path.display().to_string(),
                source,
            })?;

        dataset.validate()?;

        let (users, ratings) = dataset.counts();
        debug!("Loaded {} users with {} ratings from {:?}", users, ratings, path);

        Ok(dataset)
    }
}
