//! # Ratings Crate
//!
//! This crate handles loading and indexing the ratings dataset: a JSON object
//! mapping users to the movies they rated and the rating they gave.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (RatingDataset, UserRatings)
//! - **loader**: Parse the ratings JSON file into a RatingDataset
//! - **error**: Error types for dataset access and loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use ratings::RatingDataset;
//! use std::path::Path;
//!
//! // Load the entire dataset
//! let dataset = RatingDataset::load_from_file(Path::new("ratings.json"))?;
//!
//! // Query data
//! let movies = dataset.ratings_for("Paweł Czapiewski")?;
//! println!("user rated {} movies", movies.len());
//! ```
//!
//! The dataset preserves the key order of the JSON file. Every iteration
//! (users, peers, a user's movies) follows that order, which is what makes
//! the ranking and selection downstream deterministic.

// Public modules
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DatasetError, Result};
pub use types::{MovieId, RatingDataset, UserId, UserRatings};
