//! Core domain types for the ratings dataset.

use crate::error::{DatasetError, Result};
use indexmap::IndexMap;
use serde::Deserialize;

// =============================================================================
// Type Aliases
// =============================================================================

/// Name of a user in the dataset
pub type UserId = String;

/// Title of a rated movie
pub type MovieId = String;

/// One user's ratings, keyed by movie title, in file order
pub type UserRatings = IndexMap<MovieId, f64>;

// =============================================================================
// RatingDataset - The Core In-Memory Store
// =============================================================================

/// All users and their ratings, loaded once and read-only afterwards.
///
/// Backed by an [`IndexMap`] so that iteration order is the insertion order
/// from the ratings file. The ranker breaks score ties by that order, so it
/// must not be disturbed after loading.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RatingDataset {
    users: IndexMap<UserId, UserRatings>,
}

impl RatingDataset {
    /// Creates a new, empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or overwrite) a single rating.
    ///
    /// Used by tests and by code that assembles a dataset by hand; the normal
    /// path is [`RatingDataset::load_from_file`].
    pub fn insert_rating(
        &mut self,
        user: impl Into<UserId>,
        movie: impl Into<MovieId>,
        rating: f64,
    ) {
        self.users
            .entry(user.into())
            .or_default()
            .insert(movie.into(), rating);
    }

    // Getters - these return references into the dataset, never copies

    /// Get a user's ratings, or `None` if the user is absent
    pub fn get(&self, user: &str) -> Option<&UserRatings> {
        self.users.get(user)
    }

    /// Get a user's ratings, failing with [`DatasetError::UnknownUser`]
    pub fn ratings_for(&self, user: &str) -> Result<&UserRatings> {
        self.users
            .get(user)
            .ok_or_else(|| DatasetError::UnknownUser {
                user: user.to_string(),
            })
    }

    pub fn contains_user(&self, user: &str) -> bool {
        self.users.contains_key(user)
    }

    /// All users, in file order
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    /// Every user except `target`, in file order.
    ///
    /// This is the comparison pool for ranking: a user is never compared
    /// against themselves.
    pub fn peers<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a str> {
        self.users().filter(move |user| *user != target)
    }

    /// Get counts for logging/validation: (users, total ratings)
    pub fn counts(&self) -> (usize, usize) {
        let total_ratings = self.users.values().map(|m| m.len()).sum();
        (self.users.len(), total_ratings)
    }

    /// Check that every rating is a finite number.
    ///
    /// A NaN rating would make the descending score sort meaningless, so the
    /// loader rejects it up front instead of letting it leak into the ranker.
    pub fn validate(&self) -> Result<()> {
        for (user, movies) in &self.users {
            for (movie, &rating) in movies {
                if !rating.is_finite() {
                    return Err(DatasetError::InvalidValue {
                        user: user.clone(),
                        movie: movie.clone(),
                        value: rating,
                    });
                }
            }
        }
        Ok(())
    }
}
