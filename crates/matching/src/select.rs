//! Selecting movies to recommend and to avoid.
//!
//! Both selectors drop movies the target has already rated and emit at most
//! five titles. All sorts are stable so list order is reproducible.

use crate::error::{MatchError, Result};
use crate::rank::{rank, ScoreEntry};
use crate::score::Metric;
use ratings::{MovieId, RatingDataset, UserId, UserRatings};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Movies emitted per list
const LIST_LEN: usize = 5;

/// Ranked users pooled for the not-recommended list
const POOL_SIZE: usize = 3;

/// Everything the CLI prints for one metric
#[derive(Debug)]
pub struct MetricReport {
    pub metric: Metric,
    pub best_match: UserId,
    pub recommended: Vec<MovieId>,
    pub not_recommended: Vec<MovieId>,
}

/// Rank all peers under `metric` and build both movie lists for the target.
#[instrument(skip(data))]
pub fn recommendations_for(
    data: &RatingDataset,
    target: &str,
    metric: Metric,
) -> Result<MetricReport> {
    let ranked = rank(data, target, metric)?;
    let best = ranked.first().ok_or(MatchError::NoPeers)?;

    debug!("Best {} match for {}: {} ({:.3})", metric, target, best.user, best.score);

    Ok(MetricReport {
        metric,
        best_match: best.user.clone(),
        recommended: recommended(data, target, &best.user)?,
        not_recommended: not_recommended(data, target, &ranked)?,
    })
}

/// Choose recommended movies: the matched user's highest-rated movies that
/// the target hasn't rated yet, best first.
pub fn recommended(data: &RatingDataset, target: &str, matched_user: &str) -> Result<Vec<MovieId>> {
    let target_movies = data.ratings_for(target)?;
    let matched_movies = data.ratings_for(matched_user)?;

    let mut by_rating: Vec<(&MovieId, f64)> =
        matched_movies.iter().map(|(movie, &r)| (movie, r)).collect();
    by_rating.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    Ok(by_rating
        .into_iter()
        .filter(|(movie, _)| !target_movies.contains_key(movie.as_str()))
        .take(LIST_LEN)
        .map(|(movie, _)| movie.clone())
        .collect())
}

/// Choose not-recommended movies: the lowest-rated movies in a pool built
/// from the top three ranked users, again minus the target's own movies.
///
/// The pool merges ranked[2], then ranked[1], then ranked[0]; a movie rated
/// by more than one of them keeps its first-seen position but takes the
/// rating from the later merge step. That overwrite discards information,
/// and is kept on purpose to reproduce the historical behavior exactly.
pub fn not_recommended(
    data: &RatingDataset,
    target: &str,
    ranked: &[ScoreEntry],
) -> Result<Vec<MovieId>> {
    if ranked.len() < POOL_SIZE {
        return Err(MatchError::NotEnoughPeers {
            found: ranked.len(),
        });
    }
    let target_movies = data.ratings_for(target)?;

    let mut pool: UserRatings = data.ratings_for(&ranked[2].user)?.clone();
    for entry in [&ranked[1], &ranked[0]] {
        for (movie, &rating) in data.ratings_for(&entry.user)? {
            pool.insert(movie.clone(), rating);
        }
    }

    let mut by_rating: Vec<(MovieId, f64)> = pool.into_iter().collect();
    by_rating.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    Ok(by_rating
        .into_iter()
        .filter(|(movie, _)| !target_movies.contains_key(movie.as_str()))
        .take(LIST_LEN)
        .map(|(movie, _)| movie)
        .collect())
}
