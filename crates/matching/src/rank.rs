//! Ranking every other user by similarity to the target.

use crate::error::Result;
use crate::score::Metric;
use ratings::{RatingDataset, UserId};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// One user's similarity to the target; never mutated after creation
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub user: UserId,
    pub score: f64,
}

impl ScoreEntry {
    pub fn new(user: impl Into<UserId>, score: f64) -> Self {
        Self {
            user: user.into(),
            score,
        }
    }
}

/// Score the target against every other user and sort descending.
///
/// Each peer is scored exactly once, in dataset order. The sort is stable,
/// so equal scores keep that order — reruns on the same file produce the
/// same ranking.
#[instrument(skip(data))]
pub fn rank(data: &RatingDataset, target: &str, metric: Metric) -> Result<Vec<ScoreEntry>> {
    // Fail on an unknown target even when the dataset has no peers
    data.ratings_for(target)?;

    let mut entries = Vec::new();
    for peer in data.peers(target) {
        let score = metric.score(data, target, peer)?;
        entries.push(ScoreEntry::new(peer, score));
    }

    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    debug!("Ranked {} peers for {} by {}", entries.len(), target, metric);
    Ok(entries)
}
