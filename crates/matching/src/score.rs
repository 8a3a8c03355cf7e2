//! Similarity scoring between two users.
//!
//! Both metrics look only at the movies the two users have in common. Two
//! users with no overlap get a neutral score of 0 rather than an error, so
//! they simply sink to the bottom of the ranking.

use crate::error::Result;
use ratings::RatingDataset;
use std::fmt;

/// The similarity metric used to compare two users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// `1 / (1 + sqrt(sum of squared rating differences))`, in (0, 1]
    Euclidean,
    /// Sample correlation of the common ratings, in [-1, 1], 0 when undefined
    Pearson,
}

impl Metric {
    /// Compute the similarity between `a` and `b` under this metric.
    ///
    /// Pure function over the dataset; fails only if either user is unknown.
    pub fn score(self, data: &RatingDataset, a: &str, b: &str) -> Result<f64> {
        match self {
            Metric::Euclidean => euclidean_score(data, a, b),
            Metric::Pearson => pearson_score(data, a, b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Euclidean => write!(f, "Euclidean"),
            Metric::Pearson => write!(f, "Pearson"),
        }
    }
}

/// Rating pairs for the movies both users rated, in `a`'s dataset order
fn common_ratings(data: &RatingDataset, a: &str, b: &str) -> Result<Vec<(f64, f64)>> {
    let a_ratings = data.ratings_for(a)?;
    let b_ratings = data.ratings_for(b)?;

    Ok(a_ratings
        .iter()
        .filter_map(|(movie, &ra)| b_ratings.get(movie).map(|&rb| (ra, rb)))
        .collect())
}

/// Compute the Euclidean distance score between `a` and `b`
pub fn euclidean_score(data: &RatingDataset, a: &str, b: &str) -> Result<f64> {
    let common = common_ratings(data, a, b)?;
    if common.is_empty() {
        return Ok(0.0);
    }

    let squared_diff: f64 = common.iter().map(|(ra, rb)| (ra - rb).powi(2)).sum();

    Ok(1.0 / (1.0 + squared_diff.sqrt()))
}

/// Compute the Pearson correlation score between `a` and `b`
pub fn pearson_score(data: &RatingDataset, a: &str, b: &str) -> Result<f64> {
    let common = common_ratings(data, a, b)?;
    if common.is_empty() {
        return Ok(0.0);
    }

    let n = common.len() as f64;

    let sum_a: f64 = common.iter().map(|(ra, _)| ra).sum();
    let sum_b: f64 = common.iter().map(|(_, rb)| rb).sum();

    let squared_sum_a: f64 = common.iter().map(|(ra, _)| ra * ra).sum();
    let squared_sum_b: f64 = common.iter().map(|(_, rb)| rb * rb).sum();

    let sum_of_products: f64 = common.iter().map(|(ra, rb)| ra * rb).sum();

    let sxy = sum_of_products - sum_a * sum_b / n;
    let sxx = squared_sum_a - sum_a * sum_a / n;
    let syy = squared_sum_b - sum_b * sum_b / n;

    // Zero variance on either side leaves the correlation undefined
    if sxx * syy == 0.0 {
        return Ok(0.0);
    }

    Ok(sxy / (sxx * syy).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratings::DatasetError;

    fn create_test_dataset() -> RatingDataset {
        let mut data = RatingDataset::new();
        // Target user
        data.insert_rating("A", "m1", 5.0);
        data.insert_rating("A", "m2", 3.0);
        // Close to A
        data.insert_rating("B", "m1", 4.0);
        data.insert_rating("B", "m2", 4.0);
        // Far from A
        data.insert_rating("C", "m1", 1.0);
        data.insert_rating("C", "m2", 1.0);
        // No overlap with anyone
        data.insert_rating("D", "m9", 5.0);
        data
    }

    #[test]
    fn test_euclidean_known_value() {
        let data = create_test_dataset();
        // Differences are 1 and -1: 1 / (1 + sqrt(2))
        let score = euclidean_score(&data, "A", "B").unwrap();
        assert!((score - 1.0 / (1.0 + 2.0_f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn test_euclidean_identical_users_score_one() {
        let mut data = create_test_dataset();
        data.insert_rating("A2", "m1", 5.0);
        data.insert_rating("A2", "m2", 3.0);

        let score = euclidean_score(&data, "A", "A2").unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_no_common_movies_scores_zero() {
        let data = create_test_dataset();
        assert_eq!(euclidean_score(&data, "A", "D").unwrap(), 0.0);
        assert_eq!(pearson_score(&data, "A", "D").unwrap(), 0.0);
    }

    #[test]
    fn test_scores_are_symmetric() {
        let data = create_test_dataset();
        for metric in [Metric::Euclidean, Metric::Pearson] {
            let ab = metric.score(&data, "A", "B").unwrap();
            let ba = metric.score(&data, "B", "A").unwrap();
            assert_eq!(ab, ba, "{metric} score not symmetric");
        }
    }

    #[test]
    fn test_pearson_perfect_correlation() {
        let mut data = RatingDataset::new();
        for (movie, ra, rb) in [("m1", 1.0, 2.0), ("m2", 2.0, 4.0), ("m3", 3.0, 6.0)] {
            data.insert_rating("A", movie, ra);
            data.insert_rating("B", movie, rb);
        }

        let score = pearson_score(&data, "A", "B").unwrap();
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_perfect_anticorrelation() {
        let mut data = RatingDataset::new();
        for (movie, ra, rb) in [("m1", 1.0, 6.0), ("m2", 2.0, 4.0), ("m3", 3.0, 2.0)] {
            data.insert_rating("A", movie, ra);
            data.insert_rating("B", movie, rb);
        }

        let score = pearson_score(&data, "A", "B").unwrap();
        assert!((score + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_zero_variance_scores_zero() {
        let data = create_test_dataset();
        // B rated everything 4.0, so their variance term is zero
        assert_eq!(pearson_score(&data, "A", "B").unwrap(), 0.0);
        // C rated everything 1.0
        assert_eq!(pearson_score(&data, "A", "C").unwrap(), 0.0);
    }

    #[test]
    fn test_unknown_user_errors() {
        let data = create_test_dataset();
        let err = euclidean_score(&data, "A", "Ghost").unwrap_err();
        assert!(matches!(
            err,
            crate::MatchError::Dataset(DatasetError::UnknownUser { .. })
        ));
    }
}
