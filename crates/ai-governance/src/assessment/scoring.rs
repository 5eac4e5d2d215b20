use std::collections::BTreeMap;

use super::domain::{DimensionResult, MaturityLevel};

/// Weight assumed for a scored dimension missing from a caller's weight map.
pub const DEFAULT_DIMENSION_WEIGHT: f64 = 1.0 / 6.0;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Return a copy of `dimension` with `dim_score`, `num_rated` and `num_na` recomputed
/// from its criteria. N/A and unrated criteria never contribute to the mean.
pub fn score_dimension(dimension: &DimensionResult) -> DimensionResult {
    let rated: Vec<i32> = dimension
        .criteria_scores
        .iter()
        .filter_map(|criterion| criterion.counted_score())
        .collect();
    let num_na = dimension
        .criteria_scores
        .iter()
        .filter(|criterion| criterion.is_na)
        .count();

    let dim_score = if rated.is_empty() {
        None
    } else {
        let sum: i64 = rated.iter().map(|&score| i64::from(score)).sum();
        Some(round2(sum as f64 / rated.len() as f64))
    };

    DimensionResult {
        dim_score,
        num_rated: rated.len(),
        num_na,
        ..dimension.clone()
    }
}

/// Overall score across the scored dimensions.
///
/// Without weights this is the plain mean of the dimensions that have a score. With
/// weights, missing entries default to [`DEFAULT_DIMENSION_WEIGHT`] and the weighted sum is
/// normalized by the total weight; a zero total yields `0.0`.
pub fn score_overall(
    dimensions: &[DimensionResult],
    weights: Option<&BTreeMap<String, f64>>,
) -> f64 {
    let scored: Vec<(&str, f64)> = dimensions
        .iter()
        .filter_map(|dimension| {
            dimension
                .dim_score
                .map(|score| (dimension.dimension_id.as_str(), score))
        })
        .collect();

    if scored.is_empty() {
        return 0.0;
    }

    let Some(weights) = weights else {
        let sum: f64 = scored.iter().map(|(_, score)| score).sum();
        return round2(sum / scored.len() as f64);
    };

    let weight_of = |id: &str| {
        weights
            .get(id)
            .or_else(|| {
                weights
                    .iter()
                    .find(|(key, _)| key.trim().eq_ignore_ascii_case(id))
                    .map(|(_, weight)| weight)
            })
            .copied()
            .unwrap_or(DEFAULT_DIMENSION_WEIGHT)
    };

    let total_weight: f64 = scored.iter().map(|(id, _)| weight_of(id)).sum();
    if total_weight == 0.0 {
        return 0.0;
    }

    let weighted_sum: f64 = scored
        .iter()
        .map(|(id, score)| weight_of(id) * score)
        .sum();
    round2(weighted_sum / total_weight)
}

/// Map an overall score onto the maturity ladder. Every input lands on a rung.
pub fn maturity_label(score: f64) -> MaturityLevel {
    MaturityLevel::LADDER
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, level)| *level)
        .unwrap_or(MaturityLevel::Initial)
}
