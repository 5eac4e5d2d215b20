use std::collections::BTreeSet;

use super::domain::AssessmentRequest;

pub const MIN_CRITERION_SCORE: i32 = 1;
pub const MAX_CRITERION_SCORE: i32 = 5;

/// Reasons a submission is rejected before it reaches the scoring engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssessmentViolation {
    #[error("assessment contains no dimensions")]
    NoDimensions,
    #[error("criterion {criterion_id} scored {score}, expected 1-5")]
    ScoreOutOfRange { criterion_id: String, score: i32 },
    #[error("criterion {0} submitted more than once")]
    DuplicateCriterion(String),
    #[error("dimension {0} submitted more than once")]
    DuplicateDimension(String),
    #[error("weight for dimension {dimension_id} must be a finite, non-negative number (found {weight})")]
    InvalidWeight { dimension_id: String, weight: f64 },
}

/// Boundary validation for assessment submissions.
///
/// Ids are compared case-insensitively, so `D1` and `d1` count as the same dimension.
/// Unknown dimension ids are accepted; they score normally and receive an empty advisory.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard;

impl SubmissionGuard {
    pub fn validate(&self, request: &AssessmentRequest) -> Result<(), AssessmentViolation> {
        if request.dimensions.is_empty() {
            return Err(AssessmentViolation::NoDimensions);
        }

        let mut dimension_ids = BTreeSet::new();
        let mut criterion_ids = BTreeSet::new();

        for dimension in &request.dimensions {
            if !dimension_ids.insert(normalize_id(&dimension.dimension_id)) {
                return Err(AssessmentViolation::DuplicateDimension(
                    dimension.dimension_id.clone(),
                ));
            }

            for criterion in &dimension.criteria_scores {
                if !criterion_ids.insert(normalize_id(&criterion.criterion_id)) {
                    return Err(AssessmentViolation::DuplicateCriterion(
                        criterion.criterion_id.clone(),
                    ));
                }

                if let Some(score) = criterion.counted_score() {
                    if !(MIN_CRITERION_SCORE..=MAX_CRITERION_SCORE).contains(&score) {
                        return Err(AssessmentViolation::ScoreOutOfRange {
                            criterion_id: criterion.criterion_id.clone(),
                            score,
                        });
                    }
                }
            }
        }

        if let Some(weights) = &request.weights {
            if let Some((dimension_id, weight)) = weights
                .iter()
                .find(|(_, weight)| !weight.is_finite() || **weight < 0.0)
            {
                return Err(AssessmentViolation::InvalidWeight {
                    dimension_id: dimension_id.clone(),
                    weight: *weight,
                });
            }
        }

        Ok(())
    }
}

fn normalize_id(id: &str) -> String {
    id.trim().to_ascii_uppercase()
}
