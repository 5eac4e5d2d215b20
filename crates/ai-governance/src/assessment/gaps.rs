use std::sync::Arc;

use tracing::debug;

use super::catalog::RecommendationCatalog;
use super::domain::{DimensionResult, GapItem, GapSeverity};
use super::risk::{RiskThresholds, DEFAULT_GAP_THRESHOLD};

/// Stateless gap detector sharing the recommendation catalog and threshold table.
#[derive(Debug, Clone)]
pub struct GapAnalyzer {
    catalog: Arc<RecommendationCatalog>,
    thresholds: Arc<RiskThresholds>,
    default_threshold: f64,
}

impl GapAnalyzer {
    pub fn new(
        catalog: Arc<RecommendationCatalog>,
        thresholds: Arc<RiskThresholds>,
        default_threshold: f64,
    ) -> Self {
        Self {
            catalog,
            thresholds,
            default_threshold,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            Arc::new(RecommendationCatalog::standard()),
            Arc::new(RiskThresholds::standard()),
            DEFAULT_GAP_THRESHOLD,
        )
    }

    pub fn with_default_threshold(mut self, default_threshold: f64) -> Self {
        self.default_threshold = default_threshold;
        self
    }

    pub fn catalog(&self) -> &RecommendationCatalog {
        &self.catalog
    }

    pub fn default_threshold(&self) -> f64 {
        self.default_threshold
    }

    pub fn threshold_for(&self, risk_category: Option<&str>) -> f64 {
        if let Some(category) = risk_category {
            if self.thresholds.get(category).is_none() {
                debug!(
                    risk_category = category,
                    default_threshold = self.default_threshold,
                    "unrecognized risk category, using default gap threshold"
                );
            }
        }
        self.thresholds
            .resolve(risk_category, self.default_threshold)
    }

    /// Rank every scored dimension that falls below the resolved threshold, worst first.
    ///
    /// Ties keep their input order. Unscored dimensions and dimensions at or above the
    /// threshold never produce an entry.
    pub fn analyze(
        &self,
        dimensions: &[DimensionResult],
        risk_category: Option<&str>,
    ) -> Vec<GapItem> {
        let threshold = self.threshold_for(risk_category);

        let mut gaps: Vec<GapItem> = dimensions
            .iter()
            .filter_map(|dimension| {
                let dim_score = dimension.dim_score?;
                if dim_score >= threshold {
                    return None;
                }

                let severity = GapSeverity::from_gap(threshold - dim_score);
                Some(GapItem {
                    dimension_id: dimension.dimension_id.clone(),
                    dimension_name: dimension.dimension_name.clone(),
                    dim_score,
                    gap_severity: severity,
                    priority_rank: 0,
                    recommendation: self
                        .catalog
                        .lookup(&dimension.dimension_id, severity)
                        .to_string(),
                })
            })
            .collect();

        // `sort_by` is stable, so equal scores keep submission order.
        gaps.sort_by(|left, right| left.dim_score.total_cmp(&right.dim_score));
        for (index, gap) in gaps.iter_mut().enumerate() {
            gap.priority_rank = index + 1;
        }

        gaps
    }
}

impl Default for GapAnalyzer {
    fn default() -> Self {
        Self::standard()
    }
}

/// Gap analysis against the standard catalog and risk table.
pub fn analyze_gaps(
    dimensions: &[DimensionResult],
    default_threshold: f64,
    risk_category: Option<&str>,
) -> Vec<GapItem> {
    GapAnalyzer::new(
        Arc::new(RecommendationCatalog::standard()),
        Arc::new(RiskThresholds::standard()),
        default_threshold,
    )
    .analyze(dimensions, risk_category)
}
