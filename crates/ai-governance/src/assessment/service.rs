use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{AssessmentRequest, AssessmentResponse, DimensionResult, ScopingData};
use super::framework::GovernanceFramework;
use super::gaps::GapAnalyzer;
use super::guard::{AssessmentViolation, SubmissionGuard};
use super::sanitizer::{sanitize_input, FieldWarning};
use super::scoring::{maturity_label, score_dimension, score_overall};
use crate::config::AssessmentConfig;

/// Errors surfaced by the assessment facade.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Rejected(#[from] AssessmentViolation),
}

/// Facade composing the submission guard, scoring engine, and gap analyzer.
///
/// Holds no per-request state; one instance is shared across handlers.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    guard: SubmissionGuard,
    analyzer: GapAnalyzer,
    framework: Arc<GovernanceFramework>,
}

impl AssessmentService {
    pub fn new(analyzer: GapAnalyzer, framework: Arc<GovernanceFramework>) -> Self {
        Self {
            guard: SubmissionGuard,
            analyzer,
            framework,
        }
    }

    pub fn from_config(config: &AssessmentConfig) -> Self {
        Self::new(
            GapAnalyzer::standard().with_default_threshold(config.default_threshold),
            Arc::new(GovernanceFramework::standard()),
        )
    }

    pub fn framework(&self) -> &GovernanceFramework {
        &self.framework
    }

    pub fn analyzer(&self) -> &GapAnalyzer {
        &self.analyzer
    }

    pub fn assess(&self, request: AssessmentRequest) -> Result<AssessmentResponse, AssessmentError> {
        if let Err(violation) = self.guard.validate(&request) {
            warn!(%violation, system = %request.scoping.system_name, "assessment rejected");
            return Err(violation.into());
        }

        let AssessmentRequest {
            scoping,
            dimensions,
            weights,
        } = request;

        let (scoping, input_warnings) = sanitize_scoping(scoping);

        let dimensions: Vec<DimensionResult> = dimensions.iter().map(score_dimension).collect();
        let overall_score = score_overall(&dimensions, weights.as_ref());
        let maturity = maturity_label(overall_score);
        let gaps = self
            .analyzer
            .analyze(&dimensions, Some(scoping.risk_category.as_str()));
        let completeness = self.framework.completeness(&dimensions);

        info!(
            system = %scoping.system_name,
            risk_category = %scoping.risk_category,
            overall_score,
            maturity = %maturity,
            gaps = gaps.len(),
            complete = completeness.is_complete,
            "assessment scored"
        );

        Ok(AssessmentResponse {
            scoping,
            dimensions,
            overall_score,
            maturity_label: maturity.label().to_string(),
            maturity_level: maturity.level(),
            gaps,
            completeness,
            input_warnings,
        })
    }
}

impl Default for AssessmentService {
    fn default() -> Self {
        Self::new(
            GapAnalyzer::standard(),
            Arc::new(GovernanceFramework::standard()),
        )
    }
}

fn sanitize_scoping(scoping: ScopingData) -> (ScopingData, Vec<FieldWarning>) {
    let mut warnings = Vec::new();
    let mut clean = |field: &str, value: String| {
        let sanitized = sanitize_input(&value);
        warnings.extend(sanitized.warnings.into_iter().map(|warning| FieldWarning {
            field: field.to_string(),
            warning,
        }));
        sanitized.text
    };

    let scoping = ScopingData {
        system_name: clean("system_name", scoping.system_name),
        risk_category: scoping.risk_category,
        industry: clean("industry", scoping.industry),
        organization_size: scoping.organization_size,
        deployment_status: scoping.deployment_status,
        has_governance_officer: scoping.has_governance_officer,
        existing_frameworks: clean("existing_frameworks", scoping.existing_frameworks),
        num_ai_systems: scoping.num_ai_systems,
    };

    (scoping, warnings)
}
