use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::framework::AssessmentCompleteness;
use super::sanitizer::FieldWarning;

/// Rating for a single assessment criterion such as `D1.3`.
///
/// `score` is kept as a plain integer so out-of-range ratings survive deserialization and
/// can be rejected by the [`SubmissionGuard`](super::SubmissionGuard) with a useful message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion_id: String,
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub is_na: bool,
}

impl CriterionScore {
    pub fn rated(criterion_id: impl Into<String>, score: i32) -> Self {
        Self {
            criterion_id: criterion_id.into(),
            score: Some(score),
            is_na: false,
        }
    }

    pub fn not_applicable(criterion_id: impl Into<String>) -> Self {
        Self {
            criterion_id: criterion_id.into(),
            score: None,
            is_na: true,
        }
    }

    pub fn unrated(criterion_id: impl Into<String>) -> Self {
        Self {
            criterion_id: criterion_id.into(),
            score: None,
            is_na: false,
        }
    }

    /// Score that participates in aggregation, if any.
    pub fn counted_score(&self) -> Option<i32> {
        if self.is_na {
            None
        } else {
            self.score
        }
    }
}

/// Aggregate over one governance dimension.
///
/// `dim_score`, `num_rated` and `num_na` are derived by [`score_dimension`](super::score_dimension);
/// values supplied by callers are ignored and overwritten in the returned copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionResult {
    pub dimension_id: String,
    pub dimension_name: String,
    pub criteria_scores: Vec<CriterionScore>,
    #[serde(default)]
    pub dim_score: Option<f64>,
    #[serde(default)]
    pub num_rated: usize,
    #[serde(default)]
    pub num_na: usize,
}

impl DimensionResult {
    pub fn new(
        dimension_id: impl Into<String>,
        dimension_name: impl Into<String>,
        criteria_scores: Vec<CriterionScore>,
    ) -> Self {
        Self {
            dimension_id: dimension_id.into(),
            dimension_name: dimension_name.into(),
            criteria_scores,
            dim_score: None,
            num_rated: 0,
            num_na: 0,
        }
    }
}

/// Qualitative bucket derived from the distance between a dimension score and its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapSeverity {
    Critical,
    Significant,
    Moderate,
}

impl GapSeverity {
    pub const fn ordered() -> [Self; 3] {
        [Self::Critical, Self::Significant, Self::Moderate]
    }

    /// Classify a strictly positive gap value, top-down.
    pub fn from_gap(gap_value: f64) -> Self {
        if gap_value >= 2.0 {
            Self::Critical
        } else if gap_value >= 1.0 {
            Self::Significant
        } else {
            Self::Moderate
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Significant => "significant",
            Self::Moderate => "moderate",
        }
    }
}

impl fmt::Display for GapSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One governance weakness identified by a gap analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapItem {
    pub dimension_id: String,
    pub dimension_name: String,
    pub dim_score: f64,
    pub gap_severity: GapSeverity,
    pub priority_rank: usize,
    pub recommendation: String,
}

/// CMMI-style maturity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    Initial,
    Managed,
    Defined,
    Measured,
    Optimizing,
}

impl MaturityLevel {
    /// Threshold ladder, highest first. The final rung is the catch-all.
    pub const LADDER: [(f64, Self); 5] = [
        (4.5, Self::Optimizing),
        (3.5, Self::Measured),
        (2.5, Self::Defined),
        (1.5, Self::Managed),
        (0.0, Self::Initial),
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Managed => "Managed",
            Self::Defined => "Defined",
            Self::Measured => "Measured",
            Self::Optimizing => "Optimizing",
        }
    }

    pub const fn level(self) -> u8 {
        match self {
            Self::Initial => 1,
            Self::Managed => 2,
            Self::Defined => 3,
            Self::Measured => 4,
            Self::Optimizing => 5,
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn default_risk_category() -> String {
    "high-risk".to_string()
}

fn default_deployment_status() -> String {
    "production".to_string()
}

fn default_governance_officer() -> String {
    "no".to_string()
}

fn default_num_ai_systems() -> String {
    "1".to_string()
}

/// Scoping answers captured before the criterion ratings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopingData {
    pub system_name: String,
    #[serde(default = "default_risk_category")]
    pub risk_category: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub organization_size: String,
    #[serde(default = "default_deployment_status")]
    pub deployment_status: String,
    #[serde(default = "default_governance_officer")]
    pub has_governance_officer: String,
    #[serde(default)]
    pub existing_frameworks: String,
    #[serde(default = "default_num_ai_systems")]
    pub num_ai_systems: String,
}

impl ScopingData {
    pub fn new(system_name: impl Into<String>) -> Self {
        Self {
            system_name: system_name.into(),
            risk_category: default_risk_category(),
            industry: String::new(),
            organization_size: String::new(),
            deployment_status: default_deployment_status(),
            has_governance_officer: default_governance_officer(),
            existing_frameworks: String::new(),
            num_ai_systems: default_num_ai_systems(),
        }
    }
}

/// Full assessment submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub scoping: ScopingData,
    pub dimensions: Vec<DimensionResult>,
    #[serde(default)]
    pub weights: Option<BTreeMap<String, f64>>,
}

/// Scored assessment with ranked gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub scoping: ScopingData,
    pub dimensions: Vec<DimensionResult>,
    pub overall_score: f64,
    pub maturity_label: String,
    pub maturity_level: u8,
    pub gaps: Vec<GapItem>,
    pub completeness: AssessmentCompleteness,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_warnings: Vec<FieldWarning>,
}
