//! Governance maturity scoring, gap analysis, and the catalogs behind them.
//!
//! The scoring and gap engines are pure: they take request-scoped values and return new
//! ones. The recommendation catalog, risk thresholds, framework, and benchmarks are built
//! once and shared read-only behind `Arc`.

pub mod benchmarks;
pub mod catalog;
pub mod domain;
pub mod framework;
pub mod gaps;
pub mod guard;
pub mod risk;
pub mod router;
pub mod sanitizer;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use benchmarks::{benchmark_for, BenchmarkLookup, IndustryBenchmark};
pub use catalog::RecommendationCatalog;
pub use domain::{
    AssessmentRequest, AssessmentResponse, CriterionScore, DimensionResult, GapItem,
    GapSeverity, MaturityLevel, ScopingData,
};
pub use framework::{AssessmentCompleteness, DimensionDefinition, GovernanceFramework};
pub use gaps::{analyze_gaps, GapAnalyzer};
pub use guard::{AssessmentViolation, SubmissionGuard};
pub use risk::{RiskThresholds, DEFAULT_GAP_THRESHOLD};
pub use router::assessment_router;
pub use sanitizer::{sanitize_input, FieldWarning, InputWarning, SanitizedInput};
pub use scoring::{maturity_label, score_dimension, score_overall};
pub use service::{AssessmentError, AssessmentService};
