use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{
    AssessmentRequest, CriterionScore, DimensionResult, ScopingData,
};
use crate::assessment::{assessment_router, score_dimension, AssessmentService};

pub(super) const DIMENSIONS: [(&str, &str); 6] = [
    ("D1", "Risk Management"),
    ("D2", "Data Governance"),
    ("D3", "Technical Documentation & Record-Keeping"),
    ("D4", "Transparency"),
    ("D5", "Human Oversight"),
    ("D6", "Accuracy, Robustness & Cybersecurity"),
];

pub(super) fn dimension_name(id: &str) -> &'static str {
    DIMENSIONS
        .iter()
        .find(|(dimension_id, _)| *dimension_id == id)
        .map(|(_, name)| *name)
        .unwrap_or("Custom Dimension")
}

/// Unscored dimension rated with `scores`, criteria numbered `{id}.1..`.
pub(super) fn dimension(id: &str, scores: &[i32]) -> DimensionResult {
    let criteria = scores
        .iter()
        .enumerate()
        .map(|(index, score)| CriterionScore::rated(format!("{id}.{}", index + 1), *score))
        .collect();
    DimensionResult::new(id, dimension_name(id), criteria)
}

/// Dimension carrying a precomputed score, as handed to the gap analyzer.
pub(super) fn scored(id: &str, score: f64) -> DimensionResult {
    let mut result = dimension(id, &[]);
    result.dim_score = Some(score);
    result
}

pub(super) fn full_rubric(score: i32) -> Vec<DimensionResult> {
    DIMENSIONS
        .iter()
        .map(|(id, _)| {
            let count = if *id == "D1" { 6 } else { 5 };
            dimension(id, &vec![score; count])
        })
        .collect()
}

pub(super) fn scored_rubric(score: i32) -> Vec<DimensionResult> {
    full_rubric(score).iter().map(score_dimension).collect()
}

pub(super) fn scoping(risk_category: &str) -> ScopingData {
    ScopingData {
        risk_category: risk_category.to_string(),
        industry: "financial".to_string(),
        organization_size: "large".to_string(),
        existing_frameworks: "ISO 27001".to_string(),
        ..ScopingData::new("Credit Scoring Engine")
    }
}

pub(super) fn request(risk_category: &str, dimensions: Vec<DimensionResult>) -> AssessmentRequest {
    AssessmentRequest {
        scoping: scoping(risk_category),
        dimensions,
        weights: None,
    }
}

/// Realistic mixed submission: strong documentation, weak oversight.
pub(super) fn mixed_request() -> AssessmentRequest {
    let mut dimensions = vec![
        dimension("D1", &[3, 3, 2, 3, 3, 3]),
        dimension("D2", &[4, 3, 3, 4, 3]),
        dimension("D3", &[4, 4, 5, 4, 4]),
        dimension("D4", &[2, 2, 3, 2, 2]),
        dimension("D5", &[1, 1, 1, 1, 1]),
        dimension("D6", &[3, 3, 3, 3, 3]),
    ];
    dimensions[1].criteria_scores.push(CriterionScore::not_applicable("D2.6"));
    request("high-risk", dimensions)
}

pub(super) fn service() -> Arc<AssessmentService> {
    Arc::new(AssessmentService::default())
}

pub(super) fn router() -> axum::Router {
    assessment_router(service())
}

pub(super) fn json_request(uri: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serializes")))
        .expect("request builds")
}

pub(super) async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}
