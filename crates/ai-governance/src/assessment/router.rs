use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::benchmarks::benchmark_for;
use super::domain::AssessmentRequest;
use super::service::{AssessmentError, AssessmentService};

/// Router exposing assessment scoring, the rubric, and industry benchmarks.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessments", post(assess_handler))
        .route("/api/v1/dimensions", get(dimensions_handler))
        .route("/api/v1/dimensions/:dimension_id", get(dimension_handler))
        .route(
            "/api/v1/dimensions/:dimension_id/criteria/:criterion_id",
            get(criterion_handler),
        )
        .route("/api/v1/benchmarks", get(benchmarks_handler))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BenchmarkQuery {
    #[serde(default)]
    pub(crate) industry: Option<String>,
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(request): Json<AssessmentRequest>,
) -> Response {
    match service.assess(request) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(AssessmentError::Rejected(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn dimensions_handler(
    State(service): State<Arc<AssessmentService>>,
) -> Response {
    (StatusCode::OK, Json(service.framework().dimensions())).into_response()
}

pub(crate) async fn dimension_handler(
    State(service): State<Arc<AssessmentService>>,
    Path(dimension_id): Path<String>,
) -> Response {
    match service.framework().dimension(&dimension_id) {
        Some(definition) => (StatusCode::OK, Json(definition)).into_response(),
        None => {
            let payload = json!({
                "error": format!("dimension {dimension_id} not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn criterion_handler(
    State(service): State<Arc<AssessmentService>>,
    Path((dimension_id, criterion_id)): Path<(String, String)>,
) -> Response {
    match service.framework().criterion(&dimension_id, &criterion_id) {
        Some((definition, criterion)) => {
            let payload = json!({
                "dimension_id": definition.id,
                "dimension_name": definition.name,
                "article": definition.article,
                "criterion_id": criterion,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        None => {
            let payload = json!({
                "error": format!("criterion {criterion_id} not found in dimension {dimension_id}"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn benchmarks_handler(Query(query): Query<BenchmarkQuery>) -> Response {
    let lookup = benchmark_for(query.industry.as_deref());
    (StatusCode::OK, Json(lookup)).into_response()
}
