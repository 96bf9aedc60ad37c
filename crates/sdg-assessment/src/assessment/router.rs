use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ResponseSet, SdgId};
use super::report::to_csv;
use super::service::{AssessmentError, AssessmentService};

/// Router builder exposing the questionnaire, reference data, and scoring.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/questions", get(questions_handler))
        .route("/api/v1/sdgs", get(sdgs_handler))
        .route(
            "/api/v1/sdgs/:sdg_id/recommendations",
            get(recommendations_handler),
        )
        .route("/api/v1/assessments", post(assess_handler))
        .route("/api/v1/assessments/csv", post(assess_csv_handler))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionFilter {
    sdg: Option<u8>,
}

pub(crate) async fn questions_handler(
    State(service): State<Arc<AssessmentService>>,
    Query(filter): Query<QuestionFilter>,
) -> Response {
    let catalog = service.engine().catalog();
    match filter.sdg {
        Some(sdg) => {
            let questions = catalog.questions_for_sdg(SdgId(sdg));
            (StatusCode::OK, axum::Json(questions)).into_response()
        }
        None => (StatusCode::OK, axum::Json(catalog.sections())).into_response(),
    }
}

pub(crate) async fn sdgs_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    (StatusCode::OK, axum::Json(service.engine().rules().sdgs())).into_response()
}

pub(crate) async fn recommendations_handler(
    State(service): State<Arc<AssessmentService>>,
    Path(sdg_id): Path<u8>,
) -> Response {
    let sdg = SdgId(sdg_id);
    if !service.engine().rules().is_known(sdg) {
        let payload = json!({
            "error": format!("unknown SDG {sdg_id}"),
        });
        return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
    }

    let recommendations = service.library().for_sdg(sdg);
    (StatusCode::OK, axum::Json(recommendations)).into_response()
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(responses): axum::Json<ResponseSet>,
) -> Response {
    match service.assess(&responses) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(&error),
    }
}

pub(crate) async fn assess_csv_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(responses): axum::Json<ResponseSet>,
) -> Response {
    let report = match service.assess(&responses) {
        Ok(report) => report,
        Err(error) => return error_response(&error),
    };

    match to_csv(&report) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn error_response(error: &AssessmentError) -> Response {
    let status = match error {
        AssessmentError::InvalidInput { .. } | AssessmentError::NoResults => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AssessmentError::Computation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, axum::Json(error.report())).into_response()
}
