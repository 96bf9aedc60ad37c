use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::assessment::domain::{ResponseSet, SdgId};
use crate::assessment::router::{assess_handler, assessment_router};
use crate::assessment::rules::ScoringRules;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn assessment_route_returns_the_report() {
    let router = assessment_router(Arc::new(standard_service()));

    let response = router
        .oneshot(post_json(
            "/api/v1/assessments",
            json!({
                "q13": "Net-positive energy building",
                "q14": [
                    "Passive design for power outages",
                    "Systems reducing operational costs",
                    "Distributed energy resources for grid reliability",
                    "Energy monitoring and smart systems",
                    "Features ensuring equitable energy access"
                ]
            }),
        ))
        .await
        .unwrap();

    assert_status(&response, StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["overall_score"], 0.8);
    assert_eq!(body["sdg_scores"].as_array().map(Vec::len), Some(17));
    assert_eq!(body["strengths"][0]["sdg_id"], 7);
}

#[tokio::test]
async fn empty_submissions_are_unprocessable() {
    let router = assessment_router(Arc::new(standard_service()));

    let response = router
        .oneshot(post_json("/api/v1/assessments", json!({})))
        .await
        .unwrap();

    assert_status(&response, StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["code"], "invalid_input");
    assert_eq!(body["details"][0], "No responses provided");
}

#[tokio::test]
async fn handler_reports_computation_failures_as_server_errors() {
    let service = Arc::new(service_with(nan_weight_catalog(), ScoringRules::standard()));
    let responses = ResponseSet::new().with("nan", "Yes");

    let response = assess_handler(State(service), axum::Json(responses)).await;

    assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["code"], "computation_error");
}

#[tokio::test]
async fn csv_route_streams_the_score_table() {
    let router = assessment_router(Arc::new(standard_service()));

    let response = router
        .oneshot(post_json(
            "/api/v1/assessments/csv",
            json!({ "q13": "Basic energy code compliance" }),
        ))
        .await
        .unwrap();

    assert_status(&response, StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );
    let body = text_body(response).await;
    assert_eq!(body.lines().count(), 18);
    assert!(body.starts_with("sdg_id,name,"));
}

#[tokio::test]
async fn sdg_listing_includes_all_goals() {
    let router = assessment_router(Arc::new(standard_service()));

    let response = router
        .oneshot(Request::get("/api/v1/sdgs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_status(&response, StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(17));
    assert_eq!(body[6]["name"], "Affordable Energy");
    assert_eq!(body[6]["category"], "Prosperity");
}

#[tokio::test]
async fn questions_can_be_filtered_by_goal() {
    let service = Arc::new(standard_service());
    let expected = service.engine().catalog().questions_for_sdg(SdgId(12)).len();
    let router = assessment_router(service);

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/questions?sdg=12")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_status(&response, StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(expected));
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|question| question["sdg"] == 12));

    let response = router
        .oneshot(Request::get("/api/v1/questions").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(7));
}

#[tokio::test]
async fn recommendations_route_rejects_unknown_goals() {
    let router = assessment_router(Arc::new(standard_service()));

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/sdgs/6/recommendations")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_status(&response, StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["sdg"], 6);
    assert!(!body["design"].as_array().unwrap().is_empty());

    let response = router
        .oneshot(
            Request::get("/api/v1/sdgs/42/recommendations")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_status(&response, StatusCode::NOT_FOUND);
}
