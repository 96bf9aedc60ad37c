use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::catalog::{
    AnswerOption, Question, QuestionCatalog, QuestionFormat, Section,
};
use crate::assessment::domain::{Answer, ResponseSet, SdgId};
use crate::assessment::recommendations::RecommendationLibrary;
use crate::assessment::rules::ScoringRules;
use crate::assessment::scoring::AssessmentEngine;
use crate::assessment::service::AssessmentService;

pub(super) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn standard_service() -> AssessmentService {
    AssessmentService::standard()
}

pub(super) fn service_with(catalog: QuestionCatalog, rules: ScoringRules) -> AssessmentService {
    AssessmentService::new(
        Arc::new(AssessmentEngine::new(catalog, rules)),
        Arc::new(RecommendationLibrary::standard()),
    )
}

/// The answer worth the most points for a question.
pub(super) fn top_answer(question: &Question) -> Answer {
    match &question.format {
        QuestionFormat::SingleChoice => {
            let best = question
                .scorable_options()
                .max_by(|a, b| a.points.total_cmp(&b.points))
                .expect("question has a scorable option");
            Answer::Single(best.label.to_string())
        }
        QuestionFormat::MultiChoice { .. } => Answer::Multiple(
            question
                .scorable_options()
                .map(|option| option.label.to_string())
                .collect(),
        ),
    }
}

pub(super) fn top_answers_for(catalog: &QuestionCatalog, sdgs: &[u8]) -> ResponseSet {
    catalog
        .questions()
        .filter(|question| sdgs.contains(&question.sdg.0))
        .map(|question| (question.id.to_string(), top_answer(question)))
        .collect()
}

pub(super) fn first_labels(catalog: &QuestionCatalog, question_id: &str, count: usize) -> Answer {
    let question = catalog.question(question_id).expect("question exists");
    Answer::Multiple(
        question
            .options
            .iter()
            .take(count)
            .map(|option| option.label.to_string())
            .collect(),
    )
}

/// Mixed project touching every section with a spread of answers.
pub(super) fn mixed_responses(catalog: &QuestionCatalog) -> ResponseSet {
    catalog
        .questions()
        .enumerate()
        .map(|(index, question)| {
            let scorable: Vec<&AnswerOption> = question.scorable_options().collect();
            let answer = match &question.format {
                QuestionFormat::SingleChoice => {
                    Answer::Single(scorable[index % scorable.len()].label.to_string())
                }
                QuestionFormat::MultiChoice { .. } => Answer::Multiple(
                    scorable
                        .iter()
                        .take(index % scorable.len() + 1)
                        .map(|option| option.label.to_string())
                        .collect(),
                ),
            };
            (question.id.to_string(), answer)
        })
        .collect()
}

/// One-question catalog whose weight makes every total non-finite.
pub(super) fn nan_weight_catalog() -> QuestionCatalog {
    QuestionCatalog::new(vec![Section {
        title: "Broken",
        questions: vec![Question {
            id: "nan",
            sdg: SdgId(4),
            text: "Weighted by an invalid number",
            format: QuestionFormat::SingleChoice,
            weight: f64::NAN,
            options: vec![AnswerOption {
                label: "Yes",
                points: 1.0,
            }],
        }],
    }])
    .expect("catalog validates")
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

pub(super) async fn text_body(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    String::from_utf8(bytes.to_vec()).expect("body is UTF-8")
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status");
}
