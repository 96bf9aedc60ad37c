use super::super::catalog::{MultiChoiceScoring, Question, QuestionCatalog, QuestionFormat};
use super::super::domain::{Answer, ResponseSet, SdgId};
use super::super::rules::ScoringRules;
use super::ScoringError;
use std::collections::BTreeMap;
use tracing::debug;

pub(crate) fn raw_scores(
    catalog: &QuestionCatalog,
    rules: &ScoringRules,
    responses: &ResponseSet,
) -> Result<BTreeMap<SdgId, f64>, ScoringError> {
    let mut totals = BTreeMap::new();

    for (question_id, answer) in responses.iter() {
        let Some(question) = catalog.question(question_id) else {
            debug!(question_id, "ignoring answer for unknown question");
            continue;
        };
        if answer.is_empty() {
            continue;
        }
        if !rules.is_known(question.sdg) {
            return Err(ScoringError::UnknownQuestionSdg {
                question: question.id.to_string(),
                sdg: question.sdg.0,
            });
        }

        if let Some(points) = question_points(question, answer) {
            *totals.entry(question.sdg).or_insert(0.0) += points * question.weight;
        }
    }

    Ok(totals)
}

/// Unweighted points earned by one answer, or `None` when it cannot be scored.
pub(crate) fn question_points(question: &Question, answer: &Answer) -> Option<f64> {
    match (&question.format, answer) {
        (QuestionFormat::SingleChoice, Answer::Single(label)) => {
            question.option(label).map(|option| option.points)
        }
        (
            QuestionFormat::MultiChoice {
                scoring: MultiChoiceScoring::TieredByCount(tiers),
            },
            Answer::Multiple(labels),
        ) => Some(tiers.points_for(labels.len())),
        (
            QuestionFormat::MultiChoice {
                scoring: MultiChoiceScoring::LinearSum,
            },
            Answer::Multiple(labels),
        ) => {
            // Only recognised labels earn points.
            let selected: Vec<_> = question
                .options
                .iter()
                .filter(|option| labels.iter().any(|label| label == option.label))
                .collect();
            if selected.is_empty() {
                return None;
            }
            Some(selected.iter().map(|option| option.points).sum())
        }
        _ => {
            debug!(question_id = question.id, "answer shape does not match question format");
            None
        }
    }
}
