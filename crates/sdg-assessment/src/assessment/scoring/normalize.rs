use super::super::catalog::QuestionCatalog;
use super::super::domain::SdgId;
use super::super::rules::ScoringRules;
use super::{round_to, ScoringError};
use std::collections::BTreeMap;

const DIRECT_SCALE: f64 = 10.0;

/// Theoretical maximum raw total per SDG, ignoring "not applicable" options.
pub(crate) fn max_scores(
    catalog: &QuestionCatalog,
    rules: &ScoringRules,
) -> Result<BTreeMap<SdgId, f64>, ScoringError> {
    let mut maxima = BTreeMap::new();

    for question in catalog.questions() {
        if !rules.is_known(question.sdg) {
            return Err(ScoringError::UnknownQuestionSdg {
                question: question.id.to_string(),
                sdg: question.sdg.0,
            });
        }
        *maxima.entry(question.sdg).or_insert(0.0) += question.max_points() * question.weight;
    }

    Ok(maxima)
}

/// Direct score on the 0-10 scale for every SDG the rules define.
pub(crate) fn direct_scores(
    rules: &ScoringRules,
    raw: &BTreeMap<SdgId, f64>,
    max: &BTreeMap<SdgId, f64>,
) -> Result<BTreeMap<SdgId, f64>, ScoringError> {
    let mut direct = BTreeMap::new();

    for record in rules.sdgs() {
        let earned = raw.get(&record.id).copied().unwrap_or(0.0);
        let possible = max.get(&record.id).copied().unwrap_or(0.0);

        let score = if possible > 0.0 {
            round_to((earned / possible) * DIRECT_SCALE, 2)
        } else {
            0.0
        };

        if !(earned.is_finite() && possible.is_finite() && score.is_finite()) {
            return Err(ScoringError::NonFiniteScore {
                sdg: record.id,
                stage: "direct",
            });
        }

        direct.insert(record.id, score.clamp(0.0, DIRECT_SCALE));
    }

    Ok(direct)
}
