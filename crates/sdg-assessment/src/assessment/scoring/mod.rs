mod normalize;
mod raw;
mod synergy;

use super::catalog::QuestionCatalog;
use super::domain::{ResponseSet, SdgId};
use super::rules::ScoringRules;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

#[cfg(test)]
pub(crate) use synergy::{apply_capped, synergy_bonuses};

/// Per-SDG intermediate totals produced by one pass through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub raw: BTreeMap<SdgId, f64>,
    pub max: BTreeMap<SdgId, f64>,
    pub direct: BTreeMap<SdgId, f64>,
    pub bonus: BTreeMap<SdgId, f64>,
}

impl ScoreBreakdown {
    pub fn direct_score(&self, sdg: SdgId) -> f64 {
        self.direct.get(&sdg).copied().unwrap_or(0.0)
    }

    pub fn bonus_points(&self, sdg: SdgId) -> f64 {
        self.bonus.get(&sdg).copied().unwrap_or(0.0)
    }
}

/// Stateless scorer pairing the questionnaire with its rule tables.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    catalog: QuestionCatalog,
    rules: ScoringRules,
}

impl AssessmentEngine {
    pub fn new(catalog: QuestionCatalog, rules: ScoringRules) -> Self {
        Self { catalog, rules }
    }

    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard(), ScoringRules::standard())
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Run raw scoring, normalization, and synergy distribution.
    pub fn score(&self, responses: &ResponseSet) -> Result<ScoreBreakdown, ScoringError> {
        let raw = raw::raw_scores(&self.catalog, &self.rules, responses)?;
        let max = normalize::max_scores(&self.catalog, &self.rules)?;
        let direct = normalize::direct_scores(&self.rules, &raw, &max)?;
        let bonus = synergy::synergy_bonuses(&self.rules, &direct)?;

        debug!(
            answered_sdgs = raw.len(),
            bonus_total = bonus.values().sum::<f64>(),
            "scoring pipeline finished"
        );

        Ok(ScoreBreakdown {
            raw,
            max,
            direct,
            bonus,
        })
    }

    pub fn max_scores(&self) -> Result<BTreeMap<SdgId, f64>, ScoringError> {
        normalize::max_scores(&self.catalog, &self.rules)
    }
}

/// Failure inside a pipeline stage.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("question {question} maps to SDG {sdg}, which the scoring rules do not define")]
    UnknownQuestionSdg { question: String, sdg: u8 },
    #[error("synergy map references SDG {sdg}, which the scoring rules do not define")]
    UnknownSynergySdg { sdg: u8 },
    #[error("{stage} score for {sdg} is not a finite number")]
    NonFiniteScore { sdg: SdgId, stage: &'static str },
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_handles_one_and_two_decimals() {
        assert_eq!(round_to(6.666_666, 2), 6.67);
        assert_eq!(round_to(3.333_333, 1), 3.3);
        assert_eq!(round_to(0.0, 2), 0.0);
    }
}
