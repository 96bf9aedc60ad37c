//! Sustainability questionnaire, scoring pipeline, and report assembly.
//!
//! Scoring runs raw points → per-SDG maximum → direct 0-10 score → synergy bonus →
//! aggregation. Every stage is a pure function of the response set and the
//! immutable catalog and rule tables owned by [`AssessmentEngine`].

pub mod catalog;
pub mod domain;
pub mod recommendations;
pub mod report;
pub mod router;
pub mod rules;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{
    AnswerOption, CatalogError, CountTier, MultiChoiceScoring, Question, QuestionCatalog,
    QuestionFormat, Section, TierTable,
};
pub use domain::{
    Answer, Category, PerformanceLevel, ResponseSet, SdgId, SdgRecord, NOT_APPLICABLE,
};
pub use recommendations::{
    CertificationReference, CertificationTheme, PhaseRecommendations, ProjectPhase,
    RecommendationLibrary,
};
pub use report::views::{
    ArchitectureMetrics, CategoryScoreView, FocusRecommendation, SdgScoreView,
};
pub use report::{AssessmentReport, ExportError, ExportPaths};
pub use router::assessment_router;
pub use rules::{BonusThreshold, PerformanceBand, ScoringRules};
pub use scoring::{AssessmentEngine, ScoreBreakdown, ScoringError};
pub use service::{AssessmentError, AssessmentService, ErrorReport};
