use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, warn};

use super::domain::ResponseSet;
use super::recommendations::RecommendationLibrary;
use super::report::{aggregate, AssessmentReport};
use super::scoring::AssessmentEngine;

/// Entry point turning a response set into a report or a structured rejection.
///
/// The engine and library are immutable and shared, so one service can serve any
/// number of concurrent callers.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    engine: Arc<AssessmentEngine>,
    library: Arc<RecommendationLibrary>,
}

impl AssessmentService {
    pub fn new(engine: Arc<AssessmentEngine>, library: Arc<RecommendationLibrary>) -> Self {
        Self { engine, library }
    }

    pub fn standard() -> Self {
        Self::new(
            Arc::new(AssessmentEngine::standard()),
            Arc::new(RecommendationLibrary::standard()),
        )
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    pub fn library(&self) -> &RecommendationLibrary {
        &self.library
    }

    /// Reject sets that carry nothing to score.
    pub fn validate(&self, responses: &ResponseSet) -> Result<(), AssessmentError> {
        if responses.is_empty() {
            return Err(AssessmentError::InvalidInput {
                details: vec!["No responses provided".to_string()],
            });
        }
        if !responses.has_meaningful_answer() {
            return Err(AssessmentError::InvalidInput {
                details: vec!["No questions have been answered.".to_string()],
            });
        }
        Ok(())
    }

    pub fn assess(&self, responses: &ResponseSet) -> Result<AssessmentReport, AssessmentError> {
        self.assess_at(responses, Utc::now())
    }

    /// Same as [`assess`](Self::assess) with a caller-chosen timestamp.
    pub fn assess_at(
        &self,
        responses: &ResponseSet,
        assessed_at: DateTime<Utc>,
    ) -> Result<AssessmentReport, AssessmentError> {
        if let Err(err) = self.validate(responses) {
            warn!(answers = responses.len(), error = %err, "assessment rejected");
            return Err(err);
        }

        let breakdown = self.engine.score(responses).map_err(|err| {
            error!(
                answers = responses.len(),
                questions = self.engine.catalog().len(),
                error = %err,
                "assessment computation failed"
            );
            AssessmentError::Computation {
                message: err.to_string(),
            }
        })?;

        let Some(report) = aggregate(self.engine.rules(), &breakdown, &self.library, assessed_at)
        else {
            warn!(answers = responses.len(), "assessment produced no SDG scores");
            return Err(AssessmentError::NoResults);
        };

        info!(
            overall_score = report.overall_score,
            sdgs = report.sdg_scores.len(),
            bonus_total = report.total_bonus(),
            "assessment completed"
        );
        Ok(report)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssessmentError {
    #[error("Invalid responses")]
    InvalidInput { details: Vec<String> },
    #[error("No scores could be calculated from the provided responses.")]
    NoResults,
    #[error("Calculation error: {message}")]
    Computation { message: String },
}

impl AssessmentError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::NoResults => "no_results",
            Self::Computation { .. } => "computation_error",
        }
    }

    pub fn report(&self) -> ErrorReport {
        let details = match self {
            Self::InvalidInput { details } => details.clone(),
            Self::NoResults | Self::Computation { .. } => Vec::new(),
        };
        ErrorReport {
            code: self.code(),
            message: self.to_string(),
            details,
        }
    }
}

/// Serialisable error indicator returned in place of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl From<&AssessmentError> for ErrorReport {
    fn from(value: &AssessmentError) -> Self {
        value.report()
    }
}
