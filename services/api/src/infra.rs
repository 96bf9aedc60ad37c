use metrics_exporter_prometheus::PrometheusHandle;
use sdg_assessment::assessment::{Answer, QuestionCatalog, QuestionFormat, ResponseSet};
use sdg_assessment::error::AppError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read a response set saved as `{ "q1": "label", "q2": ["label", ...] }`.
pub(crate) fn load_responses(path: &Path) -> Result<ResponseSet, AppError> {
    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader).map_err(|err| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("failed to parse responses in {}: {err}", path.display()),
        ))
    })
}

/// Deterministic sample project: graded choices cycle through the scale and
/// checklists tick a growing prefix of their options.
pub(crate) fn sample_responses(catalog: &QuestionCatalog) -> ResponseSet {
    catalog
        .questions()
        .enumerate()
        .filter_map(|(index, question)| {
            let scorable: Vec<&str> = question
                .scorable_options()
                .map(|option| option.label)
                .collect();
            if scorable.is_empty() {
                return None;
            }

            let answer = match question.format {
                QuestionFormat::SingleChoice => {
                    let pick = (index * 2 + 1) % scorable.len();
                    Answer::Single(scorable[pick].to_string())
                }
                QuestionFormat::MultiChoice { .. } => {
                    let count = (index % scorable.len()) + 1;
                    Answer::Multiple(
                        scorable[..count]
                            .iter()
                            .map(|label| label.to_string())
                            .collect(),
                    )
                }
            };
            Some((question.id.to_string(), answer))
        })
        .collect()
}
