use super::summary::AssessmentReport;
use super::views::SdgScoreView;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Pretty-printed JSON document of the full report.
pub fn to_json(report: &AssessmentReport) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes and flushes the JSON document so buffered write errors surface here.
pub fn write_json<W: Write>(report: &AssessmentReport, mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

/// The per-SDG table as CSV, one row per goal in report order.
pub fn to_csv(report: &AssessmentReport) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| {
        ExportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })
}

pub fn write_csv<W: Write>(report: &AssessmentReport, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for view in &report.sdg_scores {
        csv_writer.serialize(SdgScoreRow::from(view))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
}

/// Write both documents into `dir`, named after the report timestamp.
pub fn export_to_dir(report: &AssessmentReport, dir: &Path) -> Result<ExportPaths, ExportError> {
    fs::create_dir_all(dir)?;
    let stem = format!(
        "sdg_assessment_{}",
        report.assessed_at.format("%Y%m%d_%H%M%S")
    );

    let json = dir.join(format!("{stem}.json"));
    write_json(report, BufWriter::new(File::create(&json)?))?;

    let csv = dir.join(format!("{stem}.csv"));
    write_csv(report, BufWriter::new(File::create(&csv)?))?;

    info!(json = %json.display(), csv = %csv.display(), "assessment exported");
    Ok(ExportPaths { json, csv })
}

#[derive(Debug, Serialize)]
struct SdgScoreRow {
    sdg_id: u8,
    name: &'static str,
    direct_score: f64,
    bonus_points: f64,
    final_score: f64,
    performance: &'static str,
    performance_color: &'static str,
    category: &'static str,
}

impl From<&SdgScoreView> for SdgScoreRow {
    fn from(view: &SdgScoreView) -> Self {
        Self {
            sdg_id: view.sdg_id.0,
            name: view.name,
            direct_score: view.direct_score,
            bonus_points: view.bonus_points,
            final_score: view.final_score,
            performance: view.performance.label(),
            performance_color: view.performance_color,
            category: view.category.label(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write CSV table: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}
