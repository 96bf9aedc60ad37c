mod export;
mod insights;
mod summary;
pub mod views;

pub use export::{export_to_dir, to_csv, to_json, write_csv, write_json, ExportError, ExportPaths};
pub use summary::AssessmentReport;

pub(crate) use summary::aggregate;
