//! CSV export of model predictions.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use super::{AnalysisResults, Prediction};

const CSV_HEADER: &str = "Ward,Status,Confidence";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No results to export - process a file first")]
    NoResults,

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Round to two places with ties going up, so 0.125 becomes 0.13.
/// `{:.2}` alone rounds exact ties to even.
fn round_confidence(confidence: f64) -> f64 {
    (confidence * 100.0).round() / 100.0
}

/// Render predictions as CSV, header first, no trailing newline.
/// Confidences have two decimals, ties rounded up.
pub fn predictions_to_csv(predictions: &[Prediction]) -> String {
    let mut lines = Vec::with_capacity(predictions.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(
        predictions
            .iter()
            .map(|p| format!("{},{},{:.2}", p.ward, p.status, round_confidence(p.confidence))),
    );
    lines.join("\n")
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("invisihome_results_{}.csv", date.format("%Y-%m-%d"))
}

/// Write the predictions of `results` into `dir`, named for `date`.
/// Returns the path written.
pub fn write_export(
    results: Option<&AnalysisResults>,
    dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let results = results.ok_or(ExportError::NoResults)?;
    let path = dir.join(export_file_name(date));
    let contents = predictions_to_csv(&results.predictions);

    std::fs::write(&path, contents).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!(path = %path.display(), rows = results.predictions.len(), "Exported results");
    Ok(path)
}
