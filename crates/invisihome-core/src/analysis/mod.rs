//! Ward-level analysis shown on the dashboard.
//!
//! This module provides:
//! - `wards`: static per-ward service statistics and headline figures
//! - `metrics`: fixed model performance numbers for the charts
//! - `upload`: metadata for a user-selected data file
//! - `results`: the mock model run and its predictions
//! - `export`: CSV rendering and writing of predictions
//!
//! No file content is ever read and no model runs. Processing is a timed
//! wait followed by a fixed result.

pub mod export;
pub mod metrics;
pub mod results;
pub mod upload;
pub mod wards;

pub use export::{export_file_name, predictions_to_csv, write_export, ExportError};
pub use results::{process_file, AnalysisResults, Prediction, ServiceStatus};
pub use upload::{UploadError, UploadedFile};
pub use wards::{Ward, WARDS};
