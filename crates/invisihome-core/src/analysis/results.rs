//! Mock model run.
//!
//! `process_file` waits for the configured delay and returns the same
//! classification every time, stamped with the file name and the time.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::info;

use super::UploadedFile;

/// Simulated model run time.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(3000);

const MOCK_TOTAL_AREAS: u32 = 156;
const MOCK_WELL_SERVED: u32 = 98;
const MOCK_UNDERSERVED: u32 = 58;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    WellServed,
    Underserved,
}

impl ServiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::WellServed => "Well-Served",
            ServiceStatus::Underserved => "Underserved",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub ward: String,
    pub status: ServiceStatus,
    pub confidence: f64,
}

impl Prediction {
    pub fn new(ward: &str, status: ServiceStatus, confidence: f64) -> Self {
        Self {
            ward: ward.to_string(),
            status,
            confidence,
        }
    }

    /// Confidence as a whole percent for display
    pub fn confidence_percent(&self) -> String {
        format!("{:.0}%", self.confidence * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResults {
    pub file_name: String,
    pub processed_at: DateTime<Utc>,
    pub total_areas: u32,
    pub well_served: u32,
    pub underserved: u32,
    pub predictions: Vec<Prediction>,
}

impl AnalysisResults {
    /// The fixed result every run produces
    pub fn mock(file_name: &str, processed_at: DateTime<Utc>) -> Self {
        Self {
            file_name: file_name.to_string(),
            processed_at,
            total_areas: MOCK_TOTAL_AREAS,
            well_served: MOCK_WELL_SERVED,
            underserved: MOCK_UNDERSERVED,
            predictions: vec![
                Prediction::new("Ward 1", ServiceStatus::WellServed, 0.87),
                Prediction::new("Ward 2", ServiceStatus::Underserved, 0.92),
                Prediction::new("Ward 3", ServiceStatus::WellServed, 0.78),
                Prediction::new("Ward 4", ServiceStatus::Underserved, 0.85),
            ],
        }
    }

    fn percent_of_total(&self, count: u32) -> u32 {
        if self.total_areas == 0 {
            return 0;
        }
        (count as f64 / self.total_areas as f64 * 100.0).round() as u32
    }

    pub fn well_served_percent(&self) -> u32 {
        self.percent_of_total(self.well_served)
    }

    pub fn underserved_percent(&self) -> u32 {
        self.percent_of_total(self.underserved)
    }
}

/// Run the mock model over an uploaded file.
///
/// Always succeeds after `delay`; the file is never opened.
pub async fn process_file(file: &UploadedFile, delay: Duration) -> AnalysisResults {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    let results = AnalysisResults::mock(&file.name, Utc::now());
    info!(
        file = %file.name,
        predictions = results.predictions.len(),
        "Analysis complete"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn upload() -> UploadedFile {
        UploadedFile {
            name: "wards.csv".to_string(),
            path: PathBuf::from("/nonexistent/wards.csv"),
            size_bytes: 1024,
        }
    }

    #[test]
    fn test_mock_percentages() {
        let results = AnalysisResults::mock("x.csv", Utc::now());
        assert_eq!(results.well_served_percent(), 63);
        assert_eq!(results.underserved_percent(), 37);
    }

    #[test]
    fn test_percent_with_no_areas() {
        let mut results = AnalysisResults::mock("x.csv", Utc::now());
        results.total_areas = 0;
        assert_eq!(results.well_served_percent(), 0);
    }

    #[test]
    fn test_confidence_percent() {
        let p = Prediction::new("Ward 1", ServiceStatus::WellServed, 0.87);
        assert_eq!(p.confidence_percent(), "87%");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(ServiceStatus::WellServed.to_string(), "Well-Served");
        assert_eq!(ServiceStatus::Underserved.to_string(), "Underserved");
    }

    #[tokio::test]
    async fn test_process_file_without_reading_content() {
        // Path does not exist; processing must not care
        let results = process_file(&upload(), Duration::ZERO).await;
        assert_eq!(results.file_name, "wards.csv");
        assert_eq!(results.total_areas, 156);
        assert_eq!(results.predictions.len(), 4);
        assert_eq!(results.predictions[1].ward, "Ward 2");
        assert_eq!(results.predictions[1].status, ServiceStatus::Underserved);
    }

    #[tokio::test(start_paused = true)]
    async fn test_process_file_waits_for_delay() {
        let start = tokio::time::Instant::now();
        process_file(&upload(), DEFAULT_PROCESSING_DELAY).await;
        assert!(start.elapsed() >= DEFAULT_PROCESSING_DELAY);
    }
}
