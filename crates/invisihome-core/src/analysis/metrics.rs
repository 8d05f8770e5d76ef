//! Fixed model performance figures rendered on the dashboard charts.

pub const ACCURACY_PERCENT: u8 = 87;
pub const PRECISION_PERCENT: u8 = 84;
pub const RECALL_PERCENT: u8 = 89;
pub const F1_PERCENT: u8 = 86;

/// (label, value) pairs for the summary tiles
pub const PERFORMANCE: [(&str, u8); 4] = [
    ("Accuracy", ACCURACY_PERCENT),
    ("Precision", PRECISION_PERCENT),
    ("Recall", RECALL_PERCENT),
    ("F1-Score", F1_PERCENT),
];

/// Relative weight of each input feature, largest first
pub const FEATURE_IMPORTANCE: [(&str, f64); 4] = [
    ("Infrastructure Quality", 0.35),
    ("Population Density", 0.28),
    ("Service Accessibility", 0.22),
    ("Economic Indicators", 0.15),
];

/// Rows are actual class, columns predicted class, both ordered
/// well-served then underserved.
pub const CONFUSION_MATRIX: [[u32; 2]; 2] = [[142, 18], [12, 128]];

pub const DATA_SOURCES: [&str; 4] = [
    "Census demographic data",
    "Infrastructure assessments",
    "Service accessibility metrics",
    "Economic indicators",
];

pub const MODEL_FEATURES: [&str; 4] = [
    "Population density analysis",
    "Infrastructure quality scoring",
    "Service accessibility mapping",
    "Socioeconomic indicators",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_importance_sums_to_one() {
        let total: f64 = FEATURE_IMPORTANCE.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_feature_importance_sorted() {
        assert!(FEATURE_IMPORTANCE.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
