use serde::Serialize;

use super::scoring::ConfidenceReport;

/// Mean, min, and max of one score component across the store. For the 0/1
/// components the mean doubles as an exact-match accuracy rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl ScoreStats {
    fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &value in values {
            min = min.min(value);
            max = max.max(value);
            sum += value;
        }
        Self {
            mean: sum / values.len() as f64,
            min,
            max,
        }
    }
}

/// Store-wide reconciliation quality summary: component statistics plus the
/// records whose overall confidence falls below the threshold.
#[derive(Debug, Clone, Serialize)]
pub struct AccuracyReport {
    pub total_records: usize,
    pub threshold: f64,
    pub name: ScoreStats,
    pub phone: ScoreStats,
    pub year: ScoreStats,
    pub overall: ScoreStats,
    /// Emails below `threshold`, in store order.
    pub low_confidence: Vec<String>,
}

impl AccuracyReport {
    pub fn from_entries(entries: &[(String, ConfidenceReport)], threshold: f64) -> Self {
        let mut name = Vec::with_capacity(entries.len());
        let mut phone = Vec::with_capacity(entries.len());
        let mut year = Vec::with_capacity(entries.len());
        let mut overall = Vec::with_capacity(entries.len());
        let mut low_confidence = Vec::new();

        for (email, scores) in entries {
            name.push(scores.name_score);
            phone.push(scores.phone_score);
            year.push(scores.year_score);
            overall.push(scores.overall);
            if scores.overall < threshold {
                low_confidence.push(email.clone());
            }
        }

        Self {
            total_records: entries.len(),
            threshold,
            name: ScoreStats::from_values(&name),
            phone: ScoreStats::from_values(&phone),
            year: ScoreStats::from_values(&year),
            overall: ScoreStats::from_values(&overall),
            low_confidence,
        }
    }
}
