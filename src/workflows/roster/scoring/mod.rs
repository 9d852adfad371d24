mod config;
mod rules;

pub use config::ScoreWeights;

use super::domain::StudentRecord;
use serde::{Deserialize, Serialize};

/// Stateless scorer comparing the typed side of a record against its card
/// extraction. The typed side is ground truth, the extraction is the
/// observation; the contract is deliberately asymmetric even though the
/// underlying name similarity happens to be symmetric.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    weights: ScoreWeights,
}

impl ScoreEngine {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Score any record shape, including one with nothing extracted; every
    /// absent component contributes 0.0 and the result stays in [0, 1].
    pub fn score(&self, record: &StudentRecord) -> ConfidenceReport {
        let name_score = match &record.extraction.name {
            Some(extracted) => rules::name_similarity(&record.submission.name, extracted),
            None => 0.0,
        };

        let phone_score = match &record.extraction.phone {
            Some(extracted) => rules::exact_match(&record.submission.phone, extracted),
            None => 0.0,
        };

        let year_score = match &record.derived {
            Some(derived) if derived.study_year == record.submission.year_of_study => 1.0,
            _ => 0.0,
        };

        let raw = self.weights.name * name_score
            + self.weights.phone * phone_score
            + self.weights.year * year_score;
        let overall = (raw / self.weights.total().max(1e-9)).clamp(0.0, 1.0);

        ConfidenceReport {
            name_score,
            phone_score,
            year_score,
            overall,
        }
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new(ScoreWeights::default())
    }
}

/// Per-field agreement plus the weighted overall confidence, each in [0, 1].
/// Computed on demand from a record and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceReport {
    pub name_score: f64,
    pub phone_score: f64,
    pub year_score: f64,
    pub overall: f64,
}
