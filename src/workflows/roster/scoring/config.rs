use serde::{Deserialize, Serialize};

/// Component weights for the overall confidence. The overall score divides
/// by the weight total, so the three values need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub name: f64,
    pub phone: f64,
    pub year: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            name: 0.4,
            phone: 0.3,
            year: 0.3,
        }
    }
}

impl ScoreWeights {
    pub(crate) fn total(&self) -> f64 {
        self.name + self.phone + self.year
    }
}
