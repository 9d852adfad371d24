use serde::{Deserialize, Serialize};

/// Self-reported registration data, treated as ground truth when scoring.
/// One submission per ingestion attempt; the email is the sole identity key
/// across the whole engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub email: String,
    pub name: String,
    pub course_code: String,
    pub year_of_study: i32,
    pub phone: String,
    /// Comma-delimited free text; category queries match by substring.
    pub categories: String,
}

/// Structured admission identifier read off an identity card,
/// e.g. `BTH23-27@152304`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionCode {
    /// The full matched code as printed on the card. Expected to be unique
    /// across records, but uniqueness is advisory and not enforced here.
    pub code: String,
    /// Leading letter run of the code.
    pub course_code: String,
    pub admission_year: i32,
    pub batch_end_year: i32,
}

/// Fields recovered from the card's recognized text. Every field may be
/// absent; absence is an expected outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardExtraction {
    pub name: Option<String>,
    pub admission: Option<AdmissionCode>,
    pub phone: Option<String>,
}

/// Facts computed from an extracted admission code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFields {
    pub admission_year: i32,
    pub batch_end_year: i32,
    /// Study year under the August 1 cutoff, clamped to [1, 6].
    pub study_year: i32,
}

/// Allocation state of a volunteer. A record without an event cannot claim
/// to be allocated, so the pair is a closed sum rather than a flag plus an
/// optional string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationState {
    Unallocated,
    Allocated { event: String },
}

impl AllocationState {
    pub fn is_allocated(&self) -> bool {
        matches!(self, AllocationState::Allocated { .. })
    }

    pub fn event(&self) -> Option<&str> {
        match self {
            AllocationState::Allocated { event } => Some(event),
            AllocationState::Unallocated => None,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            AllocationState::Unallocated => "unallocated",
            AllocationState::Allocated { .. } => "allocated",
        }
    }
}

impl Default for AllocationState {
    fn default() -> Self {
        AllocationState::Unallocated
    }
}

/// Persisted union of a submission, its card extraction, and the derived
/// facts, keyed by the submission email. Re-ingestion replaces everything
/// except `allocation`, which only moves through explicit transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub submission: Submission,
    pub extraction: CardExtraction,
    pub derived: Option<DerivedFields>,
    pub allocation: AllocationState,
}

impl StudentRecord {
    pub fn new(
        submission: Submission,
        extraction: CardExtraction,
        derived: Option<DerivedFields>,
    ) -> Self {
        Self {
            submission,
            extraction,
            derived,
            allocation: AllocationState::Unallocated,
        }
    }

    pub fn email(&self) -> &str {
        &self.submission.email
    }
}
