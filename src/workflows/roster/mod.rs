//! Roster persistence, allocation transitions, and confidence scoring.

pub mod domain;
pub mod memory;
pub mod report;
pub mod repository;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AdmissionCode, AllocationState, CardExtraction, DerivedFields, StudentRecord, Submission,
};
pub use memory::MemoryRoster;
pub use report::{AccuracyReport, ScoreStats};
pub use repository::{RepositoryError, RosterRepository};
pub use scoring::{ConfidenceReport, ScoreEngine, ScoreWeights};
pub use service::{RosterService, ServiceError, DEFAULT_MIN_CONFIDENCE};
