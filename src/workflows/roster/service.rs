use std::sync::Arc;

use super::domain::{AllocationState, StudentRecord};
use super::report::AccuracyReport;
use super::repository::{RepositoryError, RosterRepository};
use super::scoring::{ConfidenceReport, ScoreEngine, ScoreWeights};

/// Confidence floor applied when the caller of [`RosterService::candidates`]
/// does not supply one.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.8;

/// Query and allocation surface over the roster store, composing the score
/// engine for confidence-gated lookups.
pub struct RosterService<R> {
    repository: Arc<R>,
    engine: ScoreEngine,
}

impl<R> RosterService<R>
where
    R: RosterRepository,
{
    pub fn new(repository: Arc<R>, weights: ScoreWeights) -> Self {
        Self {
            repository,
            engine: ScoreEngine::new(weights),
        }
    }

    /// Move a record to `Allocated { event }`. Valid from either state:
    /// re-allocating overwrites the previous event name.
    pub fn allocate(&self, email: &str, event: &str) -> Result<(), ServiceError> {
        self.repository.set_allocation(
            email,
            AllocationState::Allocated {
                event: event.to_string(),
            },
        )?;
        Ok(())
    }

    /// Move a record back to `Unallocated`. Already-unallocated records are
    /// left as they are; this is not an error.
    pub fn unallocate(&self, email: &str) -> Result<(), ServiceError> {
        self.repository
            .set_allocation(email, AllocationState::Unallocated)?;
        Ok(())
    }

    pub fn students(&self) -> Result<Vec<StudentRecord>, ServiceError> {
        Ok(self.repository.all()?)
    }

    pub fn students_by_category(&self, category: &str) -> Result<Vec<StudentRecord>, ServiceError> {
        Ok(self.repository.by_category(category)?)
    }

    /// Unallocated records, optionally narrowed to a category.
    pub fn unallocated(&self, category: Option<&str>) -> Result<Vec<StudentRecord>, ServiceError> {
        let records = match category {
            Some(category) => self.repository.by_category(category)?,
            None => self.repository.all()?,
        };
        Ok(records
            .into_iter()
            .filter(|record| !record.allocation.is_allocated())
            .collect())
    }

    /// Unallocated records in `category` whose overall confidence meets
    /// `min_confidence` (default [`DEFAULT_MIN_CONFIDENCE`]), paired with
    /// their scores, in the store's natural iteration order.
    pub fn candidates(
        &self,
        category: &str,
        min_confidence: Option<f64>,
    ) -> Result<Vec<(StudentRecord, ConfidenceReport)>, ServiceError> {
        let floor = min_confidence.unwrap_or(DEFAULT_MIN_CONFIDENCE);
        let mut qualified = Vec::new();
        for record in self.unallocated(Some(category))? {
            let scores = self.engine.score(&record);
            if scores.overall >= floor {
                qualified.push((record, scores));
            }
        }
        Ok(qualified)
    }

    /// Score one record with the service's configured weights.
    pub fn score(&self, record: &StudentRecord) -> ConfidenceReport {
        self.engine.score(record)
    }

    /// Reconciliation quality across every stored record. An empty store
    /// yields a zero-record report with zeroed statistics.
    pub fn accuracy_report(&self, threshold: f64) -> Result<AccuracyReport, ServiceError> {
        let entries: Vec<(String, ConfidenceReport)> = self
            .repository
            .all()?
            .iter()
            .map(|record| (record.email().to_string(), self.engine.score(record)))
            .collect();
        Ok(AccuracyReport::from_entries(&entries, threshold))
    }
}

/// Error raised by the roster service. Storage failures pass through
/// untouched so callers see the underlying integrity problem.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
