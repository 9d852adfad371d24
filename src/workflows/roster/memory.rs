use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::domain::{AllocationState, StudentRecord};
use super::repository::{RepositoryError, RosterRepository};

/// In-memory roster store. Natural iteration order is ascending email.
///
/// A single mutex serializes mutations, so each record update is atomic and
/// readers see either the pre- or post-mutation state. A poisoned lock is
/// reported as [`RepositoryError::Unavailable`] instead of panicking.
#[derive(Debug, Default)]
pub struct MemoryRoster {
    records: Mutex<BTreeMap<String, StudentRecord>>,
}

impl MemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> Result<MutexGuard<'_, BTreeMap<String, StudentRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("roster lock poisoned".to_string()))
    }
}

impl RosterRepository for MemoryRoster {
    fn upsert(&self, mut record: StudentRecord) -> Result<(), RepositoryError> {
        let mut records = self.guard()?;
        if let Some(existing) = records.get(record.email()) {
            record.allocation = existing.allocation.clone();
        }
        records.insert(record.email().to_string(), record);
        Ok(())
    }

    fn fetch(&self, email: &str) -> Result<Option<StudentRecord>, RepositoryError> {
        Ok(self.guard()?.get(email).cloned())
    }

    fn all(&self) -> Result<Vec<StudentRecord>, RepositoryError> {
        Ok(self.guard()?.values().cloned().collect())
    }

    fn by_category(&self, category: &str) -> Result<Vec<StudentRecord>, RepositoryError> {
        Ok(self
            .guard()?
            .values()
            .filter(|record| record.submission.categories.contains(category))
            .cloned()
            .collect())
    }

    fn set_allocation(&self, email: &str, state: AllocationState) -> Result<(), RepositoryError> {
        let mut records = self.guard()?;
        let record = records.get_mut(email).ok_or(RepositoryError::NotFound)?;
        record.allocation = state;
        Ok(())
    }
}
