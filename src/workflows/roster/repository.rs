use super::domain::{AllocationState, StudentRecord};

/// Storage abstraction for the roster so the service and the intake
/// coordinator can be exercised in isolation.
///
/// Implementations must apply each mutation atomically with respect to a
/// single record: concurrent callers never observe a partially written
/// record. No operation spans more than one record.
pub trait RosterRepository: Send + Sync {
    /// Insert the record, or overwrite every non-allocation field of the
    /// record already stored under the same email. The stored allocation
    /// state survives re-ingestion untouched.
    fn upsert(&self, record: StudentRecord) -> Result<(), RepositoryError>;

    fn fetch(&self, email: &str) -> Result<Option<StudentRecord>, RepositoryError>;

    /// All records in the store's natural iteration order. The order is
    /// implementation-defined and must be documented by the implementation.
    fn all(&self) -> Result<Vec<StudentRecord>, RepositoryError>;

    /// Records whose category list contains `category` as a raw,
    /// case-sensitive substring. A query for `Design` therefore also matches
    /// a record listing `Co-Design`; callers relying on exact category names
    /// must match on their side.
    fn by_category(&self, category: &str) -> Result<Vec<StudentRecord>, RepositoryError>;

    /// Replace the allocation state of the record under `email`.
    fn set_allocation(&self, email: &str, state: AllocationState) -> Result<(), RepositoryError>;
}

/// Error enumeration for storage failures. These indicate real
/// data-integrity risk and are never swallowed by callers.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
