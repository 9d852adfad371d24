use std::sync::Arc;

use crate::workflows::roster::domain::{
    AdmissionCode, AllocationState, CardExtraction, DerivedFields, StudentRecord, Submission,
};
use crate::workflows::roster::memory::MemoryRoster;
use crate::workflows::roster::repository::{RepositoryError, RosterRepository};
use crate::workflows::roster::scoring::ScoreWeights;
use crate::workflows::roster::service::RosterService;

pub(super) fn submission(email: &str) -> Submission {
    Submission {
        email: email.to_string(),
        name: "Jane Doe".to_string(),
        course_code: "BTH".to_string(),
        year_of_study: 3,
        phone: "9876543210".to_string(),
        categories: "Hackathon, Design".to_string(),
    }
}

pub(super) fn admission_code() -> AdmissionCode {
    AdmissionCode {
        code: "BTH23-27@152304".to_string(),
        course_code: "BTH".to_string(),
        admission_year: 2023,
        batch_end_year: 2027,
    }
}

/// A record whose extraction agrees with the typed side on every component.
pub(super) fn matched_record(email: &str) -> StudentRecord {
    StudentRecord::new(
        submission(email),
        CardExtraction {
            name: Some("Jane Doe".to_string()),
            admission: Some(admission_code()),
            phone: Some("9876543210".to_string()),
        },
        Some(DerivedFields {
            admission_year: 2023,
            batch_end_year: 2027,
            study_year: 3,
        }),
    )
}

/// A record whose card produced nothing at all.
pub(super) fn blank_record(email: &str) -> StudentRecord {
    StudentRecord::new(submission(email), CardExtraction::default(), None)
}

pub(super) fn roster_with(records: Vec<StudentRecord>) -> Arc<MemoryRoster> {
    let roster = Arc::new(MemoryRoster::new());
    for record in records {
        roster.upsert(record).expect("seed roster");
    }
    roster
}

pub(super) fn service(roster: Arc<MemoryRoster>) -> RosterService<MemoryRoster> {
    RosterService::new(roster, ScoreWeights::default())
}

/// Repository double standing in for a store that is down.
pub(super) struct UnavailableRoster;

impl RosterRepository for UnavailableRoster {
    fn upsert(&self, _record: StudentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _email: &str) -> Result<Option<StudentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn all(&self) -> Result<Vec<StudentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn by_category(&self, _category: &str) -> Result<Vec<StudentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn set_allocation(
        &self,
        _email: &str,
        _state: AllocationState,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}
