//! Ingestion pipeline: registration rows in, reconciled roster records out.
//!
//! Each row is processed independently; card trouble degrades to an empty
//! extraction and a genuinely failed row is reported without stopping the
//! batch.

pub mod calendar;
pub mod extract;
pub mod sources;

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::workflows::roster::domain::{DerivedFields, StudentRecord, Submission};
use crate::workflows::roster::repository::{RepositoryError, RosterRepository};
use self::sources::{CardImageSource, OcrEngine, Registration, SourceError, SubmissionSource};

/// Orchestrates card acquisition, OCR, extraction, derivation, and the
/// allocation-preserving upsert for each registration row.
pub struct IntakeCoordinator<R, C, O> {
    repository: Arc<R>,
    cards: C,
    ocr: O,
}

impl<R, C, O> IntakeCoordinator<R, C, O>
where
    R: RosterRepository,
    C: CardImageSource,
    O: OcrEngine,
{
    pub fn new(repository: Arc<R>, cards: C, ocr: O) -> Self {
        Self {
            repository,
            cards,
            ocr,
        }
    }

    /// Run one ingestion pass over the source. `today` anchors the study
    /// year derivation so a batch is reproducible in tests. Row failures are
    /// collected in the report; only an unreadable source fails the batch.
    pub fn run<S: SubmissionSource>(
        &self,
        source: &S,
        today: NaiveDate,
    ) -> Result<IntakeReport, IntakeError> {
        let mut report = IntakeReport::default();

        for registration in source.read()? {
            let email = registration.email.clone();
            match self.process(registration, today) {
                Ok(()) => report.ingested += 1,
                Err(reason) => {
                    error!(%email, %reason, "registration skipped");
                    report.failures.push(IntakeFailure {
                        email,
                        reason: reason.to_string(),
                    });
                }
            }
        }

        info!(
            ingested = report.ingested,
            failed = report.failures.len(),
            "intake pass finished"
        );
        Ok(report)
    }

    fn process(&self, registration: Registration, today: NaiveDate) -> Result<(), RowError> {
        let year_of_study = registration
            .year_of_study
            .trim()
            .parse::<i32>()
            .map_err(|_| RowError::InvalidYear(registration.year_of_study.clone()))?;

        let submission = Submission {
            email: registration.email,
            name: registration.name,
            course_code: registration.course_code,
            year_of_study,
            phone: registration.phone,
            categories: registration.categories,
        };

        let text = self.card_text(&submission.email, registration.card_url.as_deref());
        let extraction = extract::extract_card_fields(&text);

        let derived = extraction.admission.as_ref().map(|code| DerivedFields {
            admission_year: code.admission_year,
            batch_end_year: code.batch_end_year,
            study_year: calendar::study_year(code.admission_year, today),
        });

        self.repository
            .upsert(StudentRecord::new(submission, extraction, derived))?;
        Ok(())
    }

    /// Recognized text for the row's card. Acquisition or recognition
    /// trouble never fails the row; the card is treated as blank.
    fn card_text(&self, email: &str, card_url: Option<&str>) -> String {
        let url = match card_url {
            Some(url) => url,
            None => {
                warn!(%email, "no card reference on the registration; treating card as blank");
                return String::new();
            }
        };

        let image = match self.cards.fetch(url) {
            Ok(image) => image,
            Err(err) => {
                warn!(%email, error = %err, "card fetch failed; treating card as blank");
                return String::new();
            }
        };

        match self.ocr.recognize(&image) {
            Ok(text) => text,
            Err(err) => {
                warn!(%email, error = %err, "recognition failed; treating card as blank");
                String::new()
            }
        }
    }
}

/// Outcome of one ingestion pass.
#[derive(Debug, Default)]
pub struct IntakeReport {
    pub ingested: usize,
    pub failures: Vec<IntakeFailure>,
}

impl IntakeReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One skipped row, identified the way the store would have keyed it.
#[derive(Debug)]
pub struct IntakeFailure {
    pub email: String,
    pub reason: String,
}

/// Batch-level failure: the registration source itself could not be read.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read registration source: {0}")]
    Source(#[from] SourceError),
}

#[derive(Debug, thiserror::Error)]
enum RowError {
    #[error("invalid declared study year '{0}'")]
    InvalidYear(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
