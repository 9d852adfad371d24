use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use chrono::NaiveDate;
use volunteer_roster::workflows::intake::sources::{
    parse_registrations, AcquisitionError, CardImage, CardImageSource, OcrEngine, OcrError,
    Registration, SourceError, SubmissionSource,
};
use volunteer_roster::workflows::intake::IntakeCoordinator;
use volunteer_roster::workflows::roster::{
    AllocationState, MemoryRoster, RosterRepository, RosterService, ScoreWeights,
};

/// Registration export captured as CSV text, re-parsed on every read like
/// the real file-backed source.
struct ExportFixture(&'static str);

impl SubmissionSource for ExportFixture {
    fn read(&self) -> Result<Vec<Registration>, SourceError> {
        parse_registrations(Cursor::new(self.0))
    }
}

#[derive(Default)]
struct CardShelf {
    texts: HashMap<&'static str, &'static str>,
}

impl CardImageSource for CardShelf {
    fn fetch(&self, url: &str) -> Result<CardImage, AcquisitionError> {
        match self.texts.get(url) {
            Some(text) => Ok(CardImage {
                bytes: text.as_bytes().to_vec(),
            }),
            None => Err(AcquisitionError::NotFound(url.to_string())),
        }
    }
}

struct PassthroughOcr;

impl OcrEngine for PassthroughOcr {
    fn recognize(&self, image: &CardImage) -> Result<String, OcrError> {
        Ok(String::from_utf8_lossy(&image.bytes).into_owned())
    }
}

const EXPORT: &str = "\
Email address,Name,Course,Year of Study,WhatsApp Number,What categories would you like to volunteer for,ID Card
jane@campus.edu,Jane Doe,BTH,3,9876543210,\"Hackathon, Design\",card://jane
rob@campus.edu,Rob Roe,MBA,2,9123456780,Hackathon,card://lost
amy@campus.edu,Amy Moe,BTH,1,7012345678,Logistics,card://amy
";

fn card_shelf() -> CardShelf {
    let mut texts = HashMap::new();
    texts.insert(
        "card://jane",
        "Campus University\nStudent's Name: Jane Doe\nBTH23-27@152304\n+91 98765 43210",
    );
    texts.insert(
        "card://amy",
        "Campus University\nStudent's Name: Amy Moe\nBTH25-29@167001\n+91-7012345678",
    );
    CardShelf { texts }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
}

#[test]
fn export_flows_from_csv_to_allocation() {
    let roster = Arc::new(MemoryRoster::new());
    let coordinator = IntakeCoordinator::new(roster.clone(), card_shelf(), PassthroughOcr);

    let report = coordinator.run(&ExportFixture(EXPORT), today()).expect("intake");
    assert_eq!(report.ingested, 3);
    assert!(report.is_clean());

    let service = RosterService::new(roster.clone(), ScoreWeights::default());

    // Rob's card never resolved, so only Jane clears the default floor.
    let candidates = service.candidates("Hackathon", None).expect("candidates");
    assert_eq!(candidates.len(), 1);
    let (jane, scores) = &candidates[0];
    assert_eq!(jane.email(), "jane@campus.edu");
    assert_eq!(scores.overall, 1.0);

    // Amy agrees on name and phone but is in study year 1 of a 2025 batch.
    let amy = roster.fetch("amy@campus.edu").expect("fetch").expect("record");
    let derived = amy.derived.expect("derived");
    assert_eq!(derived.admission_year, 2025);
    assert_eq!(derived.study_year, 1);
    let amy_scores = service.score(&amy);
    assert_eq!(amy_scores.phone_score, 1.0);
    assert_eq!(amy_scores.year_score, 1.0);

    service
        .allocate("jane@campus.edu", "Hackathon Core Team")
        .expect("allocate");

    // Re-running the pass refreshes fields but leaves the allocation alone.
    let report = coordinator.run(&ExportFixture(EXPORT), today()).expect("re-run");
    assert_eq!(report.ingested, 3);

    let jane = roster.fetch("jane@campus.edu").expect("fetch").expect("record");
    assert_eq!(
        jane.allocation,
        AllocationState::Allocated {
            event: "Hackathon Core Team".to_string()
        }
    );

    let unallocated = service.unallocated(None).expect("unallocated");
    assert_eq!(unallocated.len(), 2);

    let summary = service.accuracy_report(0.8).expect("report");
    assert_eq!(summary.total_records, 3);
    assert_eq!(summary.low_confidence, vec!["rob@campus.edu".to_string()]);
}
