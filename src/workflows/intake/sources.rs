//! Collaborator contracts consumed by the intake coordinator, plus the CSV
//! adapter for the registration-form export.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

/// One registration row as it arrives from the form export. The declared
/// study year stays raw here so a malformed value fails that row during
/// intake instead of failing the whole export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub name: String,
    pub course_code: String,
    pub year_of_study: String,
    pub phone: String,
    pub categories: String,
    pub card_url: Option<String>,
}

/// A finite, restartable sequence of registration rows. `read` re-reads the
/// full source from the top on every call.
pub trait SubmissionSource {
    fn read(&self) -> Result<Vec<Registration>, SourceError>;
}

/// Raw bytes of a fetched card image, handed to the OCR engine.
#[derive(Debug, Clone)]
pub struct CardImage {
    pub bytes: Vec<u8>,
}

/// Resolves a card URL to local image bytes. Failures are recovered by the
/// coordinator, which proceeds as if the card produced no text.
pub trait CardImageSource: Send + Sync {
    fn fetch(&self, url: &str) -> Result<CardImage, AcquisitionError>;
}

/// Turns a card image into recognized text, possibly empty.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image: &CardImage) -> Result<String, OcrError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to open registration export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid registration export: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AcquisitionError {
    #[error("card image not found: {0}")]
    NotFound(String),
    #[error("card fetch failed: {0}")]
    Network(String),
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("text recognition failed: {0}")]
    Engine(String),
}

/// Reads the registration export produced by the form backend.
pub struct CsvSubmissionSource {
    path: PathBuf,
}

impl CsvSubmissionSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SubmissionSource for CsvSubmissionSource {
    fn read(&self) -> Result<Vec<Registration>, SourceError> {
        let file = File::open(&self.path)?;
        parse_registrations(file)
    }
}

/// Parse registration rows out of any CSV reader carrying the export's
/// column headers.
pub fn parse_registrations<R: Read>(reader: R) -> Result<Vec<Registration>, SourceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut registrations = Vec::new();

    for row in csv_reader.deserialize::<ResponseRow>() {
        registrations.push(row?.into_registration());
    }

    Ok(registrations)
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    #[serde(rename = "Email address")]
    email: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Course")]
    course: String,
    #[serde(rename = "Year of Study")]
    year_of_study: String,
    #[serde(rename = "WhatsApp Number")]
    phone: String,
    #[serde(rename = "What categories would you like to volunteer for")]
    categories: String,
    #[serde(rename = "ID Card", default, deserialize_with = "empty_string_as_none")]
    card_url: Option<String>,
}

impl ResponseRow {
    fn into_registration(self) -> Registration {
        Registration {
            email: self.email,
            name: self.name,
            course_code: self.course,
            year_of_study: self.year_of_study,
            phone: self.phone,
            categories: self.categories,
            card_url: self.card_url,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "Email address,Name,Course,Year of Study,WhatsApp Number,What categories would you like to volunteer for,ID Card\n";

    #[test]
    fn parses_export_headers() {
        let csv = format!(
            "{HEADER}jane@campus.edu,Jane Doe,BTH,3,9876543210,\"Hackathon, Design\",https://cards.example/jane.jpg\n"
        );
        let rows = parse_registrations(Cursor::new(csv)).expect("parse");

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.email, "jane@campus.edu");
        assert_eq!(row.name, "Jane Doe");
        assert_eq!(row.course_code, "BTH");
        assert_eq!(row.year_of_study, "3");
        assert_eq!(row.phone, "9876543210");
        assert_eq!(row.categories, "Hackathon, Design");
        assert_eq!(row.card_url.as_deref(), Some("https://cards.example/jane.jpg"));
    }

    #[test]
    fn blank_card_url_becomes_none() {
        let csv = format!("{HEADER}jane@campus.edu,Jane Doe,BTH,3,9876543210,Hackathon,\n");
        let rows = parse_registrations(Cursor::new(csv)).expect("parse");
        assert!(rows[0].card_url.is_none());
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let source = CsvSubmissionSource::new("./does-not-exist.csv");
        let error = source.read().expect_err("expected io error");
        assert!(matches!(error, SourceError::Io(_)));
    }
}
