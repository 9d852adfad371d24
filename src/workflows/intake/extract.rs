//! Structured-field extraction from the card's recognized text.
//!
//! Three independent micro-parsers over one free-text string; each returns
//! `None` when nothing matches and never fails. A miss on one field does not
//! affect the others.

use std::sync::LazyLock;

use regex::Regex;

use crate::workflows::roster::domain::{AdmissionCode, CardExtraction};

/// Two-digit card years are offsets from this century.
const CENTURY_BASE: i32 = 2000;

// e.g. BTH23-27@152304: course letters, start year, end year, serial.
static ADMISSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z]{2,4})(\d{2})-(\d{2})@(\d+)").expect("admission pattern compiles")
});

// Optional +91 prefix, 10 digits starting 6-9, with the common mid-number
// break after the fifth digit (`98765 43210`) tolerated.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+91[\s-]?)?([6-9]\d{4})[\s-]?(\d{5})").expect("phone pattern compiles")
});

/// Run all three extractors over the recognized text.
pub fn extract_card_fields(text: &str) -> CardExtraction {
    CardExtraction {
        name: extract_name(text),
        admission: extract_admission_code(text),
        phone: extract_phone(text),
    }
}

/// First well-formed admission code in the text. Malformed codes are never
/// partially accepted.
pub fn extract_admission_code(text: &str) -> Option<AdmissionCode> {
    let captures = ADMISSION_PATTERN.captures(text)?;
    let code = captures.get(0)?.as_str().to_string();
    let course_code = captures.get(1)?.as_str().to_string();
    let admission_year = CENTURY_BASE + captures.get(2)?.as_str().parse::<i32>().ok()?;
    let batch_end_year = CENTURY_BASE + captures.get(3)?.as_str().parse::<i32>().ok()?;

    Some(AdmissionCode {
        code,
        course_code,
        admission_year,
        batch_end_year,
    })
}

/// First plausible mobile number, returned as its bare 10 digits with any
/// country-code prefix discarded.
pub fn extract_phone(text: &str) -> Option<String> {
    let captures = PHONE_PATTERN.captures(text)?;
    let mut digits = String::with_capacity(10);
    digits.push_str(captures.get(1)?.as_str());
    digits.push_str(captures.get(2)?.as_str());
    Some(digits)
}

/// Best-effort name extraction from labeled lines such as
/// `Student's Name: Jane Doe`. A line qualifies only when it carries both
/// `Student` and `Name` literally; after stripping the label fragments the
/// remainder must still split into at least two tokens, otherwise scanning
/// continues on the next line.
pub fn extract_name(text: &str) -> Option<String> {
    for line in text.lines() {
        if !(line.contains("Student") && line.contains("Name")) {
            continue;
        }

        let cleaned = line
            .replace("Student's Name", "")
            .replace("Student Name", "")
            .replace("Name", "")
            .replace(':', "");
        let cleaned = cleaned.trim();

        if cleaned.split_whitespace().count() >= 2 {
            return Some(cleaned.to_string());
        }
    }

    None
}
