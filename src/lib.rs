//! Reconciles self-reported volunteer registrations with the text read off a
//! photographed identity card, scores how well the two agree, and tracks
//! which volunteers have been allocated to an event.
//!
//! The crate is a pure engine: image download, OCR, and the registration
//! export are collaborators behind traits in [`workflows::intake::sources`],
//! and presentation lives elsewhere.

pub mod config;
pub mod telemetry;
pub mod workflows;
