//! Heuristic symptom → CID-10 matching.
//!
//! A free-text report is reduced to canonical symptom labels by substring
//! lookup, each catalog disease is scored by weighted overlap with its
//! primary and secondary symptom phrases, and the best candidates are
//! returned with a confidence label and advisory recommendations.
//!
//! All reference data is loaded once and read-only afterwards, so a single
//! `DiagnosticEngine` can be shared behind an `Arc`.

pub mod assessment;
pub mod catalog;
pub mod codes;
pub mod engine;
pub mod extraction;
pub mod matcher;
pub mod recommendations;
pub mod reference;
pub mod report;
pub mod scoring;
pub mod types;

pub use catalog::{DiseaseCatalog, DiseaseEntry};
pub use engine::DiagnosticEngine;
pub use extraction::{symptom_list_to_report, CanonicalSymptom, SymptomLexicon};
pub use reference::DiagnosisReferenceData;
pub use report::render_medical_report;
pub use types::*;
