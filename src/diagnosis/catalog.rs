use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::codes::{is_valid_code, normalize_code};
use super::types::DiagnosisError;

/// Per-disease symptom record, keyed by CID-10 code.
///
/// Only `primary_symptoms` and `secondary_symptoms` take part in scoring;
/// the remaining lists are informational.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseEntry {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub primary_symptoms: Vec<String>,
    #[serde(default)]
    pub secondary_symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risk_factors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub severity_indicators: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emergency_indicators: Vec<String>,
}

impl DiseaseEntry {
    /// An entry with no symptoms at all can never score above zero.
    pub fn is_scorable(&self) -> bool {
        !self.primary_symptoms.is_empty() || !self.secondary_symptoms.is_empty()
    }
}

/// Read-only disease catalog in insertion order.
///
/// Insertion order is also the tie-break order when two diseases score the
/// same probability.
#[derive(Debug, Clone)]
pub struct DiseaseCatalog {
    entries: Vec<DiseaseEntry>,
}

impl DiseaseCatalog {
    /// Validate and freeze a list of entries.
    ///
    /// Codes are normalized to upper case and must have the CID-10 shape.
    /// Duplicate codes are rejected. Entries with neither primary nor
    /// secondary symptoms are dropped.
    pub fn new(entries: Vec<DiseaseEntry>) -> Result<Self, DiagnosisError> {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(entries.len());

        for mut entry in entries {
            entry.code = normalize_code(&entry.code);
            if !is_valid_code(&entry.code) {
                return Err(DiagnosisError::InvalidDiseaseCode(entry.code));
            }
            if !seen.insert(entry.code.clone()) {
                return Err(DiagnosisError::DuplicateDiseaseCode(entry.code));
            }
            if !entry.is_scorable() {
                tracing::warn!(code = %entry.code, "Dropping catalog entry without symptoms");
                continue;
            }
            kept.push(entry);
        }

        if kept.is_empty() {
            return Err(DiagnosisError::EmptyCatalog);
        }

        Ok(Self { entries: kept })
    }

    /// Look up an entry by code (case-insensitive).
    pub fn get(&self, code: &str) -> Option<&DiseaseEntry> {
        let code = normalize_code(code);
        self.entries.iter().find(|e| e.code == code)
    }

    pub fn entries(&self) -> &[DiseaseEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiseaseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, primary: &[&str]) -> DiseaseEntry {
        DiseaseEntry {
            code: code.into(),
            name: format!("Doença {code}"),
            primary_symptoms: primary.iter().map(|s| s.to_string()).collect(),
            secondary_symptoms: vec![],
            risk_factors: vec![],
            severity_indicators: vec![],
            emergency_indicators: vec![],
        }
    }

    #[test]
    fn get_is_case_insensitive() {
        let catalog = DiseaseCatalog::new(vec![entry("I10", &["tontura"])]).unwrap();
        assert!(catalog.get("i10").is_some());
        assert!(catalog.get(" I10 ").is_some());
        assert!(catalog.get("J45").is_none());
    }

    #[test]
    fn codes_are_normalized_on_load() {
        let catalog = DiseaseCatalog::new(vec![entry("n39.0", &["dor ao urinar"])]).unwrap();
        assert_eq!(catalog.entries()[0].code, "N39.0");
    }

    #[test]
    fn rejects_malformed_code() {
        let err = DiseaseCatalog::new(vec![entry("HTA", &["tontura"])]).unwrap_err();
        assert!(matches!(err, DiagnosisError::InvalidDiseaseCode(code) if code == "HTA"));
    }

    #[test]
    fn rejects_duplicate_code() {
        let err = DiseaseCatalog::new(vec![
            entry("I10", &["tontura"]),
            entry("i10", &["cefaleia"]),
        ])
        .unwrap_err();
        assert!(matches!(err, DiagnosisError::DuplicateDiseaseCode(code) if code == "I10"));
    }

    #[test]
    fn drops_entries_without_symptoms() {
        let catalog =
            DiseaseCatalog::new(vec![entry("I10", &["tontura"]), entry("R68", &[])]).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("R68").is_none());
    }

    #[test]
    fn secondary_only_entry_is_kept() {
        let mut e = entry("R51", &[]);
        e.secondary_symptoms = vec!["cefaleia".into()];
        let catalog = DiseaseCatalog::new(vec![e]).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let err = DiseaseCatalog::new(vec![entry("R68", &[])]).unwrap_err();
        assert!(matches!(err, DiagnosisError::EmptyCatalog));
    }

    #[test]
    fn preserves_insertion_order() {
        let catalog = DiseaseCatalog::new(vec![
            entry("J45", &["tosse"]),
            entry("A90", &["febre"]),
            entry("I10", &["tontura"]),
        ])
        .unwrap();
        let codes: Vec<&str> = catalog.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["J45", "A90", "I10"]);
    }

    #[test]
    fn optional_lists_default_when_absent() {
        let json = r#"{"code": "K29", "name": "Gastrite", "primary_symptoms": ["azia"]}"#;
        let e: DiseaseEntry = serde_json::from_str(json).unwrap();
        assert!(e.secondary_symptoms.is_empty());
        assert!(e.risk_factors.is_empty());
    }
}
