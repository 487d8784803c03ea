//! Free-text symptom extraction.
//!
//! Plain substring containment over a phrase table. No tokenization,
//! no stemming: "cefaleia" is only recognized because it is listed as a
//! variant of "dor de cabeça".

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::types::DiagnosisError;

/// Sentence prefix used when a selected symptom list is turned into a report.
pub const SYMPTOM_LIST_PREFIX: &str = "Paciente apresenta os seguintes sintomas: ";

/// A canonical symptom label and the phrases that normalize to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalSymptom {
    pub label: String,
    pub variants: Vec<String>,
}

/// Immutable phrase table used by the extractor.
#[derive(Debug, Clone)]
pub struct SymptomLexicon {
    symptoms: Vec<CanonicalSymptom>,
}

impl SymptomLexicon {
    /// Build a lexicon, normalizing labels and variants to trimmed lower case.
    ///
    /// Blank variants are dropped (they would match every text). Symptoms left
    /// without variants are skipped.
    pub fn new(symptoms: Vec<CanonicalSymptom>) -> Result<Self, DiagnosisError> {
        let mut normalized = Vec::with_capacity(symptoms.len());

        for symptom in symptoms {
            let label = normalize_text(&symptom.label);
            let variants: Vec<String> = symptom
                .variants
                .iter()
                .map(|v| normalize_text(v))
                .filter(|v| !v.is_empty())
                .collect();

            if label.is_empty() || variants.is_empty() {
                tracing::warn!(label = %symptom.label, "Skipping lexicon entry without variants");
                continue;
            }
            normalized.push(CanonicalSymptom { label, variants });
        }

        if normalized.is_empty() {
            return Err(DiagnosisError::EmptyLexicon);
        }

        Ok(Self {
            symptoms: normalized,
        })
    }

    /// Extract canonical symptom labels from free text.
    ///
    /// The first variant found for a symptom adds its label and ends the scan
    /// for that symptom.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let normalized = normalize_text(text);
        let mut found = BTreeSet::new();

        for symptom in &self.symptoms {
            if symptom
                .variants
                .iter()
                .any(|variant| normalized.contains(variant.as_str()))
            {
                found.insert(symptom.label.clone());
            }
        }

        found
    }

    pub fn symptoms(&self) -> &[CanonicalSymptom] {
        &self.symptoms
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}

/// Lower-case and trim, the only normalization the matcher ever applies.
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Join a selected symptom list into a synthetic report sentence.
pub fn symptom_list_to_report(symptoms: &[String]) -> String {
    let listed: Vec<&str> = symptoms
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    format!("{SYMPTOM_LIST_PREFIX}{}", listed.join(", "))
}
