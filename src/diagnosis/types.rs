use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// ConfidenceLevel
// ---------------------------------------------------------------------------

/// Coarse trust label derived from probability and corroborating matches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfidenceLevel {
    #[serde(rename = "baixa")]
    Baixa,
    #[serde(rename = "média")]
    Media,
    #[serde(rename = "alta")]
    Alta,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Baixa => "baixa",
            Self::Media => "média",
            Self::Alta => "alta",
        }
    }

    /// Capitalized form used in printed reports.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Baixa => "Baixa",
            Self::Media => "Média",
            Self::Alta => "Alta",
        }
    }
}

// ---------------------------------------------------------------------------
// DiagnosticCandidate
// ---------------------------------------------------------------------------

/// Counts and advice attached to a ranked candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateMetadata {
    /// Size of the extracted symptom set for the whole input.
    pub total_symptoms_found: usize,
    pub matching_symptoms_count: usize,
    pub primary_symptoms_matched: usize,
    pub recommendations: Vec<String>,
}

/// One scored disease. Built fresh per analysis and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticCandidate {
    pub code: String,
    pub name: String,
    /// Always within `[0.0, 1.0]`.
    pub probability: f64,
    pub matching_symptoms: Vec<String>,
    pub confidence: ConfidenceLevel,
    pub metadata: CandidateMetadata,
}

impl DiagnosticCandidate {
    /// Probability as a percentage rounded to one decimal place.
    pub fn probability_percent(&self) -> f64 {
        to_percent(self.probability)
    }
}

/// `0.8333…` → `83.3`.
pub fn to_percent(probability: f64) -> f64 {
    (probability * 1000.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// DiagnosticOutcome
// ---------------------------------------------------------------------------

/// Why a report was rejected before scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    Empty,
    TooShort { length: usize, minimum: usize },
}

/// Distinguishes rejected input from input that simply matched nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiagnosticOutcome {
    Rejected {
        reason: RejectReason,
    },
    NoMatch {
        symptoms_found: Vec<String>,
    },
    Ranked {
        symptoms_found: Vec<String>,
        candidates: Vec<DiagnosticCandidate>,
    },
}

impl DiagnosticOutcome {
    /// Ranked candidates, empty for the other variants.
    pub fn candidates(&self) -> &[DiagnosticCandidate] {
        match self {
            Self::Ranked { candidates, .. } => candidates,
            _ => &[],
        }
    }

    pub fn into_candidates(self) -> Vec<DiagnosticCandidate> {
        match self {
            Self::Ranked { candidates, .. } => candidates,
            _ => Vec::new(),
        }
    }

    pub fn symptoms_found(&self) -> &[String] {
        match self {
            Self::Rejected { .. } => &[],
            Self::NoMatch { symptoms_found } | Self::Ranked { symptoms_found, .. } => {
                symptoms_found
            }
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "rejected",
            Self::NoMatch { .. } => "no_match",
            Self::Ranked { .. } => "ranked",
        }
    }
}

// ---------------------------------------------------------------------------
// Advanced analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SeverityAssessment {
    Leve,
    Moderada,
    Grave,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum UrgencyLevel {
    #[serde(rename = "rotina")]
    Rotina,
    #[serde(rename = "prioritário")]
    Prioritario,
    #[serde(rename = "urgente")]
    Urgente,
    #[serde(rename = "emergência")]
    Emergencia,
}

/// Condensed view of a candidate inside an advanced analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PossibleDiagnosis {
    pub code: String,
    pub name: String,
    pub probability: f64,
    pub confidence: ConfidenceLevel,
}

/// Structured reading of a free-text medical report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvancedAnalysis {
    pub symptoms_extracted: Vec<String>,
    pub possible_diagnoses: Vec<PossibleDiagnosis>,
    pub severity: SeverityAssessment,
    pub urgency: UrgencyLevel,
    pub recommendations: Vec<String>,
    pub follow_up_needed: bool,
}

// ---------------------------------------------------------------------------
// DiagnosisError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum DiagnosisError {
    #[error("Reference data load failed ({0}): {1}")]
    ReferenceDataLoad(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    ReferenceDataParse(String, String),

    #[error("Invalid disease code: {0:?}")]
    InvalidDiseaseCode(String),

    #[error("Duplicate disease code in catalog: {0}")]
    DuplicateDiseaseCode(String),

    #[error("Symptom lexicon has no usable entries")]
    EmptyLexicon,

    #[error("Disease catalog has no scorable entries")]
    EmptyCatalog,
}

// ---------------------------------------------------------------------------
// SymptomAnalyzer trait
// ---------------------------------------------------------------------------

/// Entry points the HTTP layer and report assembly depend on.
pub trait SymptomAnalyzer {
    /// Rank catalog diseases for a free-text report. Empty when the text is
    /// rejected or nothing scores above the threshold.
    fn analyze_symptoms_report(&self, report: &str) -> Vec<DiagnosticCandidate>;

    /// Same ranking, with rejection and no-match reported explicitly.
    fn analyze(&self, report: &str) -> DiagnosticOutcome;

    /// Ranking plus severity and urgency assessment.
    fn analyze_report_advanced(&self, report: &str) -> AdvancedAnalysis;

    /// Advisory strings for a code at a given probability.
    fn generate_recommendations(&self, code: &str, probability: f64) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_ordering() {
        assert!(ConfidenceLevel::Baixa < ConfidenceLevel::Media);
        assert!(ConfidenceLevel::Media < ConfidenceLevel::Alta);
    }

    #[test]
    fn confidence_serializes_with_accent() {
        let json = serde_json::to_string(&ConfidenceLevel::Media).unwrap();
        assert_eq!(json, "\"média\"");
        assert_eq!(ConfidenceLevel::Media.title(), "Média");
    }

    #[test]
    fn percent_rounds_to_one_decimal() {
        assert_eq!(to_percent(1.0), 100.0);
        assert_eq!(to_percent(0.83333), 83.3);
        assert_eq!(to_percent(0.0), 0.0);
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let outcome = DiagnosticOutcome::Rejected {
            reason: RejectReason::TooShort {
                length: 2,
                minimum: 10,
            },
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["reason"]["kind"], "too_short");
        assert_eq!(json["reason"]["minimum"], 10);
    }

    #[test]
    fn outcome_accessors_for_non_ranked() {
        let outcome = DiagnosticOutcome::NoMatch {
            symptoms_found: vec!["febre".into()],
        };
        assert!(outcome.candidates().is_empty());
        assert_eq!(outcome.symptoms_found(), ["febre".to_string()]);
        assert_eq!(outcome.status(), "no_match");
    }

    #[test]
    fn urgency_serializes_in_portuguese() {
        let json = serde_json::to_string(&UrgencyLevel::Emergencia).unwrap();
        assert_eq!(json, "\"emergência\"");
    }
}
