use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Reference records
// ---------------------------------------------------------------------------

/// Named body-system group shown to users picking symptoms from a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymptomCategory {
    pub name: String,
    pub symptoms: Vec<String>,
}

/// A selectable symptom and the CID-10 codes it points to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymptomDiseaseLink {
    pub symptom: String,
    pub codes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiseaseIndexEntry {
    pub code: String,
    pub name: String,
}

/// Clinical picture recognized when enough of its symptoms are selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymptomCombination {
    pub condition: String,
    pub symptoms: Vec<String>,
}

// ---------------------------------------------------------------------------
// Query results
// ---------------------------------------------------------------------------

/// Search hits within one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryMatch {
    pub category: String,
    pub symptoms: Vec<String>,
}

/// A disease reached from one or more selected symptoms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchedDisease {
    pub code: String,
    pub name: String,
    /// CID-10 chapter title.
    pub category: String,
    /// Number of selected symptoms that map to this code.
    pub score: usize,
    pub matching_symptoms: Vec<String>,
    /// `score * 25`, capped at 100.
    pub confidence: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub diseases: Vec<MatchedDisease>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymptomAnalysis {
    pub selected_symptoms: Vec<String>,
    pub related_diseases: Vec<MatchedDisease>,
    pub category_analysis: Vec<CategoryGroup>,
    pub suggested_symptoms: Vec<String>,
    pub total_matches: usize,
    pub analysis_summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CombinationMatch {
    pub condition: String,
    pub matching_symptoms: usize,
    pub total_symptoms: usize,
    pub confidence: f64,
}

// ---------------------------------------------------------------------------
// SymptomError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum SymptomError {
    #[error("Symptom reference load failed ({0}): {1}")]
    ReferenceDataLoad(String, String),

    #[error("Symptom reference parse failed ({0}): {1}")]
    ReferenceDataParse(String, String),

    #[error("Nenhum sintoma selecionado")]
    EmptySelection,
}
