use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::{
    DiseaseIndexEntry, SymptomCategory, SymptomCombination, SymptomDiseaseLink, SymptomError,
};

pub const SYMPTOM_REFERENCE_FILE: &str = "symptom_reference.json";

const BUNDLED_REFERENCE: &str = include_str!("../../resources/symptom_reference.json");

/// Tables behind the selected-list symptom service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymptomReference {
    pub categories: Vec<SymptomCategory>,
    pub symptom_diseases: Vec<SymptomDiseaseLink>,
    #[serde(default)]
    pub disease_index: Vec<DiseaseIndexEntry>,
    #[serde(default)]
    pub combinations: Vec<SymptomCombination>,
}

impl SymptomReference {
    pub fn load(resources_dir: &Path) -> Result<Self, SymptomError> {
        let path = resources_dir.join(SYMPTOM_REFERENCE_FILE);
        let json = std::fs::read_to_string(&path).map_err(|e| {
            SymptomError::ReferenceDataLoad(path.display().to_string(), e.to_string())
        })?;
        Self::parse(&json)
    }

    pub fn bundled() -> Result<Self, SymptomError> {
        Self::parse(BUNDLED_REFERENCE)
    }

    fn parse(json: &str) -> Result<Self, SymptomError> {
        let reference: Self = serde_json::from_str(json).map_err(|e| {
            SymptomError::ReferenceDataParse(SYMPTOM_REFERENCE_FILE.into(), e.to_string())
        })?;
        tracing::debug!(
            categories = reference.categories.len(),
            links = reference.symptom_diseases.len(),
            indexed = reference.disease_index.len(),
            "Symptom reference loaded"
        );
        Ok(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_reference_loads() {
        let r = SymptomReference::bundled().unwrap();
        assert_eq!(r.categories.len(), 10);
        assert_eq!(r.categories[0].name, "Sintomas Gerais");
        assert_eq!(r.combinations.len(), 5);
        assert!(r.symptom_diseases.iter().any(|l| l.symptom == "Febre"));
    }

    #[test]
    fn every_category_symptom_has_links() {
        let r = SymptomReference::bundled().unwrap();
        for category in &r.categories {
            for symptom in &category.symptoms {
                assert!(
                    r.symptom_diseases.iter().any(|l| &l.symptom == symptom),
                    "{symptom} has no disease links"
                );
            }
        }
    }

    #[test]
    fn optional_tables_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SYMPTOM_REFERENCE_FILE),
            r#"{"categories": [], "symptom_diseases": [{"symptom": "Febre", "codes": ["A90"]}]}"#,
        )
        .unwrap();
        let r = SymptomReference::load(dir.path()).unwrap();
        assert!(r.disease_index.is_empty());
        assert!(r.combinations.is_empty());
        assert_eq!(r.symptom_diseases[0].codes, vec!["A90".to_string()]);
    }

    #[test]
    fn missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SymptomReference::load(dir.path()).unwrap_err();
        assert!(matches!(err, SymptomError::ReferenceDataLoad(..)));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SYMPTOM_REFERENCE_FILE), "[]").unwrap();
        let err = SymptomReference::load(dir.path()).unwrap_err();
        assert!(matches!(err, SymptomError::ReferenceDataParse(..)));
    }
}
