use std::path::Path;

use serde::de::DeserializeOwned;

use super::catalog::{DiseaseCatalog, DiseaseEntry};
use super::extraction::{CanonicalSymptom, SymptomLexicon};
use super::types::DiagnosisError;

pub const LEXICON_FILE: &str = "symptom_lexicon.json";
pub const CATALOG_FILE: &str = "disease_catalog.json";

const BUNDLED_LEXICON: &str = include_str!("../../resources/symptom_lexicon.json");
const BUNDLED_CATALOG: &str = include_str!("../../resources/disease_catalog.json");

/// Loaded reference data for symptom scoring.
pub struct DiagnosisReferenceData {
    pub lexicon: SymptomLexicon,
    pub catalog: DiseaseCatalog,
}

impl DiagnosisReferenceData {
    /// Load reference data from JSON files in `resources_dir`.
    pub fn load(resources_dir: &Path) -> Result<Self, DiagnosisError> {
        let symptoms: Vec<CanonicalSymptom> = read_reference_file(resources_dir, LEXICON_FILE)?;
        let diseases: Vec<DiseaseEntry> = read_reference_file(resources_dir, CATALOG_FILE)?;
        Self::from_parts(symptoms, diseases)
    }

    /// Reference data compiled into the binary.
    pub fn bundled() -> Result<Self, DiagnosisError> {
        let symptoms: Vec<CanonicalSymptom> = parse_reference(BUNDLED_LEXICON, LEXICON_FILE)?;
        let diseases: Vec<DiseaseEntry> = parse_reference(BUNDLED_CATALOG, CATALOG_FILE)?;
        Self::from_parts(symptoms, diseases)
    }

    fn from_parts(
        symptoms: Vec<CanonicalSymptom>,
        diseases: Vec<DiseaseEntry>,
    ) -> Result<Self, DiagnosisError> {
        let lexicon = SymptomLexicon::new(symptoms)?;
        let catalog = DiseaseCatalog::new(diseases)?;
        tracing::debug!(
            symptoms = lexicon.len(),
            diseases = catalog.len(),
            "Diagnosis reference data loaded"
        );
        Ok(Self { lexicon, catalog })
    }

    /// Create reference data for tests (no file I/O).
    ///
    /// Small catalog built around the hypertension example: I10 with three
    /// primary symptoms, plus a respiratory and a digestive entry.
    pub fn load_test() -> Self {
        let symptom = |label: &str, variants: &[&str]| CanonicalSymptom {
            label: label.into(),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        };
        let disease = |code: &str, name: &str, primary: &[&str], secondary: &[&str]| {
            DiseaseEntry {
                code: code.into(),
                name: name.into(),
                primary_symptoms: primary.iter().map(|s| s.to_string()).collect(),
                secondary_symptoms: secondary.iter().map(|s| s.to_string()).collect(),
                risk_factors: vec![],
                severity_indicators: vec![],
                emergency_indicators: vec![],
            }
        };

        let lexicon = SymptomLexicon::new(vec![
            symptom("dor de cabeça", &["dor de cabeça", "cefaleia"]),
            symptom("tontura", &["tontura", "vertigem"]),
            symptom("palpitações", &["palpitações", "taquicardia"]),
            symptom("tosse", &["tosse", "tossindo"]),
            symptom("febre", &["febre", "febril"]),
            symptom("falta de ar", &["falta de ar", "dispneia"]),
            symptom("azia", &["azia", "queimação"]),
            symptom("náusea", &["náusea", "enjoo"]),
        ])
        .expect("test lexicon is valid");

        let catalog = DiseaseCatalog::new(vec![
            disease(
                "I10",
                "Hipertensão essencial",
                &["dor de cabeça", "tontura", "palpitações"],
                &["zumbido no ouvido"],
            ),
            disease(
                "J18",
                "Pneumonia",
                &["febre", "tosse", "falta de ar", "calafrios"],
                &["fadiga", "dor de cabeça"],
            ),
            disease(
                "K29",
                "Gastrite e duodenite",
                &["azia", "náusea", "vômito", "dor no estômago"],
                &["perda de apetite"],
            ),
        ])
        .expect("test catalog is valid");

        Self { lexicon, catalog }
    }
}

/// Read and deserialize one JSON reference file.
pub fn read_reference_file<T: DeserializeOwned>(
    resources_dir: &Path,
    file_name: &str,
) -> Result<T, DiagnosisError> {
    let path = resources_dir.join(file_name);
    let json = std::fs::read_to_string(&path).map_err(|e| {
        DiagnosisError::ReferenceDataLoad(path.display().to_string(), e.to_string())
    })?;
    parse_reference(&json, file_name)
}

fn parse_reference<T: DeserializeOwned>(json: &str, file_name: &str) -> Result<T, DiagnosisError> {
    serde_json::from_str(json)
        .map_err(|e| DiagnosisError::ReferenceDataParse(file_name.into(), e.to_string()))
}
