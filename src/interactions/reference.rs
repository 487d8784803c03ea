use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::{DrugAliases, DrugAlternatives, DrugInteraction, InteractionError};

pub const INTERACTIONS_FILE: &str = "drug_interactions.json";

const BUNDLED_INTERACTIONS: &str = include_str!("../../resources/drug_interactions.json");

/// Alias table, interaction records and substitution table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InteractionReference {
    #[serde(default)]
    pub aliases: Vec<DrugAliases>,
    pub interactions: Vec<DrugInteraction>,
    #[serde(default)]
    pub alternatives: Vec<DrugAlternatives>,
}

impl InteractionReference {
    pub fn load(resources_dir: &Path) -> Result<Self, InteractionError> {
        let path = resources_dir.join(INTERACTIONS_FILE);
        let json = std::fs::read_to_string(&path).map_err(|e| {
            InteractionError::ReferenceDataLoad(path.display().to_string(), e.to_string())
        })?;
        Self::parse(&json)
    }

    pub fn bundled() -> Result<Self, InteractionError> {
        Self::parse(BUNDLED_INTERACTIONS)
    }

    fn parse(json: &str) -> Result<Self, InteractionError> {
        serde_json::from_str(json).map_err(|e| {
            InteractionError::ReferenceDataParse(INTERACTIONS_FILE.into(), e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::types::Severity;

    #[test]
    fn bundled_reference_loads() {
        let r = InteractionReference::bundled().unwrap();
        assert_eq!(r.interactions.len(), 11);
        assert_eq!(r.aliases.len(), 24);
        assert_eq!(r.alternatives.len(), 7);
        assert_eq!(r.interactions[0].details.severity, Severity::Contraindicada);
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(INTERACTIONS_FILE), r#"{"interactions": []}"#).unwrap();
        let r = InteractionReference::load(dir.path()).unwrap();
        assert!(r.interactions.is_empty());
        assert!(r.aliases.is_empty());
    }

    #[test]
    fn unknown_severity_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(INTERACTIONS_FILE),
            r#"{"interactions": [{"drug1": "a", "drug2": "b", "severity": "Extrema",
                "mechanism": "", "management": "", "onset_time": "", "evidence_level": ""}]}"#,
        )
        .unwrap();
        let err = InteractionReference::load(dir.path()).unwrap_err();
        assert!(matches!(err, InteractionError::ReferenceDataParse(..)));
    }

    #[test]
    fn missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InteractionReference::load(dir.path()).unwrap_err();
        assert!(matches!(err, InteractionError::ReferenceDataLoad(..)));
    }
}
