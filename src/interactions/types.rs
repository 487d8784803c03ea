use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Interaction severity, ordered from least to most serious.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Leve,
    Moderada,
    Grave,
    Contraindicada,
}

impl Severity {
    /// Most serious first.
    pub const DESCENDING: [Severity; 4] = [
        Severity::Contraindicada,
        Severity::Grave,
        Severity::Moderada,
        Severity::Leve,
    ];

    pub fn score(&self) -> u32 {
        match self {
            Self::Leve => 1,
            Self::Moderada => 2,
            Self::Grave => 3,
            Self::Contraindicada => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leve => "Leve",
            Self::Moderada => "Moderada",
            Self::Grave => "Grave",
            Self::Contraindicada => "Contraindicada",
        }
    }

    pub fn requires_immediate_attention(&self) -> bool {
        matches!(self, Self::Grave | Self::Contraindicada)
    }
}

/// Combined severity × evidence rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Baixo,
    Moderado,
    Alto,
    #[serde(rename = "Muito Alto")]
    MuitoAlto,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 9 => Self::MuitoAlto,
            s if s >= 6 => Self::Alto,
            s if s >= 3 => Self::Moderado,
            _ => Self::Baixo,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Baixo => "Baixo",
            Self::Moderado => "Moderado",
            Self::Alto => "Alto",
            Self::MuitoAlto => "Muito Alto",
        }
    }
}

/// Evidence score from a level string such as `"Alto - estudos clínicos"`.
/// Only the part before `" - "` is read; unknown levels count as 1.
pub fn evidence_score(evidence_level: &str) -> u32 {
    let head = evidence_level
        .split(" - ")
        .next()
        .unwrap_or_default()
        .trim();
    match head {
        "Alto" => 3,
        "Moderado" => 2,
        _ => 1,
    }
}

// ---------------------------------------------------------------------------
// Reference records
// ---------------------------------------------------------------------------

/// Clinical content of an interaction, shared by reference records and
/// findings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionDetails {
    pub severity: Severity,
    pub mechanism: String,
    #[serde(default)]
    pub clinical_effects: Vec<String>,
    #[serde(default)]
    pub adverse_reactions: Vec<String>,
    pub management: String,
    #[serde(default)]
    pub monitoring: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
    pub onset_time: String,
    pub evidence_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugInteraction {
    pub drug1: String,
    pub drug2: String,
    #[serde(flatten)]
    pub details: InteractionDetails,
}

impl DrugInteraction {
    pub fn risk_level(&self) -> RiskLevel {
        let score = self.details.severity.score() * evidence_score(&self.details.evidence_level);
        RiskLevel::from_score(score)
    }
}

/// Generic name and the brand names or synonyms that resolve to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrugAliases {
    pub generic: String,
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrugAlternatives {
    pub drug: String,
    pub alternatives: Vec<String>,
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A known interaction between two medications of a checked list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionFinding {
    /// Names as the caller wrote them.
    pub drug1: String,
    pub drug2: String,
    pub drug1_generic: String,
    pub drug2_generic: String,
    #[serde(flatten)]
    pub details: InteractionDetails,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeverityBreakdown {
    #[serde(rename = "Contraindicada")]
    pub contraindicada: usize,
    #[serde(rename = "Grave")]
    pub grave: usize,
    #[serde(rename = "Moderada")]
    pub moderada: usize,
    #[serde(rename = "Leve")]
    pub leve: usize,
}

impl SeverityBreakdown {
    pub fn record(&mut self, severity: Severity) {
        *self.slot(severity) += 1;
    }

    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Contraindicada => self.contraindicada,
            Severity::Grave => self.grave,
            Severity::Moderada => self.moderada,
            Severity::Leve => self.leve,
        }
    }

    fn slot(&mut self, severity: Severity) -> &mut usize {
        match severity {
            Severity::Contraindicada => &mut self.contraindicada,
            Severity::Grave => &mut self.grave,
            Severity::Moderada => &mut self.moderada,
            Severity::Leve => &mut self.leve,
        }
    }

    /// Most serious severity with a non-zero count.
    pub fn highest(&self) -> Option<Severity> {
        Severity::DESCENDING
            .into_iter()
            .find(|s| self.count(*s) > 0)
    }
}

pub const NO_SEVERITY_LABEL: &str = "Nenhuma";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionSummary {
    pub total_medications: usize,
    pub total_interactions: usize,
    pub severity_breakdown: SeverityBreakdown,
    /// Severity name, or `"Nenhuma"`.
    pub highest_severity: String,
    pub requires_immediate_attention: bool,
    pub interactions: Vec<InteractionFinding>,
    pub general_recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// InteractionError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum InteractionError {
    #[error("Interaction reference load failed ({0}): {1}")]
    ReferenceDataLoad(String, String),

    #[error("Interaction reference parse failed ({0}): {1}")]
    ReferenceDataParse(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Contraindicada > Severity::Grave);
        assert!(Severity::Grave > Severity::Moderada);
        assert!(Severity::Moderada > Severity::Leve);
    }

    #[test]
    fn evidence_reads_prefix_only() {
        assert_eq!(evidence_score("Alto - estudos clínicos controlados"), 3);
        assert_eq!(evidence_score("Moderado"), 2);
        assert_eq!(evidence_score("Baixo"), 1);
        assert_eq!(evidence_score(""), 1);
        assert_eq!(evidence_score("Desconhecido"), 1);
    }

    #[test]
    fn risk_thresholds() {
        assert_eq!(RiskLevel::from_score(12), RiskLevel::MuitoAlto);
        assert_eq!(RiskLevel::from_score(9), RiskLevel::MuitoAlto);
        assert_eq!(RiskLevel::from_score(6), RiskLevel::Alto);
        assert_eq!(RiskLevel::from_score(4), RiskLevel::Moderado);
        assert_eq!(RiskLevel::from_score(3), RiskLevel::Moderado);
        assert_eq!(RiskLevel::from_score(2), RiskLevel::Baixo);
    }

    #[test]
    fn risk_level_serializes_with_space() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::MuitoAlto).unwrap(),
            "\"Muito Alto\""
        );
    }

    #[test]
    fn breakdown_tracks_highest() {
        let mut b = SeverityBreakdown::default();
        assert_eq!(b.highest(), None);
        b.record(Severity::Moderada);
        b.record(Severity::Grave);
        b.record(Severity::Moderada);
        assert_eq!(b.highest(), Some(Severity::Grave));
        assert_eq!(b.count(Severity::Moderada), 2);
    }

    #[test]
    fn record_deserializes_flat_json() {
        let json = r#"{
            "drug1": "metformina", "drug2": "propranolol", "severity": "Leve",
            "mechanism": "m", "management": "g", "onset_time": "dias",
            "evidence_level": "Moderado"
        }"#;
        let record: DrugInteraction = serde_json::from_str(json).unwrap();
        assert_eq!(record.details.severity, Severity::Leve);
        assert!(record.details.monitoring.is_empty());
        assert_eq!(record.risk_level(), RiskLevel::Baixo);
    }
}
