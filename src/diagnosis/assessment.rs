//! Severity and urgency reading of an extracted symptom set.

use std::collections::BTreeSet;

use super::types::{DiagnosticCandidate, SeverityAssessment, UrgencyLevel};

const SEVERE_MARKERS: [&str; 6] = [
    "dor no peito",
    "falta de ar",
    "convulsões",
    "sangue na urina",
    "febre alta",
    "perda de consciência",
];

const EMERGENCY_MARKERS: [&str; 6] = [
    "dor no peito",
    "falta de ar",
    "convulsões",
    "perda de consciência",
    "sangramento",
    "febre alta",
];

/// Top probability above which an otherwise mild picture is rated moderate.
const SEVERITY_PROBABILITY_FLOOR: f64 = 0.7;
/// Top probability above which a routine picture becomes priority.
const URGENCY_PROBABILITY_FLOOR: f64 = 0.8;

fn count_containing(symptoms: &BTreeSet<String>, markers: &[&str]) -> usize {
    symptoms
        .iter()
        .filter(|symptom| markers.iter().any(|marker| symptom.contains(marker)))
        .count()
}

fn top_probability(candidates: &[DiagnosticCandidate]) -> Option<f64> {
    candidates.first().map(|c| c.probability)
}

/// Two or more severe markers → grave, one → moderada, otherwise moderada
/// only when the top candidate is above 0.7.
pub fn assess_severity(
    symptoms: &BTreeSet<String>,
    candidates: &[DiagnosticCandidate],
) -> SeverityAssessment {
    match count_containing(symptoms, &SEVERE_MARKERS) {
        n if n >= 2 => SeverityAssessment::Grave,
        1 => SeverityAssessment::Moderada,
        _ if top_probability(candidates).is_some_and(|p| p > SEVERITY_PROBABILITY_FLOOR) => {
            SeverityAssessment::Moderada
        }
        _ => SeverityAssessment::Leve,
    }
}

/// Two or more emergency markers → emergência, one → urgente, otherwise
/// prioritário when the top candidate is above 0.8.
pub fn assess_urgency(
    symptoms: &BTreeSet<String>,
    candidates: &[DiagnosticCandidate],
) -> UrgencyLevel {
    match count_containing(symptoms, &EMERGENCY_MARKERS) {
        n if n >= 2 => UrgencyLevel::Emergencia,
        1 => UrgencyLevel::Urgente,
        _ if top_probability(candidates).is_some_and(|p| p > URGENCY_PROBABILITY_FLOOR) => {
            UrgencyLevel::Prioritario
        }
        _ => UrgencyLevel::Rotina,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::types::{CandidateMetadata, ConfidenceLevel};

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn candidate(probability: f64) -> DiagnosticCandidate {
        DiagnosticCandidate {
            code: "K29".into(),
            name: "Gastrite e duodenite".into(),
            probability,
            matching_symptoms: vec!["azia".into()],
            confidence: ConfidenceLevel::Baixa,
            metadata: CandidateMetadata {
                total_symptoms_found: 1,
                matching_symptoms_count: 1,
                primary_symptoms_matched: 1,
                recommendations: vec![],
            },
        }
    }

    #[test]
    fn two_severe_markers_is_grave() {
        let symptoms = set(&["dor no peito", "falta de ar", "tosse"]);
        assert_eq!(assess_severity(&symptoms, &[]), SeverityAssessment::Grave);
        assert_eq!(assess_urgency(&symptoms, &[]), UrgencyLevel::Emergencia);
    }

    #[test]
    fn one_marker_is_moderate_and_urgent() {
        let symptoms = set(&["convulsões", "fadiga"]);
        assert_eq!(assess_severity(&symptoms, &[]), SeverityAssessment::Moderada);
        assert_eq!(assess_urgency(&symptoms, &[]), UrgencyLevel::Urgente);
    }

    #[test]
    fn sangue_na_urina_is_severe_but_not_emergency() {
        let symptoms = set(&["sangue na urina"]);
        assert_eq!(assess_severity(&symptoms, &[]), SeverityAssessment::Moderada);
        assert_eq!(assess_urgency(&symptoms, &[]), UrgencyLevel::Rotina);
    }

    #[test]
    fn high_probability_raises_mild_picture() {
        let symptoms = set(&["azia"]);
        let candidates = [candidate(0.85)];
        assert_eq!(
            assess_severity(&symptoms, &candidates),
            SeverityAssessment::Moderada
        );
        assert_eq!(assess_urgency(&symptoms, &candidates), UrgencyLevel::Prioritario);
    }

    #[test]
    fn probability_floors_are_strict() {
        let symptoms = set(&["azia"]);
        assert_eq!(
            assess_severity(&symptoms, &[candidate(0.7)]),
            SeverityAssessment::Leve
        );
        assert_eq!(assess_urgency(&symptoms, &[candidate(0.8)]), UrgencyLevel::Rotina);
    }

    #[test]
    fn empty_input_is_mild_routine() {
        assert_eq!(assess_severity(&BTreeSet::new(), &[]), SeverityAssessment::Leve);
        assert_eq!(assess_urgency(&BTreeSet::new(), &[]), UrgencyLevel::Rotina);
    }
}
