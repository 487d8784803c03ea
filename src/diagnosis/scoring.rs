use std::collections::BTreeSet;

use super::catalog::DiseaseEntry;
use super::matcher::symptoms_match;
use super::types::ConfidenceLevel;

const PRIMARY_WEIGHT: f64 = 0.8;
const SECONDARY_WEIGHT: f64 = 0.3;
const BONUS_PER_MATCH: f64 = 0.1;
const MAX_BONUS: f64 = 0.3;

const HIGH_CONFIDENCE_PROBABILITY: f64 = 0.7;
const HIGH_CONFIDENCE_MATCHES: usize = 3;
const MEDIUM_CONFIDENCE_PROBABILITY: f64 = 0.4;
const MEDIUM_CONFIDENCE_MATCHES: usize = 2;

/// Result of scoring one disease against an extracted symptom set.
#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseScore {
    pub probability: f64,
    /// Extracted labels that matched, de-duplicated, in extraction order.
    pub matching_symptoms: Vec<String>,
    pub primary_matches: usize,
    pub secondary_matches: usize,
}

impl DiseaseScore {
    fn zero() -> Self {
        Self {
            probability: 0.0,
            matching_symptoms: Vec::new(),
            primary_matches: 0,
            secondary_matches: 0,
        }
    }
}

/// Score a disease entry against extracted symptoms.
///
/// Each symptom is credited at most once: primary symptoms are searched
/// first, secondary only when no primary phrase matched.
pub fn score(extracted: &BTreeSet<String>, disease: &DiseaseEntry) -> DiseaseScore {
    let mut matching_symptoms: Vec<String> = Vec::new();
    let mut primary_matches = 0usize;
    let mut secondary_matches = 0usize;

    for symptom in extracted {
        let matched = if disease
            .primary_symptoms
            .iter()
            .any(|phrase| symptoms_match(symptom, phrase))
        {
            primary_matches += 1;
            true
        } else if disease
            .secondary_symptoms
            .iter()
            .any(|phrase| symptoms_match(symptom, phrase))
        {
            secondary_matches += 1;
            true
        } else {
            false
        };

        if matched && !matching_symptoms.contains(symptom) {
            matching_symptoms.push(symptom.clone());
        }
    }

    if matching_symptoms.is_empty() {
        return DiseaseScore::zero();
    }

    let primary_score = ratio(primary_matches, disease.primary_symptoms.len()) * PRIMARY_WEIGHT;
    let secondary_score =
        ratio(secondary_matches, disease.secondary_symptoms.len()) * SECONDARY_WEIGHT;
    let bonus = (matching_symptoms.len() as f64 * BONUS_PER_MATCH).min(MAX_BONUS);

    DiseaseScore {
        probability: (primary_score + secondary_score + bonus).min(1.0),
        matching_symptoms,
        primary_matches,
        secondary_matches,
    }
}

/// `matched / total`, or 0 for an empty list.
fn ratio(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    }
}

/// Map a probability and match count to a confidence label.
///
/// Cutoffs are inclusive: exactly 0.7 with 3 matches is `Alta`.
pub fn classify_confidence(probability: f64, matched_count: usize) -> ConfidenceLevel {
    if probability >= HIGH_CONFIDENCE_PROBABILITY && matched_count >= HIGH_CONFIDENCE_MATCHES {
        ConfidenceLevel::Alta
    } else if probability >= MEDIUM_CONFIDENCE_PROBABILITY
        && matched_count >= MEDIUM_CONFIDENCE_MATCHES
    {
        ConfidenceLevel::Media
    } else {
        ConfidenceLevel::Baixa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn disease(primary: &[&str], secondary: &[&str]) -> DiseaseEntry {
        DiseaseEntry {
            code: "I10".into(),
            name: "Hipertensão essencial".into(),
            primary_symptoms: primary.iter().map(|s| s.to_string()).collect(),
            secondary_symptoms: secondary.iter().map(|s| s.to_string()).collect(),
            risk_factors: vec![],
            severity_indicators: vec![],
            emergency_indicators: vec![],
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn hypertension_example_caps_at_one() {
        let d = disease(
            &["dor de cabeça", "tontura", "palpitações"],
            &["zumbido no ouvido"],
        );
        let s = score(&set(&["dor de cabeça", "tontura", "palpitações"]), &d);
        // 0.8 + 0.0 + 0.3 = 1.1, capped
        assert_close(s.probability, 1.0);
        assert_eq!(s.primary_matches, 3);
        assert_eq!(s.secondary_matches, 0);
        assert_eq!(s.matching_symptoms.len(), 3);
    }

    #[test]
    fn partial_primary_and_secondary() {
        let d = disease(
            &["tosse", "febre", "calafrios", "dispneia"],
            &["fadiga", "cefaleia"],
        );
        let s = score(&set(&["febre", "fadiga"]), &d);
        // (1/4)*0.8 + (1/2)*0.3 + 2*0.1 = 0.2 + 0.15 + 0.2
        assert_close(s.probability, 0.55);
        assert_eq!(s.primary_matches, 1);
        assert_eq!(s.secondary_matches, 1);
    }

    #[test]
    fn primary_match_skips_secondary_search() {
        let d = disease(&["tontura"], &["tontura"]);
        let s = score(&set(&["tontura"]), &d);
        assert_eq!(s.primary_matches, 1);
        assert_eq!(s.secondary_matches, 0);
        // (1/1)*0.8 + 0 + 0.1
        assert_close(s.probability, 0.9);
    }

    #[test]
    fn no_match_returns_zero_and_empty() {
        let d = disease(&["tontura"], &["azia"]);
        let s = score(&set(&["convulsões"]), &d);
        assert_eq!(s.probability, 0.0);
        assert!(s.matching_symptoms.is_empty());
    }

    #[test]
    fn empty_secondary_list_contributes_nothing() {
        let d = disease(&["a1", "a2", "a3", "a4", "a5"], &[]);
        let s = score(&set(&["a1"]), &d);
        // (1/5)*0.8 + 0.1
        assert_close(s.probability, 0.26);
    }

    #[test]
    fn empty_primary_list_does_not_divide_by_zero() {
        let d = disease(&[], &["zumbido no ouvido"]);
        let s = score(&set(&["zumbido no ouvido"]), &d);
        // 0 + (1/1)*0.3 + 0.1
        assert_close(s.probability, 0.4);
    }

    #[test]
    fn bonus_is_capped_at_point_three() {
        let primary: Vec<String> = (0..50).map(|i| format!("sintoma{i}")).collect();
        let refs: Vec<&str> = primary.iter().map(|s| s.as_str()).collect();
        let d = disease(&refs, &[]);
        let extracted: BTreeSet<String> = primary.iter().take(5).cloned().collect();
        let s = score(&extracted, &d);
        // (5/50)*0.8 + min(0.5, 0.3)
        assert_close(s.probability, 0.38);
    }

    #[test]
    fn probability_bounded_for_extreme_list_sizes() {
        for (primary_len, secondary_len) in [(1, 0), (1, 1), (1, 50), (50, 1), (50, 50)] {
            let primary: Vec<String> = (0..primary_len).map(|i| format!("p{i}")).collect();
            let secondary: Vec<String> = (0..secondary_len).map(|i| format!("s{i}")).collect();
            let d = DiseaseEntry {
                primary_symptoms: primary.clone(),
                secondary_symptoms: secondary.clone(),
                ..disease(&[], &[])
            };
            for take in [0, 1, 3, 50] {
                let extracted: BTreeSet<String> = primary
                    .iter()
                    .chain(secondary.iter())
                    .take(take)
                    .cloned()
                    .collect();
                let s = score(&extracted, &d);
                assert!(
                    (0.0..=1.0).contains(&s.probability),
                    "probability {} out of range",
                    s.probability
                );
            }
        }
    }

    #[test]
    fn confidence_boundaries_are_inclusive() {
        assert_eq!(classify_confidence(0.7, 3), ConfidenceLevel::Alta);
        assert_eq!(classify_confidence(0.69999, 5), ConfidenceLevel::Media);
        assert_eq!(classify_confidence(0.7, 2), ConfidenceLevel::Media);
        assert_eq!(classify_confidence(0.4, 2), ConfidenceLevel::Media);
        assert_eq!(classify_confidence(0.39999, 2), ConfidenceLevel::Baixa);
        assert_eq!(classify_confidence(0.95, 1), ConfidenceLevel::Baixa);
    }
}
