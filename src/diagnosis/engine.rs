use std::collections::BTreeSet;
use std::time::Instant;

use super::assessment::{assess_severity, assess_urgency};
use super::catalog::DiseaseCatalog;
use super::extraction::SymptomLexicon;
use super::recommendations;
use super::reference::DiagnosisReferenceData;
use super::scoring::{classify_confidence, score};
use super::types::{
    AdvancedAnalysis, CandidateMetadata, DiagnosticCandidate, DiagnosticOutcome,
    PossibleDiagnosis, RejectReason, SymptomAnalyzer,
};

/// Reports shorter than this (after trimming, in characters) are rejected.
pub const MIN_REPORT_CHARS: usize = 10;
/// Candidates must score strictly above this probability.
pub const PROBABILITY_THRESHOLD: f64 = 0.1;
/// Ranked output is truncated to this many candidates.
pub const MAX_CANDIDATES: usize = 5;

/// Default implementation of the symptom analyzer.
/// Owns the lexicon and catalog; holds no mutable state, so one instance
/// can be shared across request handlers.
pub struct DiagnosticEngine {
    lexicon: SymptomLexicon,
    catalog: DiseaseCatalog,
}

impl DiagnosticEngine {
    pub fn new(reference: DiagnosisReferenceData) -> Self {
        Self {
            lexicon: reference.lexicon,
            catalog: reference.catalog,
        }
    }

    pub fn lexicon(&self) -> &SymptomLexicon {
        &self.lexicon
    }

    pub fn catalog(&self) -> &DiseaseCatalog {
        &self.catalog
    }

    /// Extract canonical symptoms from free text.
    pub fn extract_symptoms(&self, text: &str) -> BTreeSet<String> {
        self.lexicon.extract(text)
    }

    fn validate(report: &str) -> Option<RejectReason> {
        let trimmed = report.trim();
        if trimmed.is_empty() {
            return Some(RejectReason::Empty);
        }
        let length = trimmed.chars().count();
        if length < MIN_REPORT_CHARS {
            return Some(RejectReason::TooShort {
                length,
                minimum: MIN_REPORT_CHARS,
            });
        }
        None
    }

    /// Score every catalog entry, keep those above the threshold, and return
    /// the top candidates by probability.
    ///
    /// The sort is stable, so equal probabilities keep catalog order.
    fn rank(&self, extracted: &BTreeSet<String>) -> Vec<DiagnosticCandidate> {
        let mut candidates: Vec<DiagnosticCandidate> = self
            .catalog
            .iter()
            .filter_map(|disease| {
                let scored = score(extracted, disease);
                if !passes_threshold(scored.probability) {
                    return None;
                }
                let matched = scored.matching_symptoms.len();
                let primary_exact = scored
                    .matching_symptoms
                    .iter()
                    .filter(|s| disease.primary_symptoms.contains(s))
                    .count();
                Some(DiagnosticCandidate {
                    code: disease.code.clone(),
                    name: disease.name.clone(),
                    probability: scored.probability,
                    confidence: classify_confidence(scored.probability, matched),
                    metadata: CandidateMetadata {
                        total_symptoms_found: extracted.len(),
                        matching_symptoms_count: matched,
                        primary_symptoms_matched: primary_exact,
                        recommendations: recommendations::generate_recommendations(
                            &disease.code,
                            scored.probability,
                        ),
                    },
                    matching_symptoms: scored.matching_symptoms,
                })
            })
            .collect();

        candidates.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        candidates.truncate(MAX_CANDIDATES);
        candidates
    }
}

fn passes_threshold(probability: f64) -> bool {
    probability > PROBABILITY_THRESHOLD
}

impl SymptomAnalyzer for DiagnosticEngine {
    fn analyze_symptoms_report(&self, report: &str) -> Vec<DiagnosticCandidate> {
        self.analyze(report).into_candidates()
    }

    fn analyze(&self, report: &str) -> DiagnosticOutcome {
        if let Some(reason) = Self::validate(report) {
            tracing::debug!(?reason, "Symptom report rejected");
            return DiagnosticOutcome::Rejected { reason };
        }

        let start = Instant::now();
        let extracted = self.lexicon.extract(report);
        let candidates = self.rank(&extracted);

        tracing::debug!(
            symptoms = extracted.len(),
            candidates = candidates.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Symptom report analyzed"
        );

        let symptoms_found: Vec<String> = extracted.into_iter().collect();
        if candidates.is_empty() {
            DiagnosticOutcome::NoMatch { symptoms_found }
        } else {
            DiagnosticOutcome::Ranked {
                symptoms_found,
                candidates,
            }
        }
    }

    fn analyze_report_advanced(&self, report: &str) -> AdvancedAnalysis {
        let extracted = self.lexicon.extract(report);
        let candidates = self.analyze_symptoms_report(report);

        let severity = assess_severity(&extracted, &candidates);
        let urgency = assess_urgency(&extracted, &candidates);
        let recommendations = candidates
            .first()
            .map(|top| top.metadata.recommendations.clone())
            .unwrap_or_default();

        AdvancedAnalysis {
            symptoms_extracted: extracted.into_iter().collect(),
            possible_diagnoses: candidates
                .iter()
                .map(|c| PossibleDiagnosis {
                    code: c.code.clone(),
                    name: c.name.clone(),
                    probability: c.probability,
                    confidence: c.confidence,
                })
                .collect(),
            severity,
            urgency,
            recommendations,
            follow_up_needed: true,
        }
    }

    fn generate_recommendations(&self, code: &str, probability: f64) -> Vec<String> {
        recommendations::generate_recommendations(code, probability)
    }
}
