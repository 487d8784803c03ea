use std::collections::HashMap;

use crate::diagnosis::catalog::DiseaseCatalog;
use crate::diagnosis::codes::{chapter_title, normalize_code};
use crate::diagnosis::extraction::normalize_text;

use super::reference::SymptomReference;
use super::types::{
    CategoryGroup, CategoryMatch, CombinationMatch, MatchedDisease, SymptomAnalysis,
    SymptomCategory, SymptomError,
};

const CONFIDENCE_PER_SYMPTOM: u32 = 25;
const MAX_CONFIDENCE: u32 = 100;
const RELATED_SOURCE_DISEASES: usize = 5;
const MAX_RELATED_SYMPTOMS: usize = 10;
const MAX_ANALYSIS_DISEASES: usize = 10;
const MIN_COMBINATION_MATCHES: usize = 2;

const NO_DISEASE_SUMMARY: &str =
    "Nenhuma doença específica encontrada para os sintomas selecionados.";

/// Service for users who pick symptoms from a fixed list instead of writing
/// a report.
///
/// Selected symptoms are compared case-insensitively against the reference
/// table; unknown symptoms are ignored.
pub struct SymptomSelector {
    reference: SymptomReference,
    /// Normalized symptom → index into `reference.symptom_diseases`.
    symptom_index: HashMap<String, usize>,
    /// Code → display name, from the CID index with the catalog filling gaps.
    disease_names: HashMap<String, String>,
}

impl SymptomSelector {
    pub fn new(reference: SymptomReference, catalog: &DiseaseCatalog) -> Self {
        let mut symptom_index = HashMap::new();
        for (i, link) in reference.symptom_diseases.iter().enumerate() {
            symptom_index.entry(normalize_text(&link.symptom)).or_insert(i);
        }

        let mut disease_names: HashMap<String, String> = reference
            .disease_index
            .iter()
            .map(|entry| (normalize_code(&entry.code), entry.name.clone()))
            .collect();
        for disease in catalog.iter() {
            disease_names
                .entry(disease.code.clone())
                .or_insert_with(|| disease.name.clone());
        }

        tracing::debug!(
            symptoms = symptom_index.len(),
            diseases = disease_names.len(),
            "Symptom selector ready"
        );

        Self {
            reference,
            symptom_index,
            disease_names,
        }
    }

    /// Display name for a code known to the CID index or the catalog.
    pub fn disease_name(&self, code: &str) -> Option<&str> {
        self.disease_names
            .get(&normalize_code(code))
            .map(String::as_str)
    }

    pub fn categories(&self) -> &[SymptomCategory] {
        &self.reference.categories
    }

    /// Case-insensitive substring search over category symptoms.
    pub fn search(&self, query: &str) -> Vec<CategoryMatch> {
        let needle = normalize_text(query);
        if needle.is_empty() {
            return Vec::new();
        }

        self.reference
            .categories
            .iter()
            .filter_map(|category| {
                let symptoms: Vec<String> = category
                    .symptoms
                    .iter()
                    .filter(|s| s.to_lowercase().contains(&needle))
                    .cloned()
                    .collect();
                (!symptoms.is_empty()).then(|| CategoryMatch {
                    category: category.name.clone(),
                    symptoms,
                })
            })
            .collect()
    }

    /// Count, per code, how many selected symptoms point to it.
    ///
    /// Codes absent from the disease index are dropped. Ties keep the order
    /// in which codes were first reached.
    pub fn diseases_by_symptoms(&self, symptoms: &[String]) -> Vec<MatchedDisease> {
        let mut order: Vec<String> = Vec::new();
        let mut hits: HashMap<String, Vec<String>> = HashMap::new();

        for selected in symptoms {
            let Some(&i) = self.symptom_index.get(&normalize_text(selected)) else {
                continue;
            };
            let link = &self.reference.symptom_diseases[i];
            for code in &link.codes {
                let code = normalize_code(code);
                let matched = hits.entry(code.clone()).or_insert_with(|| {
                    order.push(code.clone());
                    Vec::new()
                });
                matched.push(link.symptom.clone());
            }
        }

        let mut diseases: Vec<MatchedDisease> = order
            .into_iter()
            .filter_map(|code| {
                let name = self.disease_names.get(&code)?.clone();
                let matching_symptoms = hits.remove(&code)?;
                let score = matching_symptoms.len();
                Some(MatchedDisease {
                    category: chapter_title(&code).to_string(),
                    confidence: (score as u32 * CONFIDENCE_PER_SYMPTOM).min(MAX_CONFIDENCE),
                    code,
                    name,
                    score,
                    matching_symptoms,
                })
            })
            .collect();

        diseases.sort_by(|a, b| b.score.cmp(&a.score));
        diseases
    }

    /// Reference symptoms linked to a code, in table order.
    pub fn symptoms_by_disease(&self, code: &str) -> Vec<String> {
        let code = normalize_code(code);
        self.reference
            .symptom_diseases
            .iter()
            .filter(|link| link.codes.iter().any(|c| normalize_code(c) == code))
            .map(|link| link.symptom.clone())
            .collect()
    }

    /// Other symptoms of the best-matching diseases, for "did you also
    /// notice…" prompts.
    pub fn related_symptoms(&self, selected: &[String]) -> Vec<String> {
        let chosen: Vec<String> = selected.iter().map(|s| normalize_text(s)).collect();
        let mut related: Vec<String> = Vec::new();

        for disease in self
            .diseases_by_symptoms(selected)
            .iter()
            .take(RELATED_SOURCE_DISEASES)
        {
            for symptom in self.symptoms_by_disease(&disease.code) {
                if !chosen.contains(&normalize_text(&symptom)) && !related.contains(&symptom) {
                    related.push(symptom);
                }
            }
        }

        related.truncate(MAX_RELATED_SYMPTOMS);
        related
    }

    pub fn analyze(&self, symptoms: &[String]) -> Result<SymptomAnalysis, SymptomError> {
        if symptoms.iter().all(|s| s.trim().is_empty()) {
            return Err(SymptomError::EmptySelection);
        }

        let diseases = self.diseases_by_symptoms(symptoms);

        let mut category_analysis: Vec<CategoryGroup> = Vec::new();
        for disease in &diseases {
            match category_analysis
                .iter_mut()
                .find(|group| group.category == disease.category)
            {
                Some(group) => group.diseases.push(disease.clone()),
                None => category_analysis.push(CategoryGroup {
                    category: disease.category.clone(),
                    diseases: vec![disease.clone()],
                }),
            }
        }

        let analysis_summary = summarize(&diseases);
        let total_matches = diseases.len();
        let mut related_diseases = diseases;
        related_diseases.truncate(MAX_ANALYSIS_DISEASES);

        Ok(SymptomAnalysis {
            selected_symptoms: symptoms.to_vec(),
            related_diseases,
            category_analysis,
            suggested_symptoms: self.related_symptoms(symptoms),
            total_matches,
            analysis_summary,
        })
    }

    /// Known clinical pictures with at least two selected members.
    pub fn validate_combination(&self, symptoms: &[String]) -> Vec<CombinationMatch> {
        let chosen: Vec<String> = symptoms.iter().map(|s| normalize_text(s)).collect();

        let mut matches: Vec<CombinationMatch> = self
            .reference
            .combinations
            .iter()
            .filter(|combo| !combo.symptoms.is_empty())
            .filter_map(|combo| {
                let matching = combo
                    .symptoms
                    .iter()
                    .filter(|s| chosen.contains(&normalize_text(s)))
                    .count();
                (matching >= MIN_COMBINATION_MATCHES).then(|| CombinationMatch {
                    condition: combo.condition.clone(),
                    matching_symptoms: matching,
                    total_symptoms: combo.symptoms.len(),
                    confidence: matching as f64 / combo.symptoms.len() as f64 * 100.0,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        matches
    }
}

fn summarize(diseases: &[MatchedDisease]) -> String {
    let Some(top) = diseases.first() else {
        return NO_DISEASE_SUMMARY.to_string();
    };

    let level = match top.confidence {
        c if c >= 75 => "alta",
        c if c >= 50 => "moderada",
        _ => "baixa",
    };

    format!(
        "Com base nos sintomas selecionados, foi encontrada uma correspondência de {level} confiança \
         com '{}' ({}). Esta doença está na categoria '{}' e apresenta {} sintomas compatíveis.",
        top.name,
        top.code,
        top.category,
        top.matching_symptoms.len()
    )
}
