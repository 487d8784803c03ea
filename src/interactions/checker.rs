use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::reference::InteractionReference;
use super::types::{
    DrugInteraction, InteractionFinding, InteractionSummary, RiskLevel, Severity,
    SeverityBreakdown, NO_SEVERITY_LABEL,
};

static RE_DOSAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s*mg|\d+\s*g|\d+\s*ml").unwrap());

static RE_DOSAGE_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"comprimido|cápsula|solução|xarope|gotas").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const GENERAL_RECOMMENDATIONS: [&str; 4] = [
    "Mantenha uma lista atualizada de todos os seus medicamentos.",
    "Sempre informe médicos e farmacêuticos sobre todos os medicamentos em uso.",
    "Respeite horários e doses prescritas.",
    "Nunca pare ou altere medicamentos sem orientação médica.",
];

/// Looks up known pairwise interactions in a medication list.
pub struct InteractionChecker {
    /// Normalized alias or generic name → generic name.
    generics: HashMap<String, String>,
    /// Unordered generic pair → index into `interactions`.
    pairs: HashMap<(String, String), usize>,
    interactions: Vec<DrugInteraction>,
    alternatives: HashMap<String, Vec<String>>,
}

impl InteractionChecker {
    pub fn new(reference: InteractionReference) -> Self {
        let mut generics = HashMap::new();
        for entry in &reference.aliases {
            let generic = clean_name(&entry.generic);
            for alias in &entry.aliases {
                generics
                    .entry(clean_name(alias))
                    .or_insert_with(|| generic.clone());
            }
            generics.insert(generic.clone(), generic);
        }

        let mut pairs = HashMap::new();
        for (i, record) in reference.interactions.iter().enumerate() {
            let key = pair_key(&clean_name(&record.drug1), &clean_name(&record.drug2));
            if pairs.insert(key, i).is_some() {
                tracing::warn!(
                    drug1 = %record.drug1,
                    drug2 = %record.drug2,
                    "Duplicate interaction record, keeping the last one"
                );
            }
        }

        let alternatives = reference
            .alternatives
            .into_iter()
            .map(|entry| (clean_name(&entry.drug), entry.alternatives))
            .collect();

        tracing::debug!(
            aliases = generics.len(),
            interactions = pairs.len(),
            "Interaction checker ready"
        );

        Self {
            generics,
            pairs,
            interactions: reference.interactions,
            alternatives,
        }
    }

    /// Lower-case, strip dosage and dosage form, and resolve brand names to
    /// the generic name. Unknown names come back cleaned but unresolved.
    pub fn normalize_drug_name(&self, name: &str) -> String {
        let cleaned = clean_name(name);
        match self.generics.get(&cleaned) {
            Some(generic) => generic.clone(),
            None => cleaned,
        }
    }

    /// Every known interaction between pairs of `medications`, most severe
    /// first. Pairs keep list order among equal severities.
    pub fn check(&self, medications: &[String]) -> Vec<InteractionFinding> {
        if medications.len() < 2 {
            return Vec::new();
        }

        let generics: Vec<String> = medications
            .iter()
            .map(|m| self.normalize_drug_name(m))
            .collect();

        let mut findings = Vec::new();
        for i in 0..medications.len() {
            for j in (i + 1)..medications.len() {
                let Some(&index) = self.pairs.get(&pair_key(&generics[i], &generics[j])) else {
                    continue;
                };
                let record = &self.interactions[index];
                findings.push(InteractionFinding {
                    drug1: medications[i].clone(),
                    drug2: medications[j].clone(),
                    drug1_generic: generics[i].clone(),
                    drug2_generic: generics[j].clone(),
                    details: record.details.clone(),
                    risk_level: record.risk_level(),
                });
            }
        }

        findings.sort_by(|a, b| b.details.severity.cmp(&a.details.severity));

        tracing::debug!(
            medications = medications.len(),
            interactions = findings.len(),
            "Medication list checked"
        );
        findings
    }

    pub fn risk_level(&self, interaction: &DrugInteraction) -> RiskLevel {
        interaction.risk_level()
    }

    pub fn summary(&self, medications: &[String]) -> InteractionSummary {
        let interactions = self.check(medications);

        let mut severity_breakdown = SeverityBreakdown::default();
        for finding in &interactions {
            severity_breakdown.record(finding.details.severity);
        }
        let highest = severity_breakdown.highest();

        InteractionSummary {
            total_medications: medications.len(),
            total_interactions: interactions.len(),
            highest_severity: highest
                .map(|s| s.as_str().to_string())
                .unwrap_or_else(|| NO_SEVERITY_LABEL.to_string()),
            requires_immediate_attention: highest
                .is_some_and(|s| s.requires_immediate_attention()),
            general_recommendations: if interactions.is_empty() {
                Vec::new()
            } else {
                general_recommendations(&severity_breakdown)
            },
            severity_breakdown,
            interactions,
        }
    }

    /// Substitutes for a drug, after name normalization.
    pub fn alternatives(&self, drug: &str) -> Vec<String> {
        self.alternatives
            .get(&self.normalize_drug_name(drug))
            .cloned()
            .unwrap_or_default()
    }
}

fn clean_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let without_dose = RE_DOSAGE.replace_all(&lowered, "");
    let without_form = RE_DOSAGE_FORM.replace_all(&without_dose, "");
    RE_WHITESPACE
        .replace_all(without_form.trim(), " ")
        .into_owned()
}

/// Order-independent key for a drug pair.
fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

fn general_recommendations(breakdown: &SeverityBreakdown) -> Vec<String> {
    let mut recommendations: Vec<&str> = Vec::new();

    if breakdown.count(Severity::Contraindicada) > 0 {
        recommendations.push(
            "ATENÇÃO: Foram encontradas interações CONTRAINDICADAS. Contate imediatamente seu médico.",
        );
        recommendations.push("Não tome estes medicamentos juntos sem orientação médica urgente.");
    }
    if breakdown.count(Severity::Grave) > 0 {
        recommendations.push(
            "Interações GRAVES detectadas. Consulte seu médico antes de continuar o tratamento.",
        );
        recommendations.push("Pode ser necessário ajustar doses ou substituir medicamentos.");
    }
    if breakdown.count(Severity::Moderada) > 0 {
        recommendations
            .push("Interações MODERADAS encontradas. Monitoramento médico é recomendado.");
        recommendations
            .push("Informe seu médico sobre todos os medicamentos que você está tomando.");
    }

    recommendations.extend(GENERAL_RECOMMENDATIONS);
    recommendations.into_iter().map(String::from).collect()
}
