//! Plain-text rendering of ranked candidates.

use std::fmt::Write;

use chrono::NaiveDateTime;

use super::types::DiagnosticCandidate;

/// Number of candidates listed in the rendered report.
pub const REPORT_CANDIDATES: usize = 3;

pub const NO_DIAGNOSIS_MESSAGE: &str =
    "Não foi possível identificar um diagnóstico provável baseado nos sintomas relatados.";

const DISCLAIMER: [&str; 4] = [
    "Este relatório é baseado em análise automatizada de sintomas",
    "Não substitui consulta médica presencial",
    "Procure atendimento médico para diagnóstico definitivo",
    "Em caso de emergência, procure atendimento imediato",
];

const RULE_WIDTH: usize = 50;

/// Render a Portuguese report for the top candidates.
pub fn render_medical_report(
    candidates: &[DiagnosticCandidate],
    original_text: &str,
    generated_at: NaiveDateTime,
) -> String {
    if candidates.is_empty() {
        return NO_DIAGNOSIS_MESSAGE.to_string();
    }

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, candidates, original_text, generated_at);
    out
}

fn write_report(
    out: &mut String,
    candidates: &[DiagnosticCandidate],
    original_text: &str,
    generated_at: NaiveDateTime,
) -> std::fmt::Result {
    writeln!(out, "RELATÓRIO DE ANÁLISE DE SINTOMAS")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Gerado em: {}", generated_at.format("%d/%m/%Y %H:%M"))?;
    writeln!(out)?;

    writeln!(out, "SINTOMAS RELATADOS:")?;
    writeln!(out, "{}", original_text.trim())?;
    writeln!(out)?;

    writeln!(out, "DIAGNÓSTICOS PROVÁVEIS:")?;
    writeln!(out)?;

    for (i, candidate) in candidates.iter().take(REPORT_CANDIDATES).enumerate() {
        writeln!(out, "{}. {} (CID: {})", i + 1, candidate.name, candidate.code)?;
        writeln!(out, "   Probabilidade: {:.1}%", candidate.probability * 100.0)?;
        writeln!(out, "   Confiança: {}", candidate.confidence.title())?;
        writeln!(
            out,
            "   Sintomas correspondentes: {}",
            candidate.matching_symptoms.join(", ")
        )?;
        if !candidate.metadata.recommendations.is_empty() {
            writeln!(out, "   Recomendações:")?;
            for rec in &candidate.metadata.recommendations {
                writeln!(out, "   - {rec}")?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "OBSERVAÇÕES IMPORTANTES:")?;
    for line in DISCLAIMER {
        writeln!(out, "- {line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::types::{CandidateMetadata, ConfidenceLevel};
    use chrono::NaiveDate;

    fn candidate(code: &str, probability: f64) -> DiagnosticCandidate {
        DiagnosticCandidate {
            code: code.into(),
            name: format!("Doença {code}"),
            probability,
            matching_symptoms: vec!["tontura".into(), "dor de cabeça".into()],
            confidence: ConfidenceLevel::Media,
            metadata: CandidateMetadata {
                total_symptoms_found: 2,
                matching_symptoms_count: 2,
                primary_symptoms_matched: 2,
                recommendations: vec!["Monitore a evolução dos sintomas".into()],
            },
        }
    }

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn empty_candidates_single_line() {
        assert_eq!(
            render_medical_report(&[], "qualquer coisa", at()),
            NO_DIAGNOSIS_MESSAGE
        );
    }

    #[test]
    fn lists_at_most_three_candidates() {
        let candidates: Vec<_> = ["I10", "J18", "K29", "F41"]
            .iter()
            .map(|c| candidate(c, 0.5))
            .collect();
        let report = render_medical_report(&candidates, "tontura", at());
        assert!(report.contains("3. Doença K29 (CID: K29)"));
        assert!(!report.contains("F41"));
    }

    #[test]
    fn formats_percent_and_confidence() {
        let report = render_medical_report(&[candidate("I10", 0.4567)], "tontura", at());
        assert!(report.contains("Probabilidade: 45.7%"));
        assert!(report.contains("Confiança: Média"));
        assert!(report.contains("Sintomas correspondentes: tontura, dor de cabeça"));
        assert!(report.contains("   - Monitore a evolução dos sintomas"));
        assert!(report.contains("Gerado em: 15/03/2024 14:30"));
    }

    #[test]
    fn ends_with_disclaimer() {
        let report = render_medical_report(&[candidate("I10", 0.9)], "tontura", at());
        assert!(report.contains("OBSERVAÇÕES IMPORTANTES:"));
        assert!(report
            .trim_end()
            .ends_with("- Em caso de emergência, procure atendimento imediato"));
    }
}
