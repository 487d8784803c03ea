use std::fmt::Write;

use super::types::{InteractionSummary, Severity};

const RULE_WIDTH: usize = 50;

/// Plain-text report for a checked medication list.
pub fn render_interaction_report(medications: &[String], summary: &InteractionSummary) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, medications, summary);
    out
}

fn write_report(
    out: &mut String,
    medications: &[String],
    summary: &InteractionSummary,
) -> std::fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "RELATÓRIO DE INTERAÇÕES MEDICAMENTOSAS")?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;

    writeln!(out, "MEDICAMENTOS ANALISADOS ({}):", summary.total_medications)?;
    for (i, med) in medications.iter().enumerate() {
        writeln!(out, "{}. {med}", i + 1)?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "TOTAL DE INTERAÇÕES ENCONTRADAS: {}",
        summary.total_interactions
    )?;
    writeln!(out)?;

    if summary.interactions.is_empty() {
        writeln!(out, "Nenhuma interação medicamentosa conhecida foi encontrada.")?;
        writeln!(out, "Continue seguindo as orientações médicas e farmacêuticas.")?;
    } else {
        writeln!(out, "RESUMO POR GRAVIDADE:")?;
        for severity in Severity::DESCENDING {
            let count = summary.severity_breakdown.count(severity);
            if count > 0 {
                writeln!(out, "- {}: {count} interação(ões)", severity.as_str())?;
            }
        }
        writeln!(out)?;

        writeln!(out, "DETALHES DAS INTERAÇÕES:")?;
        writeln!(out)?;
        for (i, finding) in summary.interactions.iter().enumerate() {
            let d = &finding.details;
            writeln!(out, "{}. {} + {}", i + 1, finding.drug1, finding.drug2)?;
            writeln!(out, "   Gravidade: {}", d.severity.as_str())?;
            writeln!(out, "   Risco: {}", finding.risk_level.as_str())?;
            writeln!(out, "   Mecanismo: {}", d.mechanism)?;
            writeln!(out, "   Efeitos Clínicos:")?;
            for effect in &d.clinical_effects {
                writeln!(out, "   - {effect}")?;
            }
            writeln!(out, "   Reações Adversas Possíveis:")?;
            for reaction in &d.adverse_reactions {
                writeln!(out, "   - {reaction}")?;
            }
            writeln!(out, "   Conduta: {}", d.management)?;
            writeln!(out, "   Monitoramento: {}", d.monitoring.join(", "))?;
            writeln!(out, "   Tempo de Início: {}", d.onset_time)?;
            writeln!(out, "   Nível de Evidência: {}", d.evidence_level)?;
            writeln!(out)?;
        }

        writeln!(out, "RECOMENDAÇÕES GERAIS:")?;
        for rec in &summary.general_recommendations {
            writeln!(out, "- {rec}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "IMPORTANTE: Este relatório é baseado em dados científicos disponíveis."
    )?;
    writeln!(
        out,
        "Sempre consulte seu médico ou farmacêutico para orientações personalizadas."
    )?;
    Ok(())
}
