//! `POST /api/diagnose/comprehensive`: symptom ranking and medication
//! interaction check in one call, with combined advice.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::endpoints::diagnose::RankedDiagnosis;
use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::diagnosis::engine::MIN_REPORT_CHARS;
use crate::diagnosis::{render_medical_report, DiagnosticCandidate, SymptomAnalyzer};
use crate::interactions::{render_interaction_report, InteractionSummary};

const MIN_MEDICATIONS: usize = 2;
/// Top candidates above this percentage are named in the combined advice.
const PROBABLE_DIAGNOSIS_PERCENT: f64 = 50.0;

const INTERACTION_WARNING: &str = "ATENÇÃO: Interações medicamentosas graves detectadas";
const FIXED_RECOMMENDATIONS: [&str; 3] = [
    "Consulte um médico para avaliação completa",
    "Mantenha lista atualizada de medicamentos",
    "Monitore sintomas e efeitos adversos",
];

#[derive(Debug, Deserialize)]
pub struct ComprehensiveRequest {
    #[serde(default)]
    pub symptoms_report: String,
    #[serde(default)]
    pub current_medications: Vec<String>,
    #[serde(default)]
    pub include_reports: bool,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticAnalysis {
    pub symptoms_report: String,
    pub diagnostic_results: Vec<RankedDiagnosis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_report: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InteractionAnalysis {
    pub medications: Vec<String>,
    pub summary: InteractionSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_report: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ComprehensiveResponse {
    pub analysis_type: &'static str,
    pub timestamp: String,
    /// Absent when the report is shorter than the diagnosis minimum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic_analysis: Option<DiagnosticAnalysis>,
    /// Absent with fewer than two medications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction_analysis: Option<InteractionAnalysis>,
    pub integrated_recommendations: Vec<String>,
}

pub async fn comprehensive(
    State(ctx): State<ApiContext>,
    ApiJson(req): ApiJson<ComprehensiveRequest>,
) -> Result<Json<ComprehensiveResponse>, ApiError> {
    let report = req.symptoms_report.trim();
    let medications: Vec<String> = req
        .current_medications
        .into_iter()
        .filter(|m| !m.trim().is_empty())
        .collect();

    if report.is_empty() && medications.is_empty() {
        return Err(ApiError::BadRequest(
            "Relatório de sintomas ou lista de medicamentos é obrigatória".into(),
        ));
    }

    let now = chrono::Local::now();

    let diagnostic_analysis = (report.chars().count() >= MIN_REPORT_CHARS).then(|| {
        let candidates = ctx.engine.analyze_symptoms_report(report);
        let medical_report = (req.include_reports && !candidates.is_empty())
            .then(|| render_medical_report(&candidates, report, now.naive_local()));
        DiagnosticAnalysis {
            symptoms_report: report.to_string(),
            diagnostic_results: candidates.into_iter().map(RankedDiagnosis::from).collect(),
            medical_report,
        }
    });

    let interaction_analysis = (medications.len() >= MIN_MEDICATIONS).then(|| {
        let summary = ctx.interactions.summary(&medications);
        let detailed_report = req
            .include_reports
            .then(|| render_interaction_report(&medications, &summary));
        InteractionAnalysis {
            medications,
            summary,
            detailed_report,
        }
    });

    let integrated_recommendations = integrated_recommendations(
        diagnostic_analysis
            .as_ref()
            .and_then(|d| d.diagnostic_results.first())
            .map(|top| &top.candidate),
        interaction_analysis.as_ref().map(|i| &i.summary),
    );

    tracing::debug!(
        diagnosed = diagnostic_analysis.is_some(),
        interactions_checked = interaction_analysis.is_some(),
        "Comprehensive analysis done"
    );

    Ok(Json(ComprehensiveResponse {
        analysis_type: "comprehensive",
        timestamp: now.to_rfc3339(),
        diagnostic_analysis,
        interaction_analysis,
        integrated_recommendations,
    }))
}

fn integrated_recommendations(
    top: Option<&DiagnosticCandidate>,
    summary: Option<&InteractionSummary>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let Some(top) = top.filter(|c| c.probability_percent() > PROBABLE_DIAGNOSIS_PERCENT) {
        recommendations.push(format!(
            "Diagnóstico provável: {} (CID: {})",
            top.name, top.code
        ));
    }
    if summary.is_some_and(|s| s.requires_immediate_attention) {
        recommendations.push(INTERACTION_WARNING.to_string());
    }

    recommendations.extend(FIXED_RECOMMENDATIONS.iter().map(|r| r.to_string()));
    recommendations
}
