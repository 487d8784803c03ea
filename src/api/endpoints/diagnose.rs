//! Diagnosis endpoints.
//!
//! - `POST /api/diagnose/symptoms`: free-text report
//! - `POST /api/diagnose/objective_symptoms`: symptoms picked from a list
//! - `POST /api/diagnose/advanced`: ranking plus severity and urgency
//! - `GET /api/recommendations/:code`: advice for a code and probability

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::extract::{ApiJson, ApiQuery};
use crate::api::types::ApiContext;
use crate::diagnosis::codes::normalize_code;
use crate::diagnosis::engine::MIN_REPORT_CHARS;
use crate::diagnosis::{
    render_medical_report, symptom_list_to_report, AdvancedAnalysis, DiagnosticCandidate,
    DiagnosticOutcome, SymptomAnalyzer,
};
use crate::symptoms::CombinationMatch;

/// Advanced analysis expects a fuller narrative than a symptom list.
pub const MIN_ADVANCED_REPORT_CHARS: usize = 20;

// ---------------------------------------------------------------------------
// Shared response pieces
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RankedDiagnosis {
    #[serde(flatten)]
    pub candidate: DiagnosticCandidate,
    pub probability_percent: f64,
}

impl From<DiagnosticCandidate> for RankedDiagnosis {
    fn from(candidate: DiagnosticCandidate) -> Self {
        Self {
            probability_percent: candidate.probability_percent(),
            candidate,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiagnoseResponse {
    /// `"ranked"` or `"no_match"`.
    pub status: &'static str,
    pub original_symptoms: String,
    pub symptoms_found: Vec<String>,
    pub diagnostic_results: Vec<RankedDiagnosis>,
    pub total_diagnoses: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_report: Option<String>,
}

/// Run the engine and shape the response. Rejected text is a client error.
fn diagnose(
    ctx: &ApiContext,
    text: &str,
    include_report: bool,
) -> Result<DiagnoseResponse, ApiError> {
    let outcome = ctx.engine.analyze(text);
    if matches!(outcome, DiagnosticOutcome::Rejected { .. }) {
        return Err(ApiError::BadRequest(format!(
            "Relatório de sintomas deve ter pelo menos {MIN_REPORT_CHARS} caracteres"
        )));
    }

    let status = outcome.status();
    let symptoms_found = outcome.symptoms_found().to_vec();
    let candidates = outcome.into_candidates();

    let medical_report = (include_report && !candidates.is_empty()).then(|| {
        render_medical_report(&candidates, text, chrono::Local::now().naive_local())
    });

    Ok(DiagnoseResponse {
        status,
        original_symptoms: text.trim().to_string(),
        symptoms_found,
        total_diagnoses: candidates.len(),
        diagnostic_results: candidates.into_iter().map(RankedDiagnosis::from).collect(),
        medical_report,
    })
}

// ---------------------------------------------------------------------------
// Free-text report
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SymptomsReportRequest {
    #[serde(default)]
    pub symptoms_report: String,
    #[serde(default)]
    pub include_report: bool,
}

/// `POST /api/diagnose/symptoms`
pub async fn symptoms(
    State(ctx): State<ApiContext>,
    ApiJson(req): ApiJson<SymptomsReportRequest>,
) -> Result<Json<DiagnoseResponse>, ApiError> {
    Ok(Json(diagnose(&ctx, &req.symptoms_report, req.include_report)?))
}

// ---------------------------------------------------------------------------
// Selected symptom list
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ObjectiveSymptomsRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub include_report: bool,
}

#[derive(Debug, Serialize)]
pub struct ObjectiveDiagnoseResponse {
    #[serde(flatten)]
    pub diagnosis: DiagnoseResponse,
    pub selected_symptoms: Vec<String>,
    pub symptom_validation: Vec<CombinationMatch>,
}

/// `POST /api/diagnose/objective_symptoms`
pub async fn objective_symptoms(
    State(ctx): State<ApiContext>,
    ApiJson(req): ApiJson<ObjectiveSymptomsRequest>,
) -> Result<Json<ObjectiveDiagnoseResponse>, ApiError> {
    if req.symptoms.iter().all(|s| s.trim().is_empty()) {
        return Err(ApiError::BadRequest("Lista de sintomas é obrigatória".into()));
    }

    let text = symptom_list_to_report(&req.symptoms);
    let diagnosis = diagnose(&ctx, &text, req.include_report)?;

    Ok(Json(ObjectiveDiagnoseResponse {
        diagnosis,
        symptom_validation: ctx.selector.validate_combination(&req.symptoms),
        selected_symptoms: req.symptoms,
    }))
}

// ---------------------------------------------------------------------------
// Advanced analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AdvancedRequest {
    #[serde(default)]
    pub report: String,
}

#[derive(Debug, Serialize)]
pub struct AdvancedResponse {
    pub original_report: String,
    pub analysis: AdvancedAnalysis,
}

/// `POST /api/diagnose/advanced`
pub async fn advanced(
    State(ctx): State<ApiContext>,
    ApiJson(req): ApiJson<AdvancedRequest>,
) -> Result<Json<AdvancedResponse>, ApiError> {
    let report = req.report.trim();
    if report.chars().count() < MIN_ADVANCED_REPORT_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Laudo médico deve ter pelo menos {MIN_ADVANCED_REPORT_CHARS} caracteres"
        )));
    }

    Ok(Json(AdvancedResponse {
        analysis: ctx.engine.analyze_report_advanced(report),
        original_report: report.to_string(),
    }))
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub probability: f64,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub code: String,
    pub probability: f64,
    pub recommendations: Vec<String>,
}

/// `GET /api/recommendations/:code?probability=0.75`
pub async fn recommendations(
    State(ctx): State<ApiContext>,
    Path(code): Path<String>,
    ApiQuery(query): ApiQuery<RecommendationQuery>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    if !(0.0..=1.0).contains(&query.probability) {
        return Err(ApiError::BadRequest("probability deve estar entre 0 e 1".into()));
    }

    let code = normalize_code(&code);
    Ok(Json(RecommendationResponse {
        recommendations: ctx.engine.generate_recommendations(&code, query.probability),
        probability: query.probability,
        code,
    }))
}
