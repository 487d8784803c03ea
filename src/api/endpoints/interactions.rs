//! Drug-interaction endpoints under `/api/interactions`.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::interactions::{render_interaction_report, InteractionSummary};

const MIN_MEDICATIONS: usize = 2;

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub include_report: bool,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub medications: Vec<String>,
    pub summary: InteractionSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_report: Option<String>,
}

/// `POST /api/interactions/check`
pub async fn check(
    State(ctx): State<ApiContext>,
    ApiJson(req): ApiJson<CheckRequest>,
) -> Result<Json<CheckResponse>, ApiError> {
    let medications: Vec<String> = req
        .medications
        .into_iter()
        .filter(|m| !m.trim().is_empty())
        .collect();
    if medications.len() < MIN_MEDICATIONS {
        return Err(ApiError::BadRequest(
            "Pelo menos 2 medicamentos são necessários".into(),
        ));
    }

    let summary = ctx.interactions.summary(&medications);
    let detailed_report = req
        .include_report
        .then(|| render_interaction_report(&medications, &summary));

    Ok(Json(CheckResponse {
        medications,
        summary,
        detailed_report,
    }))
}

#[derive(Debug, Deserialize)]
pub struct AlternativesRequest {
    #[serde(default)]
    pub drug_name: String,
}

#[derive(Debug, Serialize)]
pub struct AlternativesResponse {
    pub original_drug: String,
    pub generic_name: String,
    pub alternatives: Vec<String>,
    pub total_alternatives: usize,
}

/// `POST /api/interactions/alternatives`
pub async fn alternatives(
    State(ctx): State<ApiContext>,
    ApiJson(req): ApiJson<AlternativesRequest>,
) -> Result<Json<AlternativesResponse>, ApiError> {
    let drug = req.drug_name.trim();
    if drug.is_empty() {
        return Err(ApiError::BadRequest(
            "Nome do medicamento é obrigatório".into(),
        ));
    }

    let alternatives = ctx.interactions.alternatives(drug);
    Ok(Json(AlternativesResponse {
        original_drug: drug.to_string(),
        generic_name: ctx.interactions.normalize_drug_name(drug),
        total_alternatives: alternatives.len(),
        alternatives,
    }))
}
