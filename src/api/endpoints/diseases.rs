//! `GET /api/diseases/:code`: catalog details for one CID-10 code.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::diagnosis::codes::{chapter_title, is_valid_code, normalize_code};

#[derive(Debug, Serialize)]
pub struct DiseaseDetailResponse {
    pub code: String,
    pub name: String,
    pub category: &'static str,
    /// False for codes only known to the CID index; the symptom lists are
    /// empty then.
    pub in_catalog: bool,
    pub primary_symptoms: Vec<String>,
    pub secondary_symptoms: Vec<String>,
    pub risk_factors: Vec<String>,
    pub severity_indicators: Vec<String>,
    pub emergency_indicators: Vec<String>,
    /// Selectable symptoms that point to this code.
    pub linked_symptoms: Vec<String>,
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(code): Path<String>,
) -> Result<Json<DiseaseDetailResponse>, ApiError> {
    let code = normalize_code(&code);
    if !is_valid_code(&code) {
        return Err(ApiError::BadRequest(format!("Código CID inválido: {code}")));
    }

    let linked_symptoms = ctx.selector.symptoms_by_disease(&code);
    let category = chapter_title(&code);

    let response = match ctx.engine.catalog().get(&code) {
        Some(entry) => DiseaseDetailResponse {
            code: entry.code.clone(),
            name: entry.name.clone(),
            category,
            in_catalog: true,
            primary_symptoms: entry.primary_symptoms.clone(),
            secondary_symptoms: entry.secondary_symptoms.clone(),
            risk_factors: entry.risk_factors.clone(),
            severity_indicators: entry.severity_indicators.clone(),
            emergency_indicators: entry.emergency_indicators.clone(),
            linked_symptoms,
        },
        None => {
            let name = ctx
                .selector
                .disease_name(&code)
                .ok_or_else(|| ApiError::NotFound(format!("CID {code} não encontrado")))?
                .to_string();
            DiseaseDetailResponse {
                code,
                name,
                category,
                in_catalog: false,
                primary_symptoms: Vec::new(),
                secondary_symptoms: Vec::new(),
                risk_factors: Vec::new(),
                severity_indicators: Vec::new(),
                emergency_indicators: Vec::new(),
                linked_symptoms,
            }
        }
    };

    Ok(Json(response))
}
