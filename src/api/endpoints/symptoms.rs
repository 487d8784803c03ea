//! Selected-list symptom endpoints under `/api/symptoms`.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::diagnosis::codes::normalize_code;
use crate::symptoms::{
    CategoryMatch, CombinationMatch, MatchedDisease, SymptomAnalysis, SymptomCategory,
};

#[derive(Debug, Deserialize)]
pub struct SymptomListRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
}

impl SymptomListRequest {
    fn require_any(&self) -> Result<(), ApiError> {
        if self.symptoms.iter().all(|s| s.trim().is_empty()) {
            return Err(ApiError::BadRequest("Lista de sintomas é obrigatória".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<SymptomCategory>,
    pub total_categories: usize,
}

/// `GET /api/symptoms/categories`
pub async fn categories(
    State(ctx): State<ApiContext>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = ctx.selector.categories().to_vec();
    Ok(Json(CategoriesResponse {
        total_categories: categories.len(),
        categories,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<CategoryMatch>,
}

/// `POST /api/symptoms/search`
pub async fn search(
    State(ctx): State<ApiContext>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = req.query.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest("Termo de busca é obrigatório".into()));
    }

    Ok(Json(SearchResponse {
        results: ctx.selector.search(query),
        query: query.to_string(),
    }))
}

/// `POST /api/symptoms/analyze`
pub async fn analyze(
    State(ctx): State<ApiContext>,
    ApiJson(req): ApiJson<SymptomListRequest>,
) -> Result<Json<SymptomAnalysis>, ApiError> {
    Ok(Json(ctx.selector.analyze(&req.symptoms)?))
}

#[derive(Debug, Serialize)]
pub struct RelatedResponse {
    pub selected_symptoms: Vec<String>,
    pub related_symptoms: Vec<String>,
}

/// `POST /api/symptoms/related`
pub async fn related(
    State(ctx): State<ApiContext>,
    ApiJson(req): ApiJson<SymptomListRequest>,
) -> Result<Json<RelatedResponse>, ApiError> {
    req.require_any()?;
    Ok(Json(RelatedResponse {
        related_symptoms: ctx.selector.related_symptoms(&req.symptoms),
        selected_symptoms: req.symptoms,
    }))
}

#[derive(Debug, Serialize)]
pub struct DiseasesResponse {
    pub diseases: Vec<MatchedDisease>,
    pub total: usize,
}

/// `POST /api/symptoms/diseases`
pub async fn diseases(
    State(ctx): State<ApiContext>,
    ApiJson(req): ApiJson<SymptomListRequest>,
) -> Result<Json<DiseasesResponse>, ApiError> {
    req.require_any()?;
    let diseases = ctx.selector.diseases_by_symptoms(&req.symptoms);
    Ok(Json(DiseasesResponse {
        total: diseases.len(),
        diseases,
    }))
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub selected_symptoms: Vec<String>,
    pub possible_conditions: Vec<CombinationMatch>,
    pub suggested_symptoms: Vec<String>,
}

/// `POST /api/symptoms/validate`
pub async fn validate(
    State(ctx): State<ApiContext>,
    ApiJson(req): ApiJson<SymptomListRequest>,
) -> Result<Json<ValidateResponse>, ApiError> {
    req.require_any()?;
    Ok(Json(ValidateResponse {
        possible_conditions: ctx.selector.validate_combination(&req.symptoms),
        suggested_symptoms: ctx.selector.related_symptoms(&req.symptoms),
        selected_symptoms: req.symptoms,
    }))
}

#[derive(Debug, Serialize)]
pub struct DiseaseSymptomsResponse {
    pub code: String,
    pub symptoms: Vec<String>,
}

/// `GET /api/symptoms/disease/:code`
pub async fn by_disease(
    State(ctx): State<ApiContext>,
    Path(code): Path<String>,
) -> Result<Json<DiseaseSymptomsResponse>, ApiError> {
    let code = normalize_code(&code);
    Ok(Json(DiseaseSymptomsResponse {
        symptoms: ctx.selector.symptoms_by_disease(&code),
        code,
    }))
}
