//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub diseases_loaded: usize,
    pub symptoms_loaded: usize,
}

/// `GET /health`: liveness plus reference data sizes.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "ok",
        service: crate::config::APP_NAME,
        version: crate::config::APP_VERSION,
        diseases_loaded: ctx.engine.catalog().len(),
        symptoms_loaded: ctx.engine.lexicon().len(),
    }))
}
