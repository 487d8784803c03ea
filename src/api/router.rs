//! HTTP router.
//!
//! Feature routes are nested under `/api/`; `/health` sits at the root.
//! Unknown paths get the same JSON error body as handler failures.

use axum::http::Uri;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;

/// Build the application router over a shared context.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/diagnose/symptoms", post(endpoints::diagnose::symptoms))
        .route(
            "/diagnose/objective_symptoms",
            post(endpoints::diagnose::objective_symptoms),
        )
        .route("/diagnose/advanced", post(endpoints::diagnose::advanced))
        .route(
            "/diagnose/comprehensive",
            post(endpoints::comprehensive::comprehensive),
        )
        .route(
            "/recommendations/:code",
            get(endpoints::diagnose::recommendations),
        )
        .route("/diseases/:code", get(endpoints::diseases::detail))
        .route("/symptoms/categories", get(endpoints::symptoms::categories))
        .route("/symptoms/search", post(endpoints::symptoms::search))
        .route("/symptoms/analyze", post(endpoints::symptoms::analyze))
        .route("/symptoms/related", post(endpoints::symptoms::related))
        .route("/symptoms/diseases", post(endpoints::symptoms::diseases))
        .route("/symptoms/validate", post(endpoints::symptoms::validate))
        .route(
            "/symptoms/disease/:code",
            get(endpoints::symptoms::by_disease),
        )
        .route("/interactions/check", post(endpoints::interactions::check))
        .route(
            "/interactions/alternatives",
            post(endpoints::interactions::alternatives),
        );

    Router::new()
        .route("/health", get(endpoints::health::check))
        .nest("/api", api)
        .fallback(not_found)
        .with_state(ctx)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Rota não encontrada: {}", uri.path()))
}
