pub mod api;
pub mod config;
pub mod diagnosis;
pub mod interactions;
pub mod symptoms;

use std::path::Path;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::{ApiContext, ServerError};
use crate::config::{ConfigError, ServerConfig};
use crate::diagnosis::{DiagnosisError, DiagnosisReferenceData};
use crate::interactions::{InteractionError, InteractionReference};
use crate::symptoms::{SymptomError, SymptomReference};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Diagnosis(#[from] DiagnosisError),
    #[error(transparent)]
    Symptoms(#[from] SymptomError),
    #[error(transparent)]
    Interactions(#[from] InteractionError),
    #[error(transparent)]
    Server(#[from] ServerError),
    #[error("Signal handler failed: {0}")]
    Signal(std::io::Error),
}

/// Load every reference table, from `resources_dir` when given, otherwise
/// from the compiled-in copies.
pub fn load_context(resources_dir: Option<&Path>) -> Result<ApiContext, StartupError> {
    let (diagnosis, symptoms, interactions) = match resources_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Loading reference data from directory");
            (
                DiagnosisReferenceData::load(dir)?,
                SymptomReference::load(dir)?,
                InteractionReference::load(dir)?,
            )
        }
        None => (
            DiagnosisReferenceData::bundled()?,
            SymptomReference::bundled()?,
            InteractionReference::bundled()?,
        ),
    };

    tracing::info!(
        diseases = diagnosis.catalog.len(),
        symptoms = diagnosis.lexicon.len(),
        interactions = interactions.interactions.len(),
        "Reference data loaded"
    );

    Ok(ApiContext::new(diagnosis, symptoms, interactions))
}

pub async fn run() -> Result<(), StartupError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let server_config = ServerConfig::from_env()?;
    let ctx = load_context(server_config.resources_dir.as_deref())?;
    let server = api::start_server(ctx, server_config.socket_addr()).await?;

    tracing::info!(
        addr = %server.session.server_addr,
        session_id = %server.session.session_id,
        "Listening"
    );

    let signal = tokio::signal::ctrl_c().await.map_err(StartupError::Signal);
    server.shutdown_and_wait().await;
    signal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_context_loads() {
        let ctx = load_context(None).unwrap();
        assert_eq!(ctx.engine.catalog().len(), 11);
        assert!(!ctx.selector.categories().is_empty());
    }

    #[test]
    fn directory_context_loads() {
        let dir = tempfile::tempdir().unwrap();
        for file in [
            diagnosis::reference::LEXICON_FILE,
            diagnosis::reference::CATALOG_FILE,
            symptoms::reference::SYMPTOM_REFERENCE_FILE,
            interactions::reference::INTERACTIONS_FILE,
        ] {
            let source = Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("resources")
                .join(file);
            std::fs::copy(source, dir.path().join(file)).unwrap();
        }

        let ctx = load_context(Some(dir.path())).unwrap();
        assert!(ctx.engine.catalog().get("I10").is_some());
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_context(Some(&dir.path().join("absent"))).err().unwrap();
        assert!(matches!(err, StartupError::Diagnosis(_)));
    }
}
