//! Shared state for the HTTP layer.

use std::sync::Arc;

use crate::diagnosis::{DiagnosisReferenceData, DiagnosticEngine};
use crate::interactions::{InteractionChecker, InteractionReference};
use crate::symptoms::{SymptomReference, SymptomSelector};

/// Shared context for all API routes.
/// Every service is read-only after construction, so handlers share them
/// without locking.
#[derive(Clone)]
pub struct ApiContext {
    pub engine: Arc<DiagnosticEngine>,
    pub selector: Arc<SymptomSelector>,
    pub interactions: Arc<InteractionChecker>,
}

impl ApiContext {
    pub fn new(
        diagnosis: DiagnosisReferenceData,
        symptoms: SymptomReference,
        interactions: InteractionReference,
    ) -> Self {
        let selector = SymptomSelector::new(symptoms, &diagnosis.catalog);
        Self {
            engine: Arc::new(DiagnosticEngine::new(diagnosis)),
            selector: Arc::new(selector),
            interactions: Arc::new(InteractionChecker::new(interactions)),
        }
    }

    #[cfg(test)]
    pub(crate) fn bundled() -> Self {
        Self::new(
            DiagnosisReferenceData::bundled().unwrap(),
            SymptomReference::bundled().unwrap(),
            InteractionReference::bundled().unwrap(),
        )
    }
}
