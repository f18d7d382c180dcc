use std::sync::Arc;

use crate::roadmap::generator::RoadmapGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable roadmap backend. Default: LlmRoadmapGenerator over Gemini.
    pub generator: Arc<dyn RoadmapGenerator>,
}
