//! Form/Result Controller — the idle/loading/success/error phase machine that
//! drives one roadmap request per submission and selects the view to render.

use tracing::{debug, warn};

use crate::models::roadmap::{RoadmapResponse, UserInput};
use crate::roadmap::generator::{RoadmapError, RoadmapGenerator};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success(RoadmapResponse),
    Error(String),
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }
}

#[derive(Debug, Default)]
pub struct RoadmapController {
    phase: Phase,
}

impl RoadmapController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn into_phase(self) -> Phase {
        self.phase
    }

    /// Enters `Loading`, dropping any previous result or error.
    /// Returns `false` without touching state when a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.phase.is_loading() {
            debug!("Submission ignored: a roadmap request is already in flight");
            return false;
        }
        self.phase = Phase::Loading;
        true
    }

    /// Settles a `Loading` phase with the request outcome. Ignored in any other phase.
    pub fn finish(&mut self, result: Result<RoadmapResponse, RoadmapError>) {
        if !self.phase.is_loading() {
            warn!("Roadmap result arrived outside the loading phase; discarding");
            return;
        }
        self.phase = match result {
            Ok(roadmap) => Phase::Success(roadmap),
            Err(e) => Phase::Error(e.to_string()),
        };
    }

    /// Runs one submission end to end: exactly one generator call unless a
    /// request is already in flight, in which case nothing happens.
    pub async fn submit(&mut self, generator: &dyn RoadmapGenerator, input: &UserInput) -> &Phase {
        if self.begin() {
            let result = generator.generate(input).await;
            self.finish(result);
        }
        &self.phase
    }
}
