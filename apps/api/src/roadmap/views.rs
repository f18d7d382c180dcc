//! View models for the single roadmap page. The page shows the form plus at
//! most one of: loading indicator, error alert, roadmap.

use askama::Template;

use crate::models::roadmap::{RoadmapForm, RoadmapResponse, DEFAULT_TIMEFRAME_MONTHS};
use crate::roadmap::controller::Phase;

/// Values echoed back into the form inputs.
#[derive(Debug, Clone)]
pub struct FormView {
    pub name: String,
    pub current_level: String,
    pub goal_roles: String,
    pub timeframe_months: u32,
    pub preferred_domain: String,
}

impl Default for FormView {
    fn default() -> Self {
        Self {
            name: String::new(),
            current_level: String::new(),
            goal_roles: String::new(),
            timeframe_months: DEFAULT_TIMEFRAME_MONTHS,
            preferred_domain: String::new(),
        }
    }
}

impl From<&RoadmapForm> for FormView {
    fn from(form: &RoadmapForm) -> Self {
        Self {
            name: form.name.clone(),
            current_level: form.current_level.clone(),
            goal_roles: form.goal_roles.clone(),
            timeframe_months: form.timeframe_or_default(),
            preferred_domain: form.preferred_domain.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct RoadmapPage {
    pub form: FormView,
    pub loading: bool,
    pub error: Option<String>,
    pub roadmap: Option<RoadmapResponse>,
}

impl RoadmapPage {
    pub fn new(form: FormView, phase: Phase) -> Self {
        let (loading, error, roadmap) = match phase {
            Phase::Idle => (false, None, None),
            Phase::Loading => (true, None, None),
            Phase::Success(roadmap) => (false, None, Some(roadmap)),
            Phase::Error(message) => (false, Some(message), None),
        };
        Self {
            form,
            loading,
            error,
            roadmap,
        }
    }
}
