use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_TIMEFRAME_MONTHS: u32 = 1;
pub const MAX_TIMEFRAME_MONTHS: u32 = 24;
pub const DEFAULT_TIMEFRAME_MONTHS: u32 = 6;

/// The profile a student submits. All fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub current_level: String,
    pub goal_roles: Vec<String>,
    pub timeframe_months: u32,
    pub preferred_domain: String,
}

impl UserInput {
    /// Number of weekly steps the model is asked to aim for (4 per month).
    /// Advisory only; responses are never checked against it.
    pub fn target_weeks(&self) -> u32 {
        self.timeframe_months.saturating_mul(4)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("current_level", &self.current_level)?;
        require_text("preferred_domain", &self.preferred_domain)?;

        if !self.goal_roles.iter().any(|role| !role.trim().is_empty()) {
            return Err(ValidationError::Missing("goal_roles"));
        }

        if !(MIN_TIMEFRAME_MONTHS..=MAX_TIMEFRAME_MONTHS).contains(&self.timeframe_months) {
            return Err(ValidationError::TimeframeOutOfRange(self.timeframe_months));
        }

        Ok(())
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("timeframe_months must be between 1 and 24, got {0}")]
    TimeframeOutOfRange(u32),

    #[error("timeframe_months must be a whole number, got '{0}'")]
    TimeframeNotANumber(String),
}

/// Raw form submission. Goal roles arrive as one comma-separated string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadmapForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub current_level: String,
    #[serde(default)]
    pub goal_roles: String,
    #[serde(default)]
    pub timeframe_months: String,
    #[serde(default)]
    pub preferred_domain: String,
}

impl RoadmapForm {
    /// Timeframe to pre-fill the slider with when re-rendering the form.
    pub fn timeframe_or_default(&self) -> u32 {
        self.timeframe_months
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|m| (MIN_TIMEFRAME_MONTHS..=MAX_TIMEFRAME_MONTHS).contains(m))
            .unwrap_or(DEFAULT_TIMEFRAME_MONTHS)
    }
}

/// Splits `"ML Engineer, , Data Scientist"` into `["ML Engineer", "Data Scientist"]`.
pub fn split_goal_roles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(str::to_string)
        .collect()
}

impl TryFrom<RoadmapForm> for UserInput {
    type Error = ValidationError;

    fn try_from(form: RoadmapForm) -> Result<Self, Self::Error> {
        let raw_months = form.timeframe_months.trim();
        let timeframe_months = raw_months
            .parse::<u32>()
            .map_err(|_| ValidationError::TimeframeNotANumber(raw_months.to_string()))?;

        let input = UserInput {
            name: form.name.trim().to_string(),
            current_level: form.current_level.trim().to_string(),
            goal_roles: split_goal_roles(&form.goal_roles),
            timeframe_months,
            preferred_domain: form.preferred_domain.trim().to_string(),
        };
        input.validate()?;
        Ok(input)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Model output. Every field is required: a missing one is a schema mismatch.
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiniProject {
    pub project_name: String,
    pub project_description: String,
    pub time_estimate_weeks: u32,
    pub metrics_or_deliverables: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedRole {
    pub role_name: String,
    pub why_fit: String,
    pub core_skills: Vec<String>,
    pub differentiator_skills: Vec<String>,
    pub mini_projects: Vec<MiniProject>,
    pub timeline_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStep {
    pub week_number: u32,
    pub focus: String,
    pub deliverable: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalisedPath {
    pub entry_role: String,
    pub months_to_target: u32,
    pub weekly_plan: Vec<WeeklyStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapResponse {
    pub recommended_roles: Vec<RecommendedRole>,
    pub user_personalised_path: PersonalisedPath,
}
