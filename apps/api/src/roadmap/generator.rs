//! Roadmap Generator — turns a validated `UserInput` into a `RoadmapResponse`
//! through one schema-constrained LLM call.
//!
//! `AppState` holds an `Arc<dyn RoadmapGenerator>` so handlers and the
//! controller can be exercised against a stub without a network.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

use crate::llm_client::{LlmClient, LlmError};
use crate::models::roadmap::{RoadmapResponse, UserInput};
use crate::roadmap::prompts::{roadmap_system, ROADMAP_PROMPT_TEMPLATE};
use crate::roadmap::schema::roadmap_response_schema;

/// Every generation failure. Displays as the single message shown to the user.
#[derive(Debug, Error)]
pub enum RoadmapError {
    #[error("Failed to generate roadmap from AI: {0}")]
    Llm(#[from] LlmError),

    #[error("Failed to generate roadmap from AI: could not encode user input: {0}")]
    Encode(serde_json::Error),
}

#[async_trait]
pub trait RoadmapGenerator: Send + Sync {
    async fn generate(&self, input: &UserInput) -> Result<RoadmapResponse, RoadmapError>;
}

/// Builds the user prompt: a one-line instruction followed by the
/// pretty-printed input.
pub fn build_prompt(input: &UserInput) -> Result<String, RoadmapError> {
    let user_input_json = serde_json::to_string_pretty(input).map_err(RoadmapError::Encode)?;
    Ok(ROADMAP_PROMPT_TEMPLATE
        .replace("{timeframe_months}", &input.timeframe_months.to_string())
        .replace("{user_input_json}", &user_input_json))
}

/// Production generator backed by Gemini.
pub struct LlmRoadmapGenerator(pub LlmClient);

#[async_trait]
impl RoadmapGenerator for LlmRoadmapGenerator {
    async fn generate(&self, input: &UserInput) -> Result<RoadmapResponse, RoadmapError> {
        let prompt = build_prompt(input)?;
        let schema = roadmap_response_schema();

        let roadmap: RoadmapResponse = self
            .0
            .call_json(&prompt, &roadmap_system(), &schema)
            .await
            .map_err(|e| {
                error!("Error generating roadmap: {e}");
                RoadmapError::Llm(e)
            })?;

        info!(
            roles = roadmap.recommended_roles.len(),
            weeks = roadmap.user_personalised_path.weekly_plan.len(),
            target_weeks = input.target_weeks(),
            "Roadmap generated"
        );

        Ok(roadmap)
    }
}
