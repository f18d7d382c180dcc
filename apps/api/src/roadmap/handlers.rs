//! Axum route handlers for the Roadmap page and API.

use askama::Template;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    Form, Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::roadmap::{RoadmapForm, RoadmapResponse, UserInput};
use crate::roadmap::controller::{Phase, RoadmapController};
use crate::roadmap::views::{FormView, RoadmapPage};
use crate::state::AppState;

type PageResponse = Result<(StatusCode, Html<String>), AppError>;

fn render(status: StatusCode, page: RoadmapPage) -> PageResponse {
    let html = page
        .render()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("template render failed: {e}")))?;
    Ok((status, Html(html)))
}

/// GET /
///
/// The blank input form.
pub async fn handle_index() -> PageResponse {
    render(StatusCode::OK, RoadmapPage::new(FormView::default(), Phase::Idle))
}

/// POST /roadmap
///
/// Form submission. Runs one controller cycle and renders the settled phase
/// with the submitted values echoed back into the form.
pub async fn handle_submit(
    State(state): State<AppState>,
    Form(form): Form<RoadmapForm>,
) -> PageResponse {
    let form_view = FormView::from(&form);

    let input = match UserInput::try_from(form) {
        Ok(input) => input,
        Err(e) => {
            return render(
                StatusCode::UNPROCESSABLE_ENTITY,
                RoadmapPage::new(form_view, Phase::Error(e.to_string())),
            );
        }
    };

    info!(
        goal_roles = input.goal_roles.len(),
        timeframe_months = input.timeframe_months,
        "Roadmap requested"
    );

    let mut controller = RoadmapController::new();
    controller.submit(state.generator.as_ref(), &input).await;

    let status = match controller.phase() {
        Phase::Error(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };
    render(status, RoadmapPage::new(form_view, controller.into_phase()))
}

/// POST /api/v1/roadmap
///
/// JSON in, JSON out. Same validation and generation as the form.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let Json(input) = payload?;
    input.validate()?;
    let roadmap = state.generator.generate(&input).await?;
    Ok(Json(roadmap))
}
