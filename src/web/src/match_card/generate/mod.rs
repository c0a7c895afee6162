pub mod routes;

use crate::{ApiError, ApiResult, CardAppData};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use card::{MatchCardRequest, MatchCardTemplate};
use log::debug;
use serde_json::Value;
use std::sync::Arc;

pub async fn match_card_generate_action(
    State(state): State<CardAppData>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(value) = payload.map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let request = MatchCardRequest::from_value(value)
        .map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    debug!(
        "match card requested for '{}' with {} roster players",
        request.current_team_name,
        request.team_players.len()
    );

    let markup = MatchCardTemplate::from_request(&request)
        .render_markup()
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

    let renderer = Arc::clone(&state.renderer);

    // The browser call blocks, keep it off the async workers
    let pdf = tokio::task::spawn_blocking(move || renderer.render(&markup))
        .await
        .map_err(|e| ApiError::InternalError(e.to_string()))?
        .map_err(|e| ApiError::RenderFailed(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/pdf")],
        pdf,
    ))
}
