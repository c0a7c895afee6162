use crate::CardAppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<CardAppData> {
    Router::new().route(
        "/api/match-card",
        post(super::match_card_generate_action),
    )
}
