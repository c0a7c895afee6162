use crate::CardAppData;
use crate::common::default_handler::default_handler;
use crate::match_card::match_card_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<CardAppData> {
        Router::<CardAppData>::new()
            .merge(match_card_routes())
            .fallback(default_handler)
    }
}
