pub mod generate;

use crate::CardAppData;
use axum::Router;

pub fn match_card_routes() -> Router<CardAppData> {
    Router::new().merge(generate::routes::routes())
}
