mod common;
mod error;
mod match_card;
mod routes;

pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use log::{error, info};
use render::PdfRenderer;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct MatchCardServer {
    data: CardAppData,
}

impl MatchCardServer {
    pub fn new(data: CardAppData) -> Self {
        MatchCardServer { data }
    }

    pub async fn run(&self, port: u16) {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "internal failure".to_string(),
                        ).into_response()
                    }))
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to address {}: {}", addr, e);
                panic!("Cannot start server without binding to port");
            }
        };

        info!("listen at: http://localhost:{}", port);

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    }
}

pub struct CardAppData {
    pub renderer: Arc<PdfRenderer>,
}

impl Clone for CardAppData {
    fn clone(&self) -> Self {
        CardAppData {
            renderer: Arc::clone(&self.renderer),
        }
    }
}
