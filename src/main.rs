use std::env;
use std::sync::Arc;

use env_logger::Env;
use log::info;
use render::{PdfRenderer, RendererConfig};
use web::{CardAppData, MatchCardServer};

const DEFAULT_PORT: u16 = 18000;

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let renderer_config = RendererConfig::from_env();

    match &renderer_config.browser_path {
        Some(path) => info!("browser executable: {}", path.display()),
        None => info!("browser executable: auto-detect"),
    }

    let data = CardAppData {
        renderer: Arc::new(PdfRenderer::new(renderer_config)),
    };

    MatchCardServer::new(data).run(port).await;
}
