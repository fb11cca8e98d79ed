use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use gateway::GatewayClient;
use mailer::{EmailJsMailer, Mailer};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate()?;

    common::env::ensure_env("frontend").await?;

    let client = GatewayClient::new(cfg.gateway.base_url.clone(), cfg.gateway.api_key.clone());
    let sender: Option<Arc<dyn Mailer>> = cfg
        .email
        .clone()
        .map(|email| Arc::new(EmailJsMailer::new(email)) as Arc<dyn Mailer>);
    if sender.is_none() {
        warn!("email credentials missing; contact and subscribe will report the service as not configured");
    }
    if cfg.admin.api_key.is_none() {
        warn!("admin key missing; the admin managers will answer 503");
    }
    let state = ServerState::new(client, sender, cfg.admin.api_key.clone());

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting site server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
