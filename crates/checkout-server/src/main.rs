//! PayPal checkout HTTP server
//!
//! Axum server the browser's PayPal button talks to. Creates orders and
//! captures them once the payer has approved.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paypal_checkout::PaypalClient;

use crate::handlers::{capture_order, create_order, health_check};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment first so RUST_LOG can come from .env
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::var("PAYPAL_CONFIG").unwrap_or_else(|_| "paypal.json".into());
    let client = PaypalClient::load(&config_path).inspect_err(|e| {
        tracing::error!("PayPal not configured: {}", e);
        tracing::error!("  Fill in {} and restart", config_path);
    })?;
    tracing::info!(order_api = %client.config().order_api, "PayPal configured");

    let state = AppState {
        provider: Arc::new(client),
    };

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("checkout-server running on http://{}", addr);
    tracing::info!("  GET  /health             - Health check");
    tracing::info!("  POST /api/orders         - Create PayPal order");
    tracing::info!("  POST /api/orders/capture - Capture approved order");

    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/orders", post(create_order))
        .route("/api/orders/capture", post(capture_order))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
