//! agent-mock server
//!
//! Serves demo answers on `/chat/personal` so the client side can be
//! developed without the real chat service.

use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_mock::{router, MockState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Browser clients call from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(MockState::echo()).layer(cors);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("agent-mock listening on http://{}", addr);
    tracing::info!("  GET /health");
    tracing::info!("  GET /chat/personal?msg=<message>");

    axum::serve(listener, app).await?;

    Ok(())
}
