//! # agent-mock
//!
//! Axum stand-in for the personal chat endpoint. Records every query it
//! receives and answers with whatever `Reply` it is configured with.
//!
//! ```rust,ignore
//! let mock = MockState::failing(500);
//! let addr = agent_mock::spawn(mock.clone()).await?;
//! // point a client at http://{addr}/chat/personal
//! assert_eq!(mock.request_count().await, 1);
//! ```

pub mod handlers;
pub mod state;

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub use handlers::demo_answer;
pub use state::{MockState, RecordedRequest, Reply};

/// Build the mock router
pub fn router(state: MockState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/chat/personal", get(handlers::chat_personal))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the mock on an ephemeral localhost port in the background
pub async fn spawn(state: MockState) -> std::io::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = router(state);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("mock server stopped: {}", e);
        }
    });

    Ok(addr)
}
