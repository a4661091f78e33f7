//! HTTP Handlers

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use agent_core::{AnswerResult, ExtractedRelation};

use crate::state::{MockState, RecordedRequest, Reply};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub requests_served: usize,
}

/// Health check endpoint
pub async fn health_check(State(state): State<MockState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        requests_served: state.request_count().await,
    })
}

/// `GET /chat/personal?msg=...`
pub async fn chat_personal(
    State(state): State<MockState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let request = RecordedRequest { params };
    let message = request.msg().unwrap_or_default().to_string();
    tracing::debug!(%message, "chat request");
    state.record(request).await;

    match state.reply().await {
        Reply::Answer(body) => Json(body).into_response(),
        Reply::Echo => Json(demo_answer(&message)).into_response(),
        Reply::Status { status, body } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, body).into_response()
        }
        Reply::Raw(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
    }
}

/// Answer built from the words of `message`: first word relates to last
pub fn demo_answer(message: &str) -> AnswerResult {
    let words: Vec<&str> = message.split_whitespace().collect();
    let subject = words.first().copied().unwrap_or("user");
    let object = words.last().copied().unwrap_or("nothing");

    let relation = ExtractedRelation::new(subject, "mentions", object)
        .with_quantifier("some")
        .with_confidence(0.5)
        .with_provenance("agent-mock", "echo-v1");

    AnswerResult::new()
        .with_citations(["mock://personal/1"])
        .with_relation(relation)
        .with_decision(json!({ "action": "acknowledge", "words": words.len() }))
}
