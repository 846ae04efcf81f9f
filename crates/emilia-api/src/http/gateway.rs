//! Inbound event gateway.
//!
//! The chat platform (or the bridge in front of it) delivers
//! message-create events as JSON POSTs. Each event is acknowledged
//! immediately and handled on a detached task; there is deliberately no
//! bound on in-flight cycles, and the warmth ledger's mutex is the only
//! cross-event coordination.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use emilia_types::event::InboundMessage;

use crate::state::AppState;

/// Build the gateway router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/gateway/events", post(receive_event))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /healthz - liveness probe.
async fn healthz() -> &'static str {
    "ok"
}

/// POST /gateway/events - receive one message-create event.
///
/// Returns 202 as soon as the event is parsed; the reply cycle runs on
/// its own task. A failed cycle is logged and the user simply gets no
/// reply, matching the bot's all-or-nothing behavior.
async fn receive_event(
    State(state): State<AppState>,
    Json(message): Json<InboundMessage>,
) -> StatusCode {
    tokio::spawn(async move {
        match state.router.handle(&message).await {
            Ok(outcome) => {
                debug!(message_id = %message.id, ?outcome, "event handled");
            }
            Err(err) => {
                error!(message_id = %message.id, error = %err, "event handler failed");
            }
        }
    });
    StatusCode::ACCEPTED
}
