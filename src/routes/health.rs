use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use lettre::message::Mailbox;
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Checks that the configured mail addresses parse as mailboxes; there
/// is no other dependency to probe without dialing out.
pub async fn ready(State(app): State<AppState>) -> impl IntoResponse {
    let from = app.config.mail.from_email.parse::<Mailbox>();
    let to = app.config.mail.to_email.parse::<Mailbox>();

    match (from, to) {
        (Ok(_), Ok(_)) => (StatusCode::OK, Json(json!({"status": "ready"}))),
        _ => {
            tracing::error!("Readiness check failed: mail addresses do not parse");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "reason": "mail_config_invalid"
                })),
            )
        }
    }
}
