use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use folio_contact::{OutboundEmail, SubmitPayload, SubmitReply};

use crate::{email::OutboundMessage, error::ApiError, routes::AppState};

/// POST /api/contact
///
/// The body is read raw so every exit is owned here: a parse failure is
/// a dispatch failure, not an extractor rejection.
pub async fn submit(State(app): State<AppState>, body: Bytes) -> Response {
    match dispatch(&app, &body).await {
        Ok(reply) => Json(reply).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn dispatch(app: &AppState, body: &[u8]) -> Result<SubmitReply, ApiError> {
    let payload: SubmitPayload = serde_json::from_slice(body)?;
    let submission = payload.validate()?;

    let email = OutboundEmail::render(&submission, &app.config.site.owner_name)?;

    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        selected = %submission.selected(),
        "dispatching contact inquiry"
    );

    let id = app
        .mailer
        .send(OutboundMessage {
            to: app.config.mail.to_email.clone(),
            from: app.config.mail.from_email.clone(),
            reply_to: submission.email.clone(),
            subject: email.subject,
            html: email.html,
            text: email.text,
        })
        .await
        .map_err(ApiError::Delivery)?;

    Ok(SubmitReply::sent(id.unwrap_or_default()))
}
