use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_contact::{SubmissionError, SubmitReply, MISSING_FIELDS, SEND_FAILED};
use thiserror::Error;

/// Everything that can end a contact dispatch early. The kinds stay
/// distinct for logging; callers only ever see the two documented
/// failure envelopes.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("missing required fields")]
    MissingFields,

    #[error("malformed request body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("email rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("email delivery failed: {0}")]
    Delivery(#[source] anyhow::Error),
}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::MissingFields => ApiError::MissingFields,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, reply) = match &self {
            ApiError::MissingFields => {
                tracing::warn!("contact submission rejected: empty required field");
                (StatusCode::BAD_REQUEST, SubmitReply::failed(MISSING_FIELDS))
            }
            ApiError::Parse(err) => {
                tracing::warn!(error = %err, "contact submission body did not parse");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SubmitReply::failed(SEND_FAILED),
                )
            }
            ApiError::Render(err) => {
                tracing::error!(error = %err, "failed to render inquiry email");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SubmitReply::failed(SEND_FAILED),
                )
            }
            ApiError::Delivery(err) => {
                tracing::error!(error = %err, "failed to deliver inquiry email");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SubmitReply::failed(SEND_FAILED),
                )
            }
        };

        (status, Json(reply)).into_response()
    }
}
