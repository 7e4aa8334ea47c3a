use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use tracing::{error, info};

use crate::api::rest::dto::Envelope;
use crate::domain::error::DomainError;

pub const MSG_INVALID_FIELDS: &str = "Please correct the highlighted fields";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid login or password";
pub const MSG_USER_NOT_FOUND: &str = "User not found";
pub const MSG_APPLICATION_NOT_FOUND: &str = "Application not found";
pub const MSG_INTERNAL: &str = "Internal server error";

/// Status code plus envelope; every handler answers with this pair
pub type EnvelopeResponse = (StatusCode, Json<Envelope>);

pub fn ok(envelope: Envelope) -> EnvelopeResponse {
    (StatusCode::OK, Json(envelope))
}

/// Map domain errors to the HTTP answer.
///
/// Soft failures keep status 200 and report `success: false`; only storage
/// failures become a 500, with the cause logged and never echoed.
pub fn map_domain_error(err: DomainError) -> EnvelopeResponse {
    match err {
        DomainError::Validation { errors } => ok(
            Envelope::invalid(errors.into_inner()).with_message(MSG_INVALID_FIELDS),
        ),
        DomainError::InvalidCredentials => ok(Envelope::failure(MSG_INVALID_CREDENTIALS)),
        DomainError::UserNotFound { .. } => ok(Envelope::failure(MSG_USER_NOT_FOUND)),
        DomainError::ApplicationNotFound { .. } => {
            ok(Envelope::failure(MSG_APPLICATION_NOT_FOUND))
        }
        DomainError::Storage { message } => {
            error!("Storage failure: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Envelope::failure(MSG_INTERNAL)),
            )
        }
    }
}

/// A body that is not JSON, or not the expected shape, is a client error.
pub fn map_rejection(rejection: JsonRejection) -> EnvelopeResponse {
    info!("Rejected request body: {}", rejection.body_text());
    (
        StatusCode::BAD_REQUEST,
        Json(Envelope::failure(rejection.body_text())),
    )
}
