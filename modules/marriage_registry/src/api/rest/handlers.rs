use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, response::Json, Extension};
use tracing::info;

use crate::api::rest::dto::{
    ApplicationDto, ApplicationReq, EditApplicationReq, Envelope, GetApplicationReq, LoginReq,
    RegistrationReq, UserSummaryDto,
};
use crate::api::rest::error::{map_domain_error, map_rejection, ok, EnvelopeResponse};
use crate::contract::model::UserSummary;
use crate::domain::error::DomainError;
use crate::domain::service::Service;

pub const MSG_REGISTERED: &str = "Registration completed";
pub const MSG_APPLICATION_SUBMITTED: &str = "Application submitted";
pub const MSG_APPLICATION_UPDATED: &str = "Application updated";
pub const MSG_APPLICATION_UPDATE_FAILED: &str = "Failed to update the application";

/// Register a new user with their first application
#[utoipa::path(
    post,
    path = "/registration",
    request_body = RegistrationReq,
    responses(
        (status = 200, description = "Registration outcome; `errors` lists rejected fields", body = Envelope),
        (status = 400, description = "Malformed body", body = Envelope),
        (status = 500, description = "Storage failure", body = Envelope)
    ),
    tag = "registry",
    operation_id = "marriage_registry.register"
)]
pub async fn register(
    Extension(svc): Extension<Arc<Service>>,
    body: Result<Json<RegistrationReq>, JsonRejection>,
) -> EnvelopeResponse {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return map_rejection(rejection),
    };
    info!("Handling registration for login: {}", req.login);

    match svc.register(req.into()).await {
        Ok(user) => ok(Envelope::ok()
            .with_message(MSG_REGISTERED)
            .with_user(UserSummaryDto::from(UserSummary::from(&user)))),
        Err(e) => map_domain_error(e),
    }
}

/// Check credentials and count the visit
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Login outcome; `user` carries the updated visit count", body = Envelope),
        (status = 400, description = "Malformed body", body = Envelope),
        (status = 500, description = "Storage failure", body = Envelope)
    ),
    tag = "registry",
    operation_id = "marriage_registry.login"
)]
pub async fn login(
    Extension(svc): Extension<Arc<Service>>,
    body: Result<Json<LoginReq>, JsonRejection>,
) -> EnvelopeResponse {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return map_rejection(rejection),
    };
    info!("Handling login for: {}", req.login);

    match svc.login(&req.login, &req.password).await {
        Ok(summary) => ok(Envelope::ok().with_user(summary.into())),
        Err(e) => map_domain_error(e),
    }
}

/// Submit the application of an existing user
#[utoipa::path(
    post,
    path = "/addApplication",
    request_body = ApplicationReq,
    responses(
        (status = 200, description = "Submission outcome", body = Envelope),
        (status = 400, description = "Malformed body", body = Envelope),
        (status = 500, description = "Storage failure", body = Envelope)
    ),
    tag = "registry",
    operation_id = "marriage_registry.add_application"
)]
pub async fn add_application(
    Extension(svc): Extension<Arc<Service>>,
    body: Result<Json<ApplicationReq>, JsonRejection>,
) -> EnvelopeResponse {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return map_rejection(rejection),
    };
    info!("Handling application submission for login: {}", req.login);

    match svc.add_application(req.into()).await {
        Ok(()) => ok(Envelope::ok().with_message(MSG_APPLICATION_SUBMITTED)),
        Err(e) => map_domain_error(e),
    }
}

/// Overwrite the given fields of an existing application
#[utoipa::path(
    post,
    path = "/editApplication",
    request_body = EditApplicationReq,
    responses(
        (status = 200, description = "Edit outcome", body = Envelope),
        (status = 400, description = "Malformed body or application id", body = Envelope),
        (status = 500, description = "Storage failure", body = Envelope)
    ),
    tag = "registry",
    operation_id = "marriage_registry.edit_application"
)]
pub async fn edit_application(
    Extension(svc): Extension<Arc<Service>>,
    body: Result<Json<EditApplicationReq>, JsonRejection>,
) -> EnvelopeResponse {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return map_rejection(rejection),
    };
    let (application_id, patch) = req.into_parts();
    info!("Handling edit of application {}", application_id);

    match svc.edit_application(application_id, patch).await {
        Ok(()) => ok(Envelope::ok().with_message(MSG_APPLICATION_UPDATED)),
        Err(DomainError::ApplicationNotFound { .. }) => {
            ok(Envelope::failure(MSG_APPLICATION_UPDATE_FAILED))
        }
        Err(e) => map_domain_error(e),
    }
}

/// Fetch an application to prefill the edit form
#[utoipa::path(
    post,
    path = "/getApplication",
    request_body = GetApplicationReq,
    responses(
        (status = 200, description = "Lookup outcome; `application` is present on success", body = Envelope),
        (status = 400, description = "Malformed body or application id", body = Envelope),
        (status = 500, description = "Storage failure", body = Envelope)
    ),
    tag = "registry",
    operation_id = "marriage_registry.get_application"
)]
pub async fn get_application(
    Extension(svc): Extension<Arc<Service>>,
    body: Result<Json<GetApplicationReq>, JsonRejection>,
) -> EnvelopeResponse {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return map_rejection(rejection),
    };
    let application_id = req.application_id();
    info!("Handling lookup of application {}", application_id);

    match svc.get_application(application_id).await {
        Ok(application) => ok(Envelope::ok().with_application(ApplicationDto::from(application))),
        Err(e) => map_domain_error(e),
    }
}
