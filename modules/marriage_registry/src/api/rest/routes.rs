use std::sync::Arc;

use axum::{routing::post, Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Mount the registry endpoints on `router`.
///
/// Paths keep the names the browser front-end already calls.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let registry = Router::new()
        .route("/registration", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/addApplication", post(handlers::add_application))
        .route("/editApplication", post(handlers::edit_application))
        .route("/getApplication", post(handlers::get_application))
        .layer(Extension(service));

    router.merge(registry)
}
