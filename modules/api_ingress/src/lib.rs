//! HTTP host: wraps module routes with the shared endpoints and middleware
//! stack, then serves them until shutdown.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::header;
use axum::response::IntoResponse;
use axum::{middleware::from_fn, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

mod config;
pub mod request_id;
mod web;

pub use config::ApiIngressConfig;

/// Router assembly for the HTTP server
#[derive(Debug, Clone, Default)]
pub struct ApiIngress {
    config: ApiIngressConfig,
    request_timeout: Option<Duration>,
}

impl ApiIngress {
    pub fn new(config: ApiIngressConfig) -> Self {
        Self {
            config,
            request_timeout: None,
        }
    }

    /// Abort handlers that run longer than `timeout`; zero disables the limit.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    pub fn config(&self) -> &ApiIngressConfig {
        &self.config
    }

    /// Build the final router around `module_routes`.
    ///
    /// Adds `/health`, `/openapi.json` (when a document is given and enabled)
    /// and a JSON 404 fallback, then the middleware stack. Outermost first:
    /// SetRequestId -> PropagateRequestId -> Trace -> push_req_id_to_extensions
    /// -> Timeout -> CORS -> BodyLimit.
    pub fn build_router(
        &self,
        module_routes: Router,
        openapi: Option<utoipa::openapi::OpenApi>,
    ) -> Result<Router> {
        tracing::debug!("Building HTTP router");
        let mut router = Router::new()
            .route("/health", get(web::health_check))
            .merge(module_routes)
            .fallback(web::not_found);

        if let Some(doc) = openapi.filter(|_| self.config.enable_openapi) {
            // Serialized once; every request gets the same bytes.
            let body = Arc::new(doc.to_json().context("Failed to serialize OpenAPI document")?);
            router = router.route(
                "/openapi.json",
                get(move || {
                    let body = body.clone();
                    async move {
                        (
                            [
                                (header::CONTENT_TYPE, "application/json"),
                                (header::CACHE_CONTROL, "no-store"),
                            ],
                            (*body).clone(),
                        )
                            .into_response()
                    }
                }),
            );
        }

        // Layers are applied innermost first.
        router = router
            .layer(DefaultBodyLimit::max(self.config.body_limit_bytes))
            .layer(RequestBodyLimitLayer::new(self.config.body_limit_bytes));

        if self.config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }

        if let Some(timeout) = self.request_timeout {
            router = router.layer(TimeoutLayer::new(timeout));
        }

        let x_request_id = request_id::header();
        router = router
            .layer(from_fn(request_id::push_req_id_to_extensions))
            .layer(request_id::create_trace_layer())
            .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
            .layer(SetRequestIdLayer::new(x_request_id, request_id::MakeReqId));

        Ok(router)
    }
}

/// Serve `router` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("HTTP server bound on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received, stopping HTTP server gracefully");
}
