//! Host routes and middleware of the assembled router.

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    routing::post,
    Router,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tower::util::ServiceExt;

use api_ingress::{ApiIngress, ApiIngressConfig};

fn demo_doc() -> utoipa::openapi::OpenApi {
    utoipa::openapi::OpenApiBuilder::new()
        .info(utoipa::openapi::InfoBuilder::new().title("demo").version("1").build())
        .build()
}

fn echo_routes() -> Router {
    Router::new().route("/echo", post(|body: String| async move { body }))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = ApiIngress::default().build_router(Router::new(), None).unwrap();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn openapi_document_is_served_when_enabled() {
    let app = ApiIngress::default()
        .build_router(Router::new(), Some(demo_doc()))
        .unwrap();

    let response = app
        .oneshot(Request::builder().uri("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
    let json = body_json(response).await;
    assert_eq!(json["info"]["title"], "demo");
}

#[tokio::test]
async fn openapi_document_can_be_disabled() {
    let config = ApiIngressConfig {
        enable_openapi: false,
        ..Default::default()
    };
    let app = ApiIngress::new(config)
        .build_router(Router::new(), Some(demo_doc()))
        .unwrap();

    let response = app
        .oneshot(Request::builder().uri("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_gets_json_404() {
    let app = ApiIngress::default().build_router(echo_routes(), None).unwrap();

    let response = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let config = ApiIngressConfig {
        body_limit_bytes: 16,
        ..Default::default()
    };
    let app = ApiIngress::new(config).build_router(echo_routes(), None).unwrap();

    let small = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/echo")
                .body(Body::from("short"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(small.status(), StatusCode::OK);

    let large = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/echo")
                .header(header::CONTENT_LENGTH, "64")
                .body(Body::from("x".repeat(64)))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(large.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn cors_headers_only_when_enabled() {
    let preflight = || {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/echo")
            .header(header::ORIGIN, "http://front.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    };

    let enabled = ApiIngress::new(ApiIngressConfig {
        cors_enabled: true,
        ..Default::default()
    })
    .build_router(echo_routes(), None)
    .unwrap();
    let response = enabled.oneshot(preflight()).await.unwrap();
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

    let disabled = ApiIngress::default().build_router(echo_routes(), None).unwrap();
    let response = disabled.oneshot(preflight()).await.unwrap();
    assert!(!response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn serve_stops_on_shutdown() {
    let app = ApiIngress::default()
        .with_request_timeout(Duration::from_secs(5))
        .build_router(Router::new(), None)
        .unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(api_ingress::serve(listener, app, async {
        let _ = rx.await;
    }));

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();
    assert!(raw.starts_with("HTTP/1.1 200"), "unexpected response: {raw}");
    assert!(raw.contains("healthy"));

    tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server should stop")
        .unwrap()
        .unwrap();
}
