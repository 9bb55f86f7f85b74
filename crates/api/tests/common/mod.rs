use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderName, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use playcrate_api::config::AppConfig;
use playcrate_api::routes;
use playcrate_api::state::AppState;
use playcrate_cache::CacheClient;

/// Token the test config accepts.
pub const TEST_TOKEN: &str = "test-token";

/// Build a test `AppConfig` with safe defaults.
pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        auth_token: TEST_TOKEN.to_string(),
        redis_url: "redis://127.0.0.1:6379".to_string(),
        mailbox_base_url: "http://127.0.0.1:9/mailbox".to_string(),
        mailbox_auth_token: "mailbox-token".to_string(),
        sweep_interval_secs: 60,
        sweep_cutoff_offset_secs: -3600,
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (auth, request ID, timeout, tracing,
/// panic recovery) that production uses. The cache pool hands out
/// connections lazily, so no Redis server is needed unless a test reads a
/// cached endpoint.
pub async fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let cache = CacheClient::connect(&config.redis_url)
        .await
        .expect("cache client");

    let state = AppState {
        pool,
        cache,
        config: Arc::new(config),
    };

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes(state.clone()))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// Issue a GET request with no auth header.
pub async fn get(app: Router, uri: &str) -> Response<axum::body::Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Issue a GET request carrying a token.
pub async fn get_with_token(app: Router, uri: &str, token: &str) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header("authorization", token)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a JSON POST request, optionally carrying a token.
pub async fn post_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<axum::body::Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", token);
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
