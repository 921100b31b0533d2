use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tokio::task::JoinHandle;
use tower::ServiceExt;

use tweetle_analytics::api::router::create_router;
use tweetle_analytics::config::AppConfig;
use tweetle_analytics::AppState;

pub const CONTRACT: &str = "sim_abc";
pub const FILTER: &str = "0xdead";

/// Router backed by fresh entropy, or a fixed seed when given.
#[allow(dead_code)]
pub fn build_test_app(seed: Option<u64>) -> axum::Router {
    let config = AppConfig {
        rng_seed: seed,
        ..AppConfig::default()
    };
    create_router(AppState::new(config))
}

/// Issue a GET and decode the JSON body.
#[allow(dead_code)]
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// `/path?contract=..&from=..` with the shared test scope.
#[allow(dead_code)]
pub fn scoped(path: &str) -> String {
    format!("{path}?contract={CONTRACT}&from={FILTER}")
}

/// Sorted top-level keys of a JSON object.
#[allow(dead_code)]
pub fn keys(value: &serde_json::Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .map(|o| o.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();
    keys
}

/// Serve the app on an ephemeral local port.
#[allow(dead_code)]
pub async fn spawn_app() -> (String, JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let app = build_test_app(None);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), handle)
}
