use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`
use vogue_radar::{
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    server::{self, handlers::AppState},
};

use super::mocks::MockLlmClient;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            api_key: "test-api-key".to_string(),
            model: "mixtral-8x7b-32768".to_string(),
        },
    }
}

/// Router backed by `mock`; the mock keeps recording requests after being moved in.
pub fn create_test_app(mock: &MockLlmClient) -> Router {
    server::router(AppState::new(Arc::new(mock.clone())))
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
llm:
  base_url: "http://localhost:9999/v1"
  api_key: "from-file"
  model: "llama-3.3-70b-versatile"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"
"#;
