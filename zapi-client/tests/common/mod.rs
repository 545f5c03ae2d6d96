//! Common test utilities for zapi-client integration tests
//!
//! Small wiremock helpers: canned JSON-RPC response templates, a client
//! wired to a mock server, and access to the bodies the client actually
//! sent.

#![allow(dead_code)]

use std::sync::Once;

use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::{MockServer, ResponseTemplate};
use zapi_client::Client;

/// The token every test client is configured with.
pub const TEST_TOKEN: &str = "test-token";

static TRACING: Once = Once::new();

/// Install the test subscriber once per binary; `RUST_LOG` controls what the
/// instrumented client emits while tests run.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// A client pointed at the mock server with the default timeout.
pub fn client_for(server: &MockServer) -> Client {
    init_tracing();
    Client::new(server.uri(), TEST_TOKEN).expect("client construction")
}

/// A 200 response carrying a JSON-RPC result envelope echoing `id`.
pub fn rpc_result(id: i64, result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "result": result,
        "id": id,
    }))
}

/// A 200 response carrying a JSON-RPC error envelope echoing `id`.
pub fn rpc_error(id: i64, code: i32, message: &str, data: Option<&str>) -> ResponseTemplate {
    let mut error = json!({"code": code, "message": message});
    if let Some(data) = data {
        error["data"] = json!(data);
    }
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "error": error,
        "id": id,
    }))
}

/// Every request body the mock server received, parsed as JSON.
pub async fn sent_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .map(|r| serde_json::from_slice(&r.body).expect("request body is JSON"))
        .collect()
}
