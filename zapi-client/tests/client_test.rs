//! Transport client integration tests
//!
//! Covers the envelope-level behavior against a mock HTTP endpoint: auth
//! injection and the no-auth allow-list, id allocation and correlation,
//! error classification and timeouts.

mod common;

use std::time::Duration;

use common::{client_for, rpc_error, rpc_result, sent_bodies, TEST_TOKEN};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zapi_client::Client;
use zapi_core::{Error, Params};

#[tokio::test]
async fn test_request_returns_raw_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(rpc_result(1, json!({"hostids": ["10084"]})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.request("host.create", Params::empty()).await.unwrap();

    assert_eq!(result["hostids"][0], "10084");
}

#[tokio::test]
async fn test_request_sends_envelope_with_auth_and_empty_params() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(rpc_result(1, json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.request("host.get", Params::empty()).await.unwrap();

    let bodies = sent_bodies(&server).await;
    assert_eq!(bodies.len(), 1);
    let body = &bodies[0];

    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["method"], "host.get");
    assert_eq!(body["params"], json!({}));
    assert_eq!(body["id"], 1);
    assert_eq!(body["auth"], TEST_TOKEN);
}

#[tokio::test]
async fn test_version_probe_omits_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(rpc_result(1, json!("7.0.0")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let version = client.api_version().await.unwrap();
    assert_eq!(version, "7.0.0");

    let bodies = sent_bodies(&server).await;
    let envelope = bodies[0].as_object().unwrap();
    assert!(!envelope.contains_key("auth"));
    assert_eq!(envelope["method"], "apiinfo.version");
}

#[tokio::test]
async fn test_sequential_ids_increase_from_one() {
    let server = MockServer::start().await;
    // Each mock only matches its own id; an unexpected id falls through to
    // wiremock's 404 and fails the call.
    for id in 1..=3 {
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"id": id})))
            .respond_with(rpc_result(id, json!("ok")))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    for _ in 0..3 {
        client.request("host.get", Params::empty()).await.unwrap();
    }
}

#[tokio::test]
async fn test_concurrent_ids_are_unique() {
    let server = MockServer::start().await;
    // The canned response echoes id 0, so every call fails the correlation
    // check; this test only cares about the ids that went out on the wire.
    Mock::given(method("POST"))
        .respond_with(rpc_result(0, json!("ok")))
        .mount(&server)
        .await;

    let client = std::sync::Arc::new(client_for(&server));
    let calls = (0..16).map(|_| {
        let client = client.clone();
        tokio::spawn(async move { client.request("host.get", Params::empty()).await })
    });
    futures::future::join_all(calls).await;

    let mut ids: Vec<i64> = sent_bodies(&server)
        .await
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 16);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16, "duplicate request ids observed");
}

#[tokio::test]
async fn test_id_mismatch_is_distinct_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(rpc_result(99, json!({"hostids": ["10084"]})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    match client.request("host.get", Params::empty()).await {
        Err(Error::IdMismatch { expected, actual }) => {
            assert_eq!(expected, 1);
            assert_eq!(actual, 99);
        }
        other => panic!("expected IdMismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_protocol_error_carries_code_and_method() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(rpc_error(
            1,
            -32602,
            "Invalid params.",
            Some("Host already exists."),
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    match client.request("host.create", Params::empty()).await {
        Err(Error::Api { method, error }) => {
            assert_eq!(method, "host.create");
            assert_eq!(error.code, -32602);
            assert_eq!(error.data.as_deref(), Some("Host already exists."));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_500_is_transport_failure_without_decode() {
    let server = MockServer::start().await;
    // No JSON body at all; the client must classify on status alone.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    match client.request("host.get", Params::empty()).await {
        Err(Error::Http { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_envelope_is_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.request("host.get", Params::empty()).await,
        Err(Error::Decode(_))
    ));
}

#[tokio::test]
async fn test_client_timeout_cancels_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(rpc_result(1, json!("ok")).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = Client::with_timeout(server.uri(), TEST_TOKEN, Duration::from_millis(100))
        .unwrap();
    match client.request("host.get", Params::empty()).await {
        Err(Error::Timeout) => {}
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_per_call_deadline_cancels_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(rpc_result(1, json!("ok")).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .request_with_timeout("host.get", Params::empty(), Duration::from_millis(100))
        .await;
    match result {
        Err(err @ Error::Timeout) => assert!(err.to_string().contains("timed out")),
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_failure() {
    // Nothing listens on port 9; connection is refused before HTTP exists.
    let client = Client::new("http://127.0.0.1:9/api_jsonrpc.php", TEST_TOKEN).unwrap();
    assert!(matches!(
        client.request("host.get", Params::empty()).await,
        Err(Error::Transport(_))
    ));
}

#[tokio::test]
async fn test_content_type_is_json_rpc() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api_jsonrpc.php"))
        .respond_with(rpc_result(1, json!("ok")))
        .mount(&server)
        .await;

    let client = Client::new(
        format!("{}/api_jsonrpc.php", server.uri()),
        TEST_TOKEN,
    )
    .unwrap();
    client.request("host.get", Params::empty()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .expect("content-type header present");
    assert_eq!(content_type.to_str().unwrap(), "application/json-rpc");
}

#[tokio::test]
async fn test_delete_convention_sends_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(rpc_result(1, json!({"hostids": ["10084"]})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .request("host.delete", Params::ids(["10084"]))
        .await
        .unwrap();

    let bodies = sent_bodies(&server).await;
    assert_eq!(bodies[0]["params"], json!(["10084"]));
}

#[tokio::test]
async fn test_null_result_maps_to_json_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "result": null,
            "id": 1,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .request("configuration.import", Params::empty())
        .await
        .unwrap();
    assert_eq!(result, Value::Null);
}
