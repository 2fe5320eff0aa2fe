use crate::runner::probe;

use ep_config::Config;

use googletest::assert_that;
use googletest::prelude::*;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn backend_only_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.backend.base_url = base_url.to_string();
    config
}

#[tokio::test]
async fn given_healthy_backend_without_identity_or_store_config_when_probe_then_reachable() {
    // Given
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&mock_server)
        .await;
    let config = backend_only_config(&mock_server.uri());
    assert!(config.identity.api_key.is_none());
    assert!(config.document_store.project_id.is_none());

    // When
    let report = probe(&config).await.unwrap();

    // Then
    assert_that!(report["backendReachable"].as_bool(), some(eq(true)));
    assert_eq!(report["backendUrl"], Value::String(mock_server.uri()));
}

#[tokio::test]
async fn given_stopped_backend_when_probe_then_unreachable_without_error() {
    // Given
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);
    let config = backend_only_config(&uri);

    // When
    let report = probe(&config).await.unwrap();

    // Then
    assert_that!(report["backendReachable"].as_bool(), some(eq(false)));
}
