#![allow(dead_code)]

use ep_session::{BackendClient, FirebaseAuthClient, FirestoreClient};

use std::time::Duration;

use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";
pub const PROJECT_ID: &str = "demo-portal";
pub const DOCUMENTS_PATH: &str = "/v1/projects/demo-portal/databases/(default)/documents";

pub fn backend_client(server: &MockServer) -> BackendClient {
    BackendClient::new(
        &server.uri(),
        Duration::from_millis(300),
        Duration::from_secs(5),
    )
    .unwrap()
}

pub fn auth_client(server: &MockServer) -> FirebaseAuthClient {
    FirebaseAuthClient::new(API_KEY, &server.uri(), &server.uri(), Duration::from_secs(5)).unwrap()
}

pub fn firestore_client(server: &MockServer) -> FirestoreClient {
    FirestoreClient::new(&server.uri(), PROJECT_ID, "(default)", Duration::from_secs(5)).unwrap()
}

/// URL of a server that has already shut down.
pub async fn closed_server_uri() -> String {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);
    uri
}
