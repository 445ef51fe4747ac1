//! Helpers for building server state from a test context.

use arc_portal::server::{backend::BackendClient, model::app::AppState};
use arc_test_utils::TestContext;
use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create AppState pointing at the mock backend
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let backend =
            BackendClient::new(&self.backend_url()).expect("Failed to build backend client");

        AppState { backend }
    }
}

/// Read a JSON response body
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
