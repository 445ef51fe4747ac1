//! Test context returned by `TestBuilder`.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment with a mock upstream backend and an in-memory session.
///
/// Create it via [`TestBuilder`](crate::TestBuilder) rather than directly.
pub struct TestContext {
    /// Session backed by an in-memory store, empty at the start of each test
    pub session: Session,

    /// Mock HTTP server standing in for the upstream backend
    pub(crate) server: ServerGuard,
    /// Mock endpoints created by the builder, kept for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        Ok(TestContext {
            session,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock backend, without a trailing slash.
    pub fn backend_url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called as expected
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
