//! Declarative test builder.
//!
//! Endpoints are queued on the builder and created on the mock server during `build()`, in
//! the order they were added. Mockito matches mocks on the same path in creation order, so
//! queuing a success and then a failure for one path answers the first request with the
//! success and the next with the failure.

use mockito::{Mock, ServerGuard};
use serde_json::Value;

use crate::{error::TestError, fixtures::backend::mockito as backend, TestContext};

type MockBuilder = Box<dyn FnOnce(&mut ServerGuard) -> Mock>;

/// Builder for declarative test initialization.
///
/// Every test gets its own mock backend server and an empty in-memory session, configure
/// the backend endpoints the test expects to be called and finish with `build()`.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_login_endpoint(factory::login_response("abc", "A", "a@x.com", "DONOR"), 1)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    mock_builders: Vec<MockBuilder>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock a successful backend login returning `body`.
    ///
    /// # Arguments
    /// - `body` - JSON body of the login response, see [`factory::login_response`](crate::fixtures::backend::factory::login_response)
    /// - `expected_requests` - Number of times the endpoint is expected to be called
    pub fn with_login_endpoint(self, body: Value, expected_requests: usize) -> Self {
        self.with_mock_endpoint(move |server| backend::mock_login(server, &body, expected_requests))
    }

    /// Mock a failing backend login.
    ///
    /// # Arguments
    /// - `status` - HTTP status the backend answers with
    /// - `expected_requests` - Number of times the endpoint is expected to be called
    pub fn with_login_error(self, status: usize, expected_requests: usize) -> Self {
        self.with_mock_endpoint(move |server| {
            backend::mock_login_error(server, status, expected_requests)
        })
    }

    /// Mock the backend signup endpoint.
    ///
    /// # Arguments
    /// - `status` - HTTP status the backend answers with
    /// - `expected_requests` - Number of times the endpoint is expected to be called
    pub fn with_signup_endpoint(self, status: usize, expected_requests: usize) -> Self {
        self.with_mock_endpoint(move |server| backend::mock_signup(server, status, expected_requests))
    }

    /// Mock the backend endpoint mailing a one-time code to `email`.
    pub fn with_forgot_password_endpoint(
        self,
        email: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        let path = backend::verify_email_path(email);

        self.with_mock_endpoint(move |server| {
            backend::mock_forgot(server, "GET", &path, status, expected_requests)
        })
    }

    /// Mock the backend endpoint checking `otp` for `email`.
    pub fn with_verify_otp_endpoint(
        self,
        email: &str,
        otp: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        let path = backend::verify_otp_path(email, otp);

        self.with_mock_endpoint(move |server| {
            backend::mock_forgot(server, "POST", &path, status, expected_requests)
        })
    }

    /// Mock the backend endpoint changing the password of `email`.
    pub fn with_change_password_endpoint(
        self,
        email: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        let path = backend::change_password_path(email);

        self.with_mock_endpoint(move |server| {
            backend::mock_forgot(server, "POST", &path, status, expected_requests)
        })
    }

    /// Add a custom mock endpoint.
    ///
    /// For responses the shortcuts above don't cover, such as malformed bodies.
    ///
    /// ```ignore
    /// let test = TestBuilder::new()
    ///     .with_mock_endpoint(|server| {
    ///         server
    ///             .mock("POST", "/api/auth/login")
    ///             .with_status(200)
    ///             .with_body("welcome")
    ///             .create()
    ///     })
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context, creating all queued endpoints on the mock server.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Mock server and session ready for use
    /// - `Err(TestError)` - Context initialization failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        for builder in self.mock_builders {
            let mock = builder(&mut context.server);
            context.mocks.push(mock);
        }

        Ok(context)
    }
}
