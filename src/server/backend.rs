//! Client for the upstream REST backend.
//!
//! Only the auth and password recovery endpoints are consumed here. Responses other than
//! a successful login are never inspected beyond their status code.

use dioxus_logger::tracing;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::Serialize;

use crate::{
    model::auth::{LoginDto, LoginResponseDto, SignupDto},
    server::error::{backend::BackendError, config::ConfigError, Error},
};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const SIGNUP_PATH: &str = "/api/auth/signup";

/// Root segment of the password recovery endpoints, which take their arguments as path
/// segments.
pub const FORGOT_SEGMENT: &str = "forgot";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Body of the backend's change password endpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordBody<'a> {
    password: &'a str,
    re_password: &'a str,
}

#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    /// Builds a client for the backend at `base_url`.
    ///
    /// # Returns
    /// - `Ok(BackendClient)` - Client ready for use
    /// - `Err(Error::ConfigError)` - `base_url` is not an absolute http(s) URL
    /// - `Err(Error::HttpClientError)` - The HTTP client could not be built
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = base_url.trim_end_matches('/').to_string();

        let invalid = |reason: String| ConfigError::InvalidEnvValue {
            var: "BACKEND_URL".to_string(),
            reason,
        };
        let parsed = Url::parse(&base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid(format!("{:?} cannot be used as a base URL", base_url)).into());
        }

        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchanges credentials for a login response.
    ///
    /// The response body is returned as-is; validating it is up to the caller.
    pub async fn login(&self, dto: &LoginDto) -> Result<LoginResponseDto, Error> {
        let response = self.post_json(LOGIN_PATH, dto).await?;

        let body = response
            .json::<LoginResponseDto>()
            .await
            .map_err(|e| BackendError::InvalidBody(e.to_string()))?;

        Ok(body)
    }

    /// Registers a new account. The backend's confirmation body is ignored.
    pub async fn signup(&self, dto: &SignupDto) -> Result<(), Error> {
        self.post_json(SIGNUP_PATH, dto).await?;

        Ok(())
    }

    /// Asks the backend to mail a one-time code to `email`.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), Error> {
        let url = self.segment_url(&[FORGOT_SEGMENT, "verify-email", email])?;

        self.send("/forgot/verify-email", self.http.get(url)).await?;

        Ok(())
    }

    /// Checks the one-time code mailed to `email`.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<(), Error> {
        let url = self.segment_url(&[FORGOT_SEGMENT, "verify-otp", email, otp])?;

        self.send("/forgot/verify-otp", self.http.post(url)).await?;

        Ok(())
    }

    /// Sets a new password for `email` once its one-time code has been verified.
    pub async fn change_password(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), Error> {
        let url = self.segment_url(&[FORGOT_SEGMENT, "change-pass", email])?;
        let body = ChangePasswordBody {
            password,
            re_password: confirm_password,
        };

        self.send("/forgot/change-pass", self.http.post(url).json(&body))
            .await?;

        Ok(())
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &'static str,
        body: &T,
    ) -> Result<Response, BackendError> {
        let url = format!("{}{}", self.base_url, path);

        self.send(path, self.http.post(url).json(body)).await
    }

    /// Appends `segments` to the base URL, escaping each one.
    fn segment_url(&self, segments: &[&str]) -> Result<Url, BackendError> {
        let invalid = || BackendError::Unreachable(format!("invalid base URL {}", self.base_url));

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Sends `request`, logging failures under `route` since the URL itself may carry an
    /// email or one-time code.
    async fn send(
        &self,
        route: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(
                route,
                status = status.as_u16(),
                "Backend request failed"
            );

            return Err(BackendError::from_status(status.as_u16()));
        }

        Ok(response)
    }
}
