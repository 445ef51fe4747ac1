use dioxus_logger::tracing;

use crate::{
    model::{auth::LoginDto, session::AuthSession},
    server::{
        backend::BackendClient,
        error::{auth::AuthError, backend::BackendError, Error},
        model::session::SessionStore,
    },
};

/// Service for establishing and ending sessions.
pub struct LoginService<'a> {
    backend: &'a BackendClient,
    store: &'a SessionStore,
}

impl<'a> LoginService<'a> {
    pub fn new(backend: &'a BackendClient, store: &'a SessionStore) -> Self {
        Self { backend, store }
    }

    /// Logs in with the backend and stores the resulting session.
    ///
    /// Any active session is replaced only once the backend has accepted the credentials
    /// and returned a complete response.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Session established
    /// - `Err(Error::AuthError(AuthError::Validation))` - Email or password left empty
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Backend refused the login (401/403)
    /// - `Err(Error::AuthError(AuthError::InvalidLoginResponse))` - Response missing token, email or role,
    ///   or granting the guest role
    /// - `Err(Error::BackendError)` - Backend unreachable or failed otherwise
    /// - `Err(Error::SessionError)` - Session storage failed
    pub async fn login(&self, dto: LoginDto) -> Result<AuthSession, Error> {
        let dto = LoginDto {
            email: dto.email.trim().to_string(),
            password: dto.password,
        };

        if dto.email.is_empty() {
            return Err(AuthError::Validation("Email is required".to_string()).into());
        }
        if dto.password.is_empty() {
            return Err(AuthError::Validation("Password is required".to_string()).into());
        }

        let response = self.backend.login(&dto).await.map_err(|err| match err {
            Error::BackendError(BackendError::Unauthorized(_)) => {
                Error::AuthError(AuthError::InvalidCredentials)
            }
            err => err,
        })?;

        let (identity, credential) =
            AuthSession::from_login_response(response).map_err(AuthError::InvalidLoginResponse)?;

        // A guest role from the backend is as unusable as a missing one
        let session = self
            .store
            .login(identity, credential)
            .await
            .map_err(|err| match err {
                Error::AuthError(AuthError::InvalidSession(reason)) => {
                    Error::AuthError(AuthError::InvalidLoginResponse(reason))
                }
                err => err,
            })?;

        tracing::info!(
            email = %session.identity().email,
            role = %session.role(),
            "User logged in"
        );

        Ok(session)
    }

    /// Ends the active session, if any.
    pub async fn logout(&self) -> Result<Option<AuthSession>, Error> {
        let logged_out = self.store.logout().await?;

        if let Some(session) = &logged_out {
            tracing::info!(
                email = %session.identity().email,
                role = %session.role(),
                "User logged out"
            );
        }

        Ok(logged_out)
    }
}
