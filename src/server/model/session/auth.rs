//! Authenticated session storage.
//!
//! [`SessionStore`] is the single read/write point for the portal session. It wraps the
//! request's tower-sessions [`Session`], which is keyed by the browser's session cookie
//! and persisted in Valkey, so the login survives page reloads on that browser only.

use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::session::{AuthSession, Credential, Identity},
    server::error::{auth::AuthError, Error},
};

/// Session key for the authenticated session record.
///
/// Namespaced under "arc:auth:" to avoid collisions with other session data.
pub const SESSION_AUTH_KEY: &str = "arc:auth:session";

/// Read/write access to the authenticated session of one browser.
#[derive(Clone)]
pub struct SessionStore {
    session: Session,
}

impl SessionStore {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Persists a new authenticated session under a fresh session ID, replacing any active
    /// one.
    ///
    /// # Arguments
    /// - `identity` - Name, email and role returned by the backend
    /// - `credential` - Bearer token returned by the backend
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Session stored and active
    /// - `Err(Error::AuthError(AuthError::InvalidSession))` - Guest role or empty credential
    /// - `Err(Error::SessionError)` - Session storage failed
    pub async fn login(
        &self,
        identity: Identity,
        credential: Credential,
    ) -> Result<AuthSession, Error> {
        let auth_session = AuthSession::new(identity, credential).map_err(AuthError::InvalidSession)?;

        // New session ID on every login, a cookie issued before login never carries the
        // authenticated session
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_KEY, &auth_session).await?;

        Ok(auth_session)
    }

    /// Clears the active session.
    ///
    /// # Returns
    /// - `Ok(Some(AuthSession))` - The session that was logged out
    /// - `Ok(None)` - Nothing to log out, the store is left untouched
    /// - `Err(Error::SessionError)` - Session retrieval failed
    pub async fn logout(&self) -> Result<Option<AuthSession>, Error> {
        let current = self.current().await?;

        // Clearing a session which has never been saved errors on save, only clear when
        // there is actually something stored.
        if current.is_some() {
            self.session.clear().await;
        }

        Ok(current)
    }

    /// Returns the active session, if any.
    ///
    /// A stored record that cannot be read back or no longer satisfies the session
    /// invariants is removed and reported as no session.
    pub async fn current(&self) -> Result<Option<AuthSession>, Error> {
        let Some(stored) = self.session.get_value(SESSION_AUTH_KEY).await? else {
            return Ok(None);
        };

        let record = serde_json::from_value::<AuthSession>(stored)
            .map_err(|e| e.to_string())
            .and_then(|record| record.validate().map_err(|e| e.to_string()));

        match record {
            Ok(auth_session) => Ok(Some(auth_session)),
            Err(reason) => {
                tracing::debug!(reason = %reason, "Discarding invalid session record");

                self.session.remove_value(SESSION_AUTH_KEY).await?;

                Ok(None)
            }
        }
    }

    /// Like [`current`](Self::current) but treats a missing session as an error.
    pub async fn require(&self) -> Result<AuthSession, Error> {
        self.current()
            .await?
            .ok_or_else(|| AuthError::NotLoggedIn.into())
    }
}
