//! Session data shared by the portal server and client.
//!
//! An [`AuthSession`] only exists for an authenticated role and always carries a
//! non-empty credential; a visitor without one is a guest.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    auth::{LoginResponseDto, SessionDto},
    role::Role,
};

/// Reasons a session cannot be established.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Login response is missing the {0} field")]
    MissingField(&'static str),
    #[error("Login response contains an unknown role: {0:?}")]
    UnknownRole(String),
    #[error("A session cannot be held with the {0} role")]
    UnauthenticatedRole(Role),
    #[error("A session requires a non-empty credential")]
    EmptyCredential,
}

/// Who is logged in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Opaque bearer token issued by the backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(**redacted**)")
    }
}

/// An authenticated session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    identity: Identity,
    credential: Credential,
}

impl AuthSession {
    /// Creates a session, enforcing that the role is authenticated and the credential
    /// is not empty.
    pub fn new(identity: Identity, credential: Credential) -> Result<Self, SessionError> {
        if !identity.role.is_authenticated() {
            return Err(SessionError::UnauthenticatedRole(identity.role));
        }

        if credential.is_empty() {
            return Err(SessionError::EmptyCredential);
        }

        Ok(Self {
            identity,
            credential,
        })
    }

    /// Splits a backend login response into an identity and credential.
    ///
    /// `token`, `email` and `role` are required; a missing `name` is stored as empty.
    pub fn from_login_response(
        response: LoginResponseDto,
    ) -> Result<(Identity, Credential), SessionError> {
        let token = non_empty(response.token).ok_or(SessionError::MissingField("token"))?;
        let email = non_empty(response.email).ok_or(SessionError::MissingField("email"))?;
        let role = non_empty(response.role).ok_or(SessionError::MissingField("role"))?;

        let role = role
            .parse::<Role>()
            .map_err(|_| SessionError::UnknownRole(role))?;

        let identity = Identity {
            name: response.name.unwrap_or_default(),
            email,
            role,
        };

        Ok((identity, Credential::new(token)))
    }

    /// Re-checks the invariants of a session read back from storage.
    pub fn validate(self) -> Result<Self, SessionError> {
        Self::new(self.identity, self.credential)
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn role(&self) -> Role {
        self.identity.role
    }

    pub fn to_dto(&self) -> SessionDto {
        SessionDto {
            name: self.identity.name.clone(),
            email: self.identity.email.clone(),
            role: self.identity.role,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
