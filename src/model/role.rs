use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Portal role of a visitor.
///
/// `Guest` is the implicit role of anyone without a session; every other role is
/// granted by the backend on login. Serialized in the backend's upper-case form
/// (`"CUSTOMER"`, `"DONOR"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum Role {
    Guest,
    Customer,
    Donor,
    Admin,
}

/// Error returned when a role name does not match any [`Role`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl Role {
    /// Every role, in the order they are listed to users.
    pub const ALL: [Role; 4] = [Role::Guest, Role::Customer, Role::Donor, Role::Admin];

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "GUEST",
            Role::Customer => "CUSTOMER",
            Role::Donor => "DONOR",
            Role::Admin => "ADMIN",
        }
    }

    /// Whether the role can be held by an authenticated session.
    pub const fn is_authenticated(self) -> bool {
        match self {
            Role::Guest => false,
            Role::Customer | Role::Donor | Role::Admin => true,
        }
    }

    /// Whether a visitor may pick this role for themselves when signing up.
    ///
    /// Admin accounts are provisioned by other admins on the backend.
    pub const fn is_self_service(self) -> bool {
        match self {
            Role::Customer | Role::Donor => true,
            Role::Guest | Role::Admin => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
