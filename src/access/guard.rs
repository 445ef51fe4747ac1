//! Route guard for role-restricted views.

use crate::model::{auth::SessionDto, role::Role};

/// Path prefixes owned by a single role.
const ROLE_SECTIONS: [(&str, Role); 3] = [
    ("/customer", Role::Customer),
    ("/donor", Role::Donor),
    ("/admin", Role::Admin),
];

/// The client's view of authentication.
///
/// `fetched` stays `false` while the session check is in flight so guards wait
/// instead of redirecting a user who is in fact logged in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<SessionDto>,
    pub fetched: bool,
}

impl AuthState {
    /// State before the session check has answered.
    pub fn checking() -> Self {
        Self::default()
    }

    pub fn resolved(session: Option<SessionDto>) -> Self {
        Self {
            session,
            fetched: true,
        }
    }

    /// Effective role, `Guest` when there is no session.
    pub fn role(&self) -> Role {
        self.session
            .as_ref()
            .map_or(Role::Guest, |session| session.role)
    }
}

/// What a protected view should do for the current [`AuthState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Auth check still running, render nothing and do not redirect.
    Pending,
    Render,
    /// No session, send the user to login and come back to `from` afterwards.
    RedirectToLogin { from: String },
    /// Session of the wrong role.
    RedirectHome,
}

/// Gate in front of a view, optionally restricted to a single role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    required: Option<Role>,
}

impl RouteGuard {
    pub const fn new(required: Option<Role>) -> Self {
        Self { required }
    }

    /// Any logged in user may pass.
    pub const fn authenticated() -> Self {
        Self::new(None)
    }

    pub const fn role(required: Role) -> Self {
        Self::new(Some(required))
    }

    /// Whether a session holding `role` passes this guard.
    pub fn permits(&self, role: Role) -> bool {
        if !role.is_authenticated() {
            return false;
        }

        match self.required {
            Some(required) => required == role,
            None => true,
        }
    }

    pub fn check(&self, auth: &AuthState, requested_path: &str) -> GuardOutcome {
        if !auth.fetched {
            return GuardOutcome::Pending;
        }

        let Some(session) = auth.session.as_ref() else {
            return GuardOutcome::RedirectToLogin {
                from: requested_path.to_string(),
            };
        };

        if self.permits(session.role) {
            GuardOutcome::Render
        } else {
            GuardOutcome::RedirectHome
        }
    }
}

/// Role required by the section a path belongs to, `None` for public paths.
pub fn required_role(path: &str) -> Option<Role> {
    let path = path.split(['?', '#']).next().unwrap_or_default();

    ROLE_SECTIONS
        .into_iter()
        .find(|(prefix, _)| {
            path.strip_prefix(prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
        .map(|(_, role)| role)
}
