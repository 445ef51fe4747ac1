//! Role router: where each role lands after login or when following the home link.

use crate::{access::guard::required_role, model::role::Role};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Landing path for a role.
pub const fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Guest => HOME_PATH,
        Role::Customer => "/customer/dashboard",
        Role::Donor => "/donor/dashboard",
        Role::Admin => "/admin/dashboard",
    }
}

/// Landing path for a raw role name, unknown or absent roles land on home.
pub fn landing_for(role: Option<&str>) -> &'static str {
    role.and_then(|name| name.parse::<Role>().ok())
        .map_or(HOME_PATH, landing_path)
}

/// Where to navigate after a successful login.
///
/// The path the user was redirected away from wins when the new session is allowed
/// to see it; otherwise the role's landing path is used.
pub fn post_login_target(role: Role, from: Option<&str>) -> String {
    let from = from
        .map(str::trim)
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .filter(|path| !is_login_path(path));

    match from {
        Some(path) if required_role(path).is_none_or(|required| required == role) => {
            path.to_string()
        }
        _ => landing_path(role).to_string(),
    }
}

fn is_login_path(path: &str) -> bool {
    path == LOGIN_PATH || path.starts_with("/login?") || path.starts_with("/login/")
}
