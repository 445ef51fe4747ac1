use dioxus::prelude::*;

use crate::client::{
    components::{AdminLayout, CustomerLayout, DonorLayout, Navbar},
    routes::{
        auth::{ForgotPassword, Login, Register, ResetPassword, VerifyOtp},
        dashboard::{AdminDashboard, CustomerDashboard, DonorDashboard},
        About, Contact, Home, NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/about")]
    About {},

    #[route("/login?:from")]
    Login { from: String },

    #[route("/contact")]
    Contact {},

    #[route("/register")]
    Register {},

    #[route("/forgot-password")]
    ForgotPassword {},

    #[route("/verify-otp?:email")]
    VerifyOtp { email: String },

    #[route("/reset-password?:email")]
    ResetPassword { email: String },

    #[nest("/customer")]
        #[layout(CustomerLayout)]
        #[route("/dashboard")]
        CustomerDashboard {},
        #[end_layout]
    #[end_nest]

    #[nest("/donor")]
        #[layout(DonorLayout)]
        #[route("/dashboard")]
        DonorDashboard {},
        #[end_layout]
    #[end_nest]

    #[nest("/admin")]
        #[layout(AdminLayout)]
        #[route("/dashboard")]
        AdminDashboard {},
        #[end_layout]
    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Resolve a path produced by the role router, falling back to home.
    pub fn from_path(path: &str) -> Self {
        path.parse().unwrap_or(Route::Home {})
    }

    /// Login page that returns to `from` once logged in.
    pub fn login_from(from: impl Into<String>) -> Self {
        Route::Login { from: from.into() }
    }
}
