//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Log in through the backend and store the session
/// - `POST /api/auth/signup` - Register a customer or donor account
/// - `POST /api/auth/logout` - Clear the session
/// - `GET /api/auth/session` - Get the active session
/// - `POST /api/auth/forgot-password` - Have the backend mail a password reset code
/// - `POST /api/auth/verify-otp` - Verify a password reset code
/// - `POST /api/auth/reset-password` - Set a new password after verification
///
/// The router still needs the session layer applied, see
/// [`connect_to_session`](crate::server::startup::connect_to_session).
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "ARC Portal", description = "ARC Portal API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login::login))
        .routes(routes!(controller::auth::signup::signup))
        .routes(routes!(controller::auth::logout::logout))
        .routes(routes!(controller::auth::session::get_session))
        .routes(routes!(controller::auth::password_reset::forgot_password))
        .routes(routes!(controller::auth::password_reset::verify_otp))
        .routes(routes!(controller::auth::password_reset::reset_password))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
