//! HTTP controller endpoints for the portal API.
//!
//! Axum handlers which extract the request, hand the work to the service layer and map the
//! result to a response. Every handler documents itself in the OpenAPI document via utoipa.

pub mod auth;
