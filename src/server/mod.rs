//! Server side of the portal.
//!
//! Owns the persisted session of each browser, forwards authentication to the upstream
//! REST backend and serves the API the client calls.

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
