//! Service layer.
//!
//! Business logic sitting between the HTTP controllers and the backend client and
//! session store.

pub mod auth;
