//! Authentication extractors.
//!
//! - [`auth::AuthUser`] -- Requires valid basic-auth credentials.

pub mod auth;
