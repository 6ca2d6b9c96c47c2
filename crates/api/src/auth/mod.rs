//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`basic`] -- Shared basic-auth credential and `Authorization` header parsing.

pub mod basic;
pub mod password;
