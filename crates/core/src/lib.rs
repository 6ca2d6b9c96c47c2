//! Siloshare core: note model, validation, and the in-memory note store.
//!
//! This crate has no I/O and no HTTP dependencies so the store can be
//! exercised directly from unit tests and reused by any front end.

pub mod clock;
pub mod error;
pub mod model;
pub mod store;
pub mod types;
pub mod validation;
