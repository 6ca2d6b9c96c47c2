//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text defaults.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejection renders as a `BAD_REQUEST` error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
