//! Basic-auth extractor for Axum handlers.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use siloshare_core::error::CoreError;

use crate::auth::basic::parse_basic_header;
use crate::error::AppError;
use crate::state::AppState;

/// A caller that presented the shared credential.
///
/// Use this as an extractor parameter in any handler under `/api/notes`:
///
/// ```ignore
/// async fn my_handler(_auth: AuthUser) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let credentials = parse_basic_header(auth_header).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Basic <credentials>".into(),
            ))
        })?;

        // Argon2 verification is CPU-bound; keep it off the async workers.
        let username = credentials.username.clone();
        let config = Arc::clone(&state.config);
        let verified = tokio::task::spawn_blocking(move || config.auth.verify(&credentials))
            .await
            .map_err(|e| AppError::InternalError(format!("Credential check failed: {e}")))?;

        if !verified {
            tracing::warn!(username = %username, "Rejected basic auth credentials");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            )));
        }

        Ok(AuthUser { username })
    }
}
