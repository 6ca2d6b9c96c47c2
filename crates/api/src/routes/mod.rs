pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /notes                                   list, create
/// /notes/{id}                              delete
/// /notes/{id}/checklist                    get, replace, delete
/// /notes/{id}/checklist/items              add item
/// /notes/{id}/checklist/items/{item_id}    update, delete item
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/notes", notes::router())
}
