//! Route definitions for notes and checklists.
//!
//! Mounted at `/notes` by `api_routes()`.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes.
///
/// ```text
/// GET    /                                  -> list_notes
/// POST   /                                  -> create_note
/// DELETE /{id}                              -> delete_note
/// GET    /{id}/checklist                    -> get_checklist
/// PUT    /{id}/checklist                    -> put_checklist
/// DELETE /{id}/checklist                    -> delete_checklist
/// POST   /{id}/checklist/items              -> add_checklist_item
/// PATCH  /{id}/checklist/items/{item_id}    -> update_checklist_item
/// DELETE /{id}/checklist/items/{item_id}    -> delete_checklist_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route("/{id}", delete(notes::delete_note))
        .route(
            "/{id}/checklist",
            get(notes::get_checklist)
                .put(notes::put_checklist)
                .delete(notes::delete_checklist),
        )
        .route("/{id}/checklist/items", post(notes::add_checklist_item))
        .route(
            "/{id}/checklist/items/{item_id}",
            patch(notes::update_checklist_item).delete(notes::delete_checklist_item),
        )
}
