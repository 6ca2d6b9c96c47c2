//! Handlers for notes and their checklists.
//!
//! Every handler requires the shared basic-auth credential via [`AuthUser`].
//! Store calls are synchronous and in-memory, so they run directly on the
//! request task.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use siloshare_core::error::CoreError;
use siloshare_core::model::NewChecklistItem;
use siloshare_core::validation::{validate_item_text, validate_note_text};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body for `POST /notes`.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub text: String,
    pub checklist: Option<ChecklistRequest>,
}

/// Checklist payload for note creation and `PUT /notes/{id}/checklist`.
#[derive(Debug, Default, Deserialize)]
pub struct ChecklistRequest {
    #[serde(default)]
    pub items: Vec<NewChecklistItem>,
}

/// Body for `POST /notes/{id}/checklist/items`.
#[derive(Debug, Deserialize)]
pub struct AddChecklistItemRequest {
    pub text: String,
}

/// Body for `PATCH /notes/{id}/checklist/items/{item_id}`. Absent fields are
/// left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct PatchChecklistItemRequest {
    pub text: Option<String>,
    pub done: Option<bool>,
}

fn validation(msg: String) -> AppError {
    AppError::Core(CoreError::Validation(msg))
}

// ---------------------------------------------------------------------------
// Note handlers
// ---------------------------------------------------------------------------

/// POST /notes
///
/// Create a note, optionally with an initial checklist.
pub async fn create_note(
    _auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNoteRequest>,
) -> AppResult<impl IntoResponse> {
    validate_note_text(&input.text).map_err(validation)?;

    let items = input.checklist.unwrap_or_default().items;
    for item in &items {
        validate_item_text(&item.text).map_err(validation)?;
    }

    let note = state.store.add(input.text, items);

    tracing::info!(
        note_id = %note.id,
        checklist_items = note.checklist.as_ref().map_or(0, |c| c.items.len()),
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// GET /notes
///
/// List live notes, oldest first. Expired notes are purged first.
pub async fn list_notes(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let notes = state.store.get_all();
    Ok(Json(DataResponse { data: notes }))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !state.store.delete(&id) {
        return Err(CoreError::not_found("Note", id).into());
    }

    tracing::info!(note_id = %id, "Note deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Checklist handlers
// ---------------------------------------------------------------------------

/// PUT /notes/{id}/checklist
///
/// Replace the note's checklist wholesale. Returns the whole note.
pub async fn put_checklist(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<ChecklistRequest>,
) -> AppResult<impl IntoResponse> {
    let note = state.store.set_checklist(&id, input.items)?;

    tracing::info!(note_id = %id, "Checklist replaced");
    Ok(Json(DataResponse { data: note }))
}

/// GET /notes/{id}/checklist
pub async fn get_checklist(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let checklist = state.store.get_checklist(&id)?;
    Ok(Json(DataResponse { data: checklist }))
}

/// DELETE /notes/{id}/checklist
pub async fn delete_checklist(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !state.store.delete_checklist(&id) {
        return Err(CoreError::not_found("Note", id).into());
    }

    tracing::info!(note_id = %id, "Checklist deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Checklist item handlers
// ---------------------------------------------------------------------------

/// POST /notes/{id}/checklist/items
///
/// Append an item. Returns the resulting checklist.
pub async fn add_checklist_item(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<AddChecklistItemRequest>,
) -> AppResult<impl IntoResponse> {
    validate_item_text(&input.text).map_err(validation)?;

    let checklist = state.store.add_checklist_item(&id, input.text)?;

    tracing::info!(note_id = %id, items = checklist.items.len(), "Checklist item added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: checklist })))
}

/// PATCH /notes/{id}/checklist/items/{item_id}
pub async fn update_checklist_item(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
    AppJson(input): AppJson<PatchChecklistItemRequest>,
) -> AppResult<impl IntoResponse> {
    let checklist = state
        .store
        .update_checklist_item(&id, &item_id, input.text, input.done)?;

    tracing::info!(note_id = %id, item_id = %item_id, "Checklist item updated");
    Ok(Json(DataResponse { data: checklist }))
}

/// DELETE /notes/{id}/checklist/items/{item_id}
pub async fn delete_checklist_item(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    state.store.remove_checklist_item(&id, &item_id)?;

    tracing::info!(note_id = %id, item_id = %item_id, "Checklist item deleted");
    Ok(StatusCode::NO_CONTENT)
}
