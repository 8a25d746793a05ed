//! Notes REST API — save, list and render.
//!
//! Notes are write-once: there is no edit or delete endpoint.

use actix_web::{web, HttpResponse};
use notes_types::{ListNotesResponse, RenderNoteResponse, SaveNoteRequest, SaveNoteResponse};

use crate::error::ServiceError;
use crate::render::render_with_timeout;
use crate::AppState;

/// POST /save-note
async fn save_note(
    data: web::Data<AppState>,
    body: web::Json<SaveNoteRequest>,
) -> Result<HttpResponse, ServiceError> {
    let markdown = body
        .into_inner()
        .markdown_text
        .ok_or_else(|| ServiceError::InvalidInput("Markdown text is required".to_string()))?;

    let store = data.note_store.clone();
    let id = web::block(move || store.save(markdown.as_bytes())).await??;

    Ok(HttpResponse::Created().json(SaveNoteResponse {
        message: "Note saved successfully".to_string(),
        note_id: id.into_string(),
    }))
}

/// GET /list-notes
async fn list_notes(data: web::Data<AppState>) -> Result<HttpResponse, ServiceError> {
    let store = data.note_store.clone();
    let ids = web::block(move || store.list()).await??;

    Ok(HttpResponse::Ok().json(ListNotesResponse {
        notes: ids.into_iter().map(|id| id.into_string()).collect(),
    }))
}

/// GET /render-note/{note_id}
async fn render_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let raw_id = path.into_inner();

    let store = data.note_store.clone();
    let content = web::block(move || store.load_raw_id(&raw_id)).await??;

    let markdown = String::from_utf8_lossy(&content).into_owned();
    let html_content =
        render_with_timeout(data.renderer.clone(), markdown, data.config.engine_timeout).await?;

    Ok(HttpResponse::Ok().json(RenderNoteResponse { html_content }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/save-note", web::post().to(save_note))
        .route("/list-notes", web::get().to(list_notes))
        .route("/render-note/{note_id}", web::get().to(render_note));
}
