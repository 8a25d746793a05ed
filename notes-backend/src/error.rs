//! Error taxonomy of the request handler layer.
//!
//! Component errors convert into [`ServiceError`], which actix renders as a
//! status code plus the `{"error": ...}` envelope.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use notes_types::ErrorResponse;

use crate::grammar::GrammarError;
use crate::notes::StoreError;
use crate::render::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A required field is missing or malformed
    #[error("{0}")]
    InvalidInput(String),
    #[error("Note not found")]
    NotFound(String),
    /// The grammar engine or the renderer failed or timed out
    #[error("{0}")]
    EngineUnavailable(String),
    #[error("{0}")]
    StorageFault(String),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::EngineUnavailable(_) => StatusCode::BAD_GATEWAY,
            ServiceError::StorageFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            ServiceError::NotFound(id) => log::debug!("Note {} not found", id),
            _ if status.is_server_error() => {
                log::error!("Request failed with {}: {}", status, self)
            }
            _ => {}
        }
        HttpResponse::build(status).json(ErrorResponse::new(self.to_string()))
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ServiceError::NotFound(id),
            StoreError::InvalidId(msg) => ServiceError::InvalidInput(msg),
            StoreError::Collision(_) | StoreError::Io(_) => {
                ServiceError::StorageFault(format!("Storage error: {}", err))
            }
        }
    }
}

impl From<GrammarError> for ServiceError {
    fn from(err: GrammarError) -> Self {
        log::error!("[GRAMMAR] Check failed: {}", err);
        ServiceError::EngineUnavailable("Grammar engine unavailable".to_string())
    }
}

impl From<RenderError> for ServiceError {
    fn from(err: RenderError) -> Self {
        ServiceError::EngineUnavailable(format!("Rendering failed: {}", err))
    }
}

impl From<actix_web::error::BlockingError> for ServiceError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        ServiceError::StorageFault(format!("Storage task failed: {}", err))
    }
}
