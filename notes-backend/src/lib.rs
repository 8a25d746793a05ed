//! Markdown notes service: flat-file note storage, HTML rendering and grammar
//! checking behind a small actix-web API.

use actix_web::web;
use std::sync::Arc;
use std::time::Instant;

pub mod config;
pub mod controllers;
pub mod error;
pub mod grammar;
pub mod notes;
pub mod render;

#[cfg(test)]
pub mod test_support;

use config::Config;
use error::ServiceError;
use grammar::GrammarChecker;
use notes::NoteStore;
use render::HtmlRenderer;

pub struct AppState {
    pub config: Config,
    pub note_store: Arc<NoteStore>,
    /// Long-lived grammar engine handle, shared by every request
    pub grammar: Arc<dyn GrammarChecker>,
    pub renderer: Arc<dyn HtmlRenderer>,
    /// Server start time for uptime calculation
    pub started_at: Instant,
}

/// Register every route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(controllers::health::config_routes)
        .configure(controllers::grammar::config)
        .configure(controllers::notes::config);
}

/// JSON extractor settings: body size limit, and bad bodies reported with
/// the service's own error envelope
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            log::debug!("Rejected request body: {}", err);
            ServiceError::InvalidInput(format!("Invalid JSON body: {}", err)).into()
        })
}
