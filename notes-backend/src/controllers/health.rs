use actix_web::{web, HttpResponse, Responder};

use crate::AppState;

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const WELCOME: &str = "Welcome to the Markdown Note-taking App! Available endpoints: \
/check-grammar, /save-note, /list-notes, /render-note/<note_id>";

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)));
    cfg.service(web::resource("/api/health").route(web::get().to(health_check)));
}

async fn home() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(WELCOME)
}

async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let engine_up = state.grammar.health().await;

    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": VERSION,
        "uptime_secs": state.started_at.elapsed().as_secs(),
        "grammar_engine": if engine_up { "reachable" } else { "unreachable" }
    }))
}
