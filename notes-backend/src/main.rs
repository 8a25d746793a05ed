use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notes_backend::config::Config;
use notes_backend::grammar::{GrammarChecker, LanguageToolClient};
use notes_backend::notes::NoteStore;
use notes_backend::render::{CommonMarkRenderer, HtmlRenderer};
use notes_backend::{configure, json_config, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Bootstrap the notes directory before accepting requests
    let note_store = match NoteStore::new(config.notes_dir.clone()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::error!("Cannot open notes directory {:?}: {}", config.notes_dir, e);
            std::process::exit(1);
        }
    };

    // One engine handle for the whole process
    let languagetool = LanguageToolClient::new(
        &config.languagetool_url,
        &config.grammar_language,
        config.engine_timeout,
    );
    if languagetool.health().await {
        log::info!(
            "LanguageTool reachable at {} (language: {})",
            config.languagetool_url,
            languagetool.language()
        );
    } else {
        log::warn!(
            "LanguageTool not reachable at {} - /check-grammar will fail until it is up",
            config.languagetool_url
        );
    }
    let grammar: Arc<dyn GrammarChecker> = Arc::new(languagetool);
    let renderer: Arc<dyn HtmlRenderer> = Arc::new(CommonMarkRenderer::new());
    let started_at = Instant::now();

    let bind_addr = config.bind_addr.clone();
    let port = config.port;
    log::info!("Notes service listening on http://{}:{}", bind_addr, port);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                config: config.clone(),
                note_store: Arc::clone(&note_store),
                grammar: Arc::clone(&grammar),
                renderer: Arc::clone(&renderer),
                started_at,
            }))
            .app_data(json_config(config.max_body_bytes))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(configure)
    })
    .bind((bind_addr.as_str(), port))?
    .run();

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
