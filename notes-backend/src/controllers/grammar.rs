use actix_web::{web, HttpResponse};
use notes_types::{CheckGrammarRequest, CheckGrammarResponse};

use crate::error::ServiceError;
use crate::AppState;

/// POST /check-grammar
async fn check_grammar(
    data: web::Data<AppState>,
    body: web::Json<CheckGrammarRequest>,
) -> Result<HttpResponse, ServiceError> {
    let text = body.into_inner().text.ok_or_else(|| {
        ServiceError::InvalidInput("Text is required for grammar check".to_string())
    })?;

    let corrections = data.grammar.check(&text).await?;

    Ok(HttpResponse::Ok().json(CheckGrammarResponse { corrections }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/check-grammar", web::post().to(check_grammar));
}
