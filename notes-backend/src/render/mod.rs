//! Markdown to HTML rendering
//!
//! Output is best-effort HTML straight from the converter. It is NOT
//! sanitized: raw HTML in a note passes through, so anything embedding the
//! result in a browser must sanitize it first.

use pulldown_cmark::{html, Options, Parser};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render timed out after {0:?}")]
    Timeout(Duration),
    #[error("render task failed: {0}")]
    Task(String),
}

/// Converts markdown source into HTML. Implementations must be deterministic.
pub trait HtmlRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}

/// CommonMark renderer with tables and strikethrough enabled
#[derive(Debug, Clone)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl CommonMarkRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);
        Self { options }
    }
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

/// Render on the blocking pool, giving up after `timeout`.
///
/// A timed-out render keeps running on its blocking thread; only the caller
/// stops waiting for it.
pub async fn render_with_timeout(
    renderer: Arc<dyn HtmlRenderer>,
    markdown: String,
    timeout: Duration,
) -> Result<String, RenderError> {
    let task = tokio::task::spawn_blocking(move || renderer.render(&markdown));

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(html)) => Ok(html),
        Ok(Err(join_err)) => Err(RenderError::Task(join_err.to_string())),
        Err(_) => {
            log::warn!("[RENDER] Markdown render exceeded {:?}", timeout);
            Err(RenderError::Timeout(timeout))
        }
    }
}
