//! Grammar checking
//!
//! Handlers talk to the engine through [`GrammarChecker`] so the one
//! long-lived engine handle built at startup can be swapped for a stub in tests.

pub mod languagetool;

use async_trait::async_trait;
use notes_types::CorrectionEntry;

pub use languagetool::LanguageToolClient;

#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("request to grammar engine failed: {0}")]
    Request(String),
    #[error("grammar engine timed out")]
    Timeout,
    #[error("grammar engine returned HTTP {0}: {1}")]
    Status(u16, String),
    #[error("unreadable grammar engine response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait GrammarChecker: Send + Sync {
    /// Issues found in `text`, in the order the engine reports them.
    /// Empty text yields an empty list.
    async fn check(&self, text: &str) -> Result<Vec<CorrectionEntry>, GrammarError>;

    /// Whether the engine is reachable right now
    async fn health(&self) -> bool;
}
