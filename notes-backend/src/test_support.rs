//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use notes_types::CorrectionEntry;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::grammar::{GrammarChecker, GrammarError};
use crate::notes::NoteStore;
use crate::render::CommonMarkRenderer;
use crate::AppState;

/// Grammar checker that flags every occurrence of "teh"
pub struct StubChecker;

#[async_trait]
impl GrammarChecker for StubChecker {
    async fn check(&self, text: &str) -> Result<Vec<CorrectionEntry>, GrammarError> {
        Ok(text
            .match_indices("teh")
            .map(|(offset, word)| CorrectionEntry {
                message: "Possible typo".to_string(),
                suggestions: vec!["the".to_string(), "tech".to_string()],
                offset: offset as u64,
                length: word.len() as u64,
            })
            .collect())
    }

    async fn health(&self) -> bool {
        true
    }
}

/// Grammar checker whose engine is always down
pub struct DownChecker;

#[async_trait]
impl GrammarChecker for DownChecker {
    async fn check(&self, _text: &str) -> Result<Vec<CorrectionEntry>, GrammarError> {
        Err(GrammarError::Timeout)
    }

    async fn health(&self) -> bool {
        false
    }
}

/// App state over a store rooted at `notes_dir`
pub fn test_state(notes_dir: &Path, grammar: Arc<dyn GrammarChecker>) -> AppState {
    let config = Config {
        notes_dir: notes_dir.to_path_buf(),
        ..Config::default()
    };
    AppState {
        note_store: Arc::new(NoteStore::new(notes_dir).expect("Failed to create store")),
        config,
        grammar,
        renderer: Arc::new(CommonMarkRenderer::new()),
        started_at: Instant::now(),
    }
}
