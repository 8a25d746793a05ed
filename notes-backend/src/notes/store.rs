//! NoteStore — keyed durable storage for markdown notes
//!
//! Save assigns a fresh [`NoteId`] and writes the content to `<id>.md`,
//! Load reads it back byte for byte, and List enumerates the directory.
//! Notes are never updated in place, so readers need no locking.

use super::file_ops;
use super::id::NoteId;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("note {0} not found")]
    NotFound(String),
    #[error("{0}")]
    InvalidId(String),
    /// A freshly generated id was already taken on disk
    #[error("note id collision: {0}")]
    Collision(String),
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Flat-directory note store
pub struct NoteStore {
    notes_dir: PathBuf,
}

impl NoteStore {
    /// Open the store rooted at `notes_dir`, creating the directory if needed
    pub fn new(notes_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let notes_dir = notes_dir.into();
        std::fs::create_dir_all(&notes_dir)?;
        log::info!("[NOTES] Storing notes in {:?}", notes_dir);
        Ok(Self { notes_dir })
    }

    /// Get the notes directory path
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Persist `content` verbatim under a new id and return that id
    pub fn save(&self, content: &[u8]) -> Result<NoteId, StoreError> {
        let id = NoteId::generate();
        let path = file_ops::note_path(&self.notes_dir, id.as_str());

        match file_ops::write_note_exclusive(&path, content) {
            Ok(()) => {
                log::info!("[NOTES] Saved note {} ({} bytes)", id, content.len());
                Ok(id)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                log::error!("[NOTES] Generated id {} already exists on disk", id);
                Err(StoreError::Collision(id.into_string()))
            }
            Err(e) => {
                log::error!("[NOTES] Failed to write note {}: {}", id, e);
                Err(StoreError::Io(e))
            }
        }
    }

    /// Every persisted note id, sorted lexicographically.
    ///
    /// The sort is only for stable output; it is not creation order.
    pub fn list(&self) -> Result<Vec<NoteId>, StoreError> {
        let mut ids: Vec<NoteId> = file_ops::list_note_stems(&self.notes_dir)?
            .into_iter()
            .filter_map(|stem| match NoteId::parse(&stem) {
                Ok(id) => Some(id),
                Err(_) => {
                    log::debug!("[NOTES] Skipping foreign file {}.md", stem);
                    None
                }
            })
            .collect();
        ids.sort();
        Ok(ids)
    }

    /// Raw content of note `id`
    pub fn load(&self, id: &NoteId) -> Result<Vec<u8>, StoreError> {
        let path = file_ops::note_path(&self.notes_dir, id.as_str());
        match file_ops::read_note(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(id.to_string()))
            }
            Err(e) => {
                log::error!("[NOTES] Failed to read note {}: {}", id, e);
                Err(StoreError::Io(e))
            }
        }
    }

    /// Parse an externally supplied id and load it
    pub fn load_raw_id(&self, raw: &str) -> Result<Vec<u8>, StoreError> {
        let id = NoteId::parse(raw).map_err(StoreError::InvalidId)?;
        self.load(&id)
    }
}
