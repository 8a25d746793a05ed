//! Note identifiers
//!
//! Ids are generated server-side from UUID v4, but ids also arrive in request
//! paths, so every id is validated before it is turned into a file path.

use std::fmt;
use uuid::Uuid;

const MAX_ID_LEN: usize = 128;

/// A validated note identifier.
///
/// Only ASCII alphanumerics, `-` and `_` are allowed, so an id can never
/// contain a path separator, a `..` segment or the `.` that separates the
/// storage file's extension.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(String);

impl NoteId {
    /// Fresh random id (122 bits of entropy)
    pub fn generate() -> Self {
        NoteId(Uuid::new_v4().hyphenated().to_string())
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        if raw.is_empty() {
            return Err("Note id must not be empty".to_string());
        }
        if raw.len() > MAX_ID_LEN {
            return Err(format!("Note id longer than {} characters", MAX_ID_LEN));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(format!("Invalid note id: {:?}", raw));
        }
        Ok(NoteId(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
