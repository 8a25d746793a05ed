//! File operations for notes system
//!
//! Handles writing note files without ever replacing an existing one,
//! reading them back verbatim, and enumerating the notes directory.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Extension of every note file, without the dot
pub const NOTE_EXTENSION: &str = "md";

/// Path of the file holding the note `stem` (e.g. "<root>/<stem>.md")
pub fn note_path(notes_dir: &Path, stem: &str) -> PathBuf {
    notes_dir.join(format!("{}.{}", stem, NOTE_EXTENSION))
}

/// Write a new note file, failing with `AlreadyExists` if `path` is taken.
///
/// Content goes to a hidden temp file next to `path` first and is published
/// with a hard link, so readers see either nothing or the complete note.
pub fn write_note_exclusive(path: &Path, content: &[u8]) -> io::Result<()> {
    let tmp_path = temp_path_for(path)?;

    let result = write_temp(&tmp_path, content).and_then(|_| fs::hard_link(&tmp_path, path));

    if let Err(e) = fs::remove_file(&tmp_path) {
        if e.kind() != io::ErrorKind::NotFound {
            log::warn!("[NOTES] Failed to remove temp file {:?}: {}", tmp_path, e);
        }
    }
    result?;

    sync_parent_dir(path);
    Ok(())
}

fn write_temp(tmp_path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(tmp_path)?;
    file.write_all(content)?;
    file.sync_all()
}

fn temp_path_for(path: &Path) -> io::Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "note path has no file name"))?;
    Ok(path.with_file_name(format!(".{}.tmp", name.to_string_lossy())))
}

#[cfg(unix)]
fn sync_parent_dir(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::File::open(parent).and_then(|dir| dir.sync_all()) {
            log::debug!("[NOTES] Could not sync directory {:?}: {}", parent, e);
        }
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) {}

/// Read a note file's raw bytes. A missing file is reported as `NotFound`.
pub fn read_note(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}

/// List the stems of all note files directly inside `notes_dir`.
///
/// Only regular files ending in exactly `.md` count; hidden entries (like
/// in-flight temp files) are skipped. The stem is everything before that
/// suffix, even if it contains other dots.
pub fn list_note_stems(notes_dir: &Path) -> io::Result<Vec<String>> {
    let mut stems = Vec::new();

    if !notes_dir.exists() {
        return Ok(stems);
    }

    let suffix = format!(".{}", NOTE_EXTENSION);
    for entry in fs::read_dir(notes_dir)? {
        let entry = entry?;
        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(_) => continue,
        };
        if name.starts_with('.') {
            continue;
        }
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(stem) = name.strip_suffix(&suffix) {
            if !stem.is_empty() {
                stems.push(stem.to_string());
            }
        }
    }

    Ok(stems)
}
