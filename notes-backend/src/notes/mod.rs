//! Notes system — flat-directory markdown storage
//!
//! Each note is one `<id>.md` file under the notes root, holding the markdown
//! exactly as it was submitted. There is no index: the set of notes is
//! whatever the directory contains when it is listed.

pub mod file_ops;
pub mod id;
pub mod store;

pub use id::NoteId;
pub use store::{NoteStore, StoreError};
