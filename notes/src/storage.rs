mod errors;
mod internal;

pub use errors::{StorageError, ValidationError};
pub use internal::{NoteStorage, NoteStorageImpl};
pub use internal::filename::NoteFileName;
pub use internal::index::{DirectoryScan, NoteIndex};
pub use internal::io_trait::{NoteStorageIo, OpenFile, ProductionNoteStorageIo};
