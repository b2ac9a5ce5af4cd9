use std::io::ErrorKind;
use std::path::Path;
use async_trait::async_trait;
use log::trace;
use uuid::Uuid;
use crate::storage::errors::StorageError;
use crate::storage::internal::filename::{is_hidden, NoteFileName};
use crate::storage::internal::io_trait::NoteStorageIo;

/// Finds the file of a note by id within one subtree.
#[async_trait]
pub trait NoteIndex: Send + Sync {
    async fn find<Io: NoteStorageIo>(
        &self,
        io: &Io,
        dir: &Path,
        id: Uuid,
    ) -> Result<Option<NoteFileName>, StorageError>;
}

/// Linear scan over the directory, matching the id part of every file
/// name. A missing directory holds no notes.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectoryScan;

#[async_trait]
impl NoteIndex for DirectoryScan {
    async fn find<Io: NoteStorageIo>(
        &self,
        io: &Io,
        dir: &Path,
        id: Uuid,
    ) -> Result<Option<NoteFileName>, StorageError> {
        let files = match io.list_files(dir).await {
            Ok(files) => files,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        trace!("scanning {} entries of \"{}\" for {id}", files.len(), dir.display());
        Ok(
            files.iter()
                .filter(|f| !is_hidden(f))
                .filter_map(|f| NoteFileName::decode(f))
                .find(|f| f.id == id)
        )
    }
}
