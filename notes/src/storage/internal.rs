use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::{debug, error, trace};
use tokio::io;
use tokio::io::AsyncReadExt;
use uuid::Uuid;

use crate::config::app_config::AppConfig;
use crate::data::{Note, NoteState};
use crate::lib_constants::NOTES_DIRECTORY_PATH;
use crate::payload::NotePayload;
use crate::storage::errors::{StorageError, ValidationError};
use crate::username_string::UsernameString;
use crate::util::StrExt;
use filename::{is_hidden, NoteFileName};
use index::{DirectoryScan, NoteIndex};
use io_trait::{NoteStorageIo, OpenFile, ProductionNoteStorageIo};

pub mod filename;
pub mod index;
pub mod io_trait;

const TMP_FILENAME_INFIX: &str = ".tmp.";

pub type NoteStorage = NoteStorageImpl<ProductionNoteStorageIo>;

/// Notes of every user, laid out as
/// `<data directory>/notes/<user>/{active,archived}/<name>_<id>.txt`.
///
/// There is no locking: concurrent writers to the same note race and the
/// last one wins.
#[derive(Debug)]
pub struct NoteStorageImpl<Io: NoteStorageIo, Index: NoteIndex = DirectoryScan> {
    io: Io,
    index: Index,
    basedir: PathBuf,
    max_note_len: u64,
    max_note_name_len: u64,
}

impl NoteStorage {
    pub async fn new(
        app_config: &AppConfig,
    ) -> Result<NoteStorage, StorageError> {
        Self::new_internal(
            Self::get_notes_dir(app_config),
            app_config.max_note_size,
            app_config.max_note_name_size,
            ProductionNoteStorageIo::new(),
            DirectoryScan,
        ).await
    }

    pub fn get_notes_dir(app_config: &AppConfig) -> PathBuf {
        app_config.data_directory.join(NOTES_DIRECTORY_PATH)
    }
}

impl<Io: NoteStorageIo, Index: NoteIndex> NoteStorageImpl<Io, Index> {
    async fn new_internal(
        notes_dir: PathBuf,
        max_note_size: u64,
        max_note_name_size: u64,
        io: Io,
        index: Index,
    ) -> Result<NoteStorageImpl<Io, Index>, StorageError> {
        debug!(
            "opening note storage at \"{}\"",
            notes_dir.display(),
        );
        io.create_dir_all(&notes_dir).await?;
        Ok(NoteStorageImpl {
            io,
            index,
            basedir: notes_dir,
            max_note_len: max_note_size,
            max_note_name_len: max_note_name_size,
        })
    }

    /// Nothing is held open between calls.
    pub async fn close(&self) -> Result<(), StorageError> {
        debug!("closing note storage at \"{}\"", self.basedir.display());
        Ok(())
    }

    pub async fn create(
        &self,
        payload: NotePayload,
    ) -> Result<Note, StorageError> {
        self.validate_note(&payload)?;
        let owner = payload.user.username;
        let id = self.io.generate_uuid();
        let file = NoteFileName::new(payload.name, id);
        let dir = self.get_state_dir(&owner, NoteState::Active);
        debug!(
            "creating note {id} for user \"{owner}\" at \"{}\"",
            dir.join(file.encode()).display(),
        );
        self.io.create_dir_all(&dir).await?;
        self.write_note_file(&dir, &file, &payload.content).await?;
        Ok(
            Note {
                id,
                name: file.name,
                content: payload.content,
                owner,
                state: NoteState::Active,
            }
        )
    }

    /// Archives, unarchives or rewrites a note depending on the payload.
    ///
    /// `archived: true` moves the note out of the active subtree. Otherwise
    /// a note found in the archived subtree is moved back. Otherwise the
    /// active note gets the payload's name and content. The moves keep the
    /// stored name and content and ignore the payload's.
    pub async fn update(
        &self,
        id: Uuid,
        payload: NotePayload,
    ) -> Result<Note, StorageError> {
        validate_owner(payload.owner())?;
        let owner = payload.owner();
        debug!("updating note {id} for user \"{owner}\"");

        if payload.requested_state() == Some(NoteState::Archived) {
            return self.move_note(owner, id, NoteState::Active, NoteState::Archived).await;
        }
        if let Some(file) = self.find_note(owner, NoteState::Archived, id).await? {
            return self.move_file(owner, file, NoteState::Archived, NoteState::Active).await;
        }
        self.rewrite_note(id, payload).await
    }

    /// Only active notes can be deleted.
    pub async fn delete(
        &self,
        id: Uuid,
        owner: &UsernameString,
    ) -> Result<(), StorageError> {
        validate_owner(owner)?;
        debug!("deleting note {id} for user \"{owner}\"");
        let file = self.find_note(owner, NoteState::Active, id).await?
            .ok_or(StorageError::NoteNotFound)?;
        let path = self.get_state_dir(owner, NoteState::Active).join(file.encode());
        trace!("removing \"{}\"", path.display());
        Ok(self.io.remove_file(&path).await?)
    }

    pub async fn list_active_notes(
        &self,
        owner: &UsernameString,
    ) -> Result<Vec<Note>, StorageError> {
        self.list_notes(owner, NoteState::Active).await
    }

    pub async fn list_archived_notes(
        &self,
        owner: &UsernameString,
    ) -> Result<Vec<Note>, StorageError> {
        self.list_notes(owner, NoteState::Archived).await
    }

    /// The single place that answers "is this note in that subtree".
    async fn find_note(
        &self,
        owner: &UsernameString,
        state: NoteState,
        id: Uuid,
    ) -> Result<Option<NoteFileName>, StorageError> {
        self.index
            .find(&self.io, &self.get_state_dir(owner, state), id)
            .await
    }

    async fn move_note(
        &self,
        owner: &UsernameString,
        id: Uuid,
        from: NoteState,
        to: NoteState,
    ) -> Result<Note, StorageError> {
        let file = self.find_note(owner, from, id).await?
            .ok_or(StorageError::NoteNotFound)?;
        self.move_file(owner, file, from, to).await
    }

    async fn move_file(
        &self,
        owner: &UsernameString,
        file: NoteFileName,
        from: NoteState,
        to: NoteState,
    ) -> Result<Note, StorageError> {
        let file_name = file.encode();
        let from_path = self.get_state_dir(owner, from).join(&file_name);
        let to_dir = self.get_state_dir(owner, to);
        let to_path = to_dir.join(&file_name);
        debug!(
            "moving note {} for user \"{owner}\" from \"{}\" to \"{}\"",
            file.id,
            from_path.display(),
            to_path.display(),
        );
        let content = self.read_note_file(&from_path).await?;
        self.io.create_dir_all(&to_dir).await?;
        self.io.rename_file(&from_path, &to_path).await?;
        Ok(
            Note {
                id: file.id,
                name: file.name,
                content,
                owner: owner.clone(),
                state: to,
            }
        )
    }

    async fn rewrite_note(
        &self,
        id: Uuid,
        payload: NotePayload,
    ) -> Result<Note, StorageError> {
        self.validate_note(&payload)?;
        let owner = payload.user.username;
        let dir = self.get_state_dir(&owner, NoteState::Active);
        let current = self.find_note(&owner, NoteState::Active, id).await?
            .ok_or(StorageError::NoteNotFound)?;
        let file = NoteFileName::new(payload.name, id);
        self.write_note_file(&dir, &file, &payload.content).await?;
        if current.name != file.name {
            let old_path = dir.join(current.encode());
            let new_path = dir.join(file.encode());
            debug!(
                "renamed note {id} for user \"{owner}\" from \"{}\" to \"{}\"",
                old_path.display(),
                new_path.display(),
            );
            if let Err(e) = self.io.remove_file(&old_path).await {
                error!(
                    "failed to remove old file \"{}\" of note {id}: {e}",
                    old_path.display(),
                );
                if let Err(e) = self.io.remove_file(&new_path).await {
                    error!(
                        "failed to remove new file \"{}\" of note {id}: {e}",
                        new_path.display(),
                    );
                }
                return Err(e.into());
            }
        }
        Ok(
            Note {
                id,
                name: file.name,
                content: payload.content,
                owner,
                state: NoteState::Active,
            }
        )
    }

    async fn list_notes(
        &self,
        owner: &UsernameString,
        state: NoteState,
    ) -> Result<Vec<Note>, StorageError> {
        validate_owner(owner)?;
        let dir = self.get_state_dir(owner, state);
        debug!(
            "listing {state:?} notes for user \"{owner}\" in \"{}\"",
            dir.display(),
        );
        let mut files: Vec<OsString> = match self.io.list_files(&dir).await {
            Ok(files) => files,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!("no \"{}\", user \"{owner}\" has no notes there", dir.display());
                return Ok(Vec::new());
            },
            Err(e) => return Err(e.into()),
        };
        files.retain(|f| !is_hidden(f));
        files.sort();

        let mut ret = Vec::with_capacity(files.len());
        for file_name in files {
            trace!("read dir entry {file_name:?} for user \"{owner}\"");
            let file = NoteFileName::decode(&file_name)
                .ok_or_else(||
                    StorageError::MalformedFileName(
                        file_name.to_string_lossy().into_owned()
                    )
                )?;
            if !file.name.is_set() {
                return Err(ValidationError::NameNotSet.into());
            }
            let content = self.read_note_file(&dir.join(&file_name)).await?;
            ret.push(
                Note {
                    id: file.id,
                    name: file.name,
                    content,
                    owner: owner.clone(),
                    state,
                }
            );
        }
        Ok(ret)
    }

    async fn read_note_file(&self, path: &Path) -> Result<String, StorageError> {
        let OpenFile { file, size } = self.io
            .open_file(path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => StorageError::NoteNotFound,
                _ => StorageError::Io(e),
            })?;
        if size > self.max_note_len {
            return Err(StorageError::TooBig);
        }
        read_limited_utf8_lossy(self.max_note_len, size, file).await
    }

    /// Writes into a temporary file next to the target and renames it
    /// over the target, so readers never see a partial note.
    async fn write_note_file(
        &self,
        dir: &Path,
        file: &NoteFileName,
        content: &str,
    ) -> Result<(), StorageError> {
        let path = dir.join(file.encode());
        let tmp_path = self.get_tmp_path(dir, file.id);
        trace!(
            "tmp filename for note {}: \"{}\"",
            file.id,
            tmp_path.display(),
        );
        if let Err(e) = self.io.write_file(&tmp_path, content.as_bytes()).await {
            self.remove_tmp_file(&tmp_path, file.id).await;
            return Err(e.into());
        }
        if let Err(e) = self.io.rename_file(&tmp_path, &path).await {
            error!(
                "failed to rename tmp file \"{}\" for note {}: {e}",
                tmp_path.display(),
                file.id,
            );
            self.remove_tmp_file(&tmp_path, file.id).await;
            return Err(e.into());
        }
        Ok(())
    }

    async fn remove_tmp_file(&self, tmp_path: &Path, id: Uuid) {
        match self.io.remove_file(tmp_path).await {
            Ok(()) => {},
            Err(e) if e.kind() == ErrorKind::NotFound => {},
            Err(e) => error!(
                "failed to remove tmp file \"{}\" for note {id}: {e}",
                tmp_path.display(),
            ),
        }
    }

    fn validate_note(&self, payload: &NotePayload) -> Result<(), ValidationError> {
        if !payload.name.is_set() {
            return Err(ValidationError::NameNotSet);
        }
        validate_owner(payload.owner())?;
        if payload.name.has_path_separator() {
            return Err(ValidationError::NameHasPathSeparator);
        }
        if is_hidden(OsStr::new(&payload.name)) {
            return Err(ValidationError::NameHidden);
        }
        if payload.name.len() as u64 > self.max_note_name_len {
            return Err(ValidationError::NameTooLong);
        }
        if payload.content.len() as u64 > self.max_note_len {
            return Err(ValidationError::ContentTooLarge);
        }
        Ok(())
    }

    fn get_user_dir(&self, owner: &UsernameString) -> PathBuf {
        self.basedir.join(&**owner)
    }

    fn get_state_dir(&self, owner: &UsernameString, state: NoteState) -> PathBuf {
        self.get_user_dir(owner).join(state.directory_name())
    }

    fn get_tmp_path(&self, dir: &Path, id: Uuid) -> PathBuf {
        dir.join(
            format!(
                ".{}{}{}",
                id.hyphenated(),
                TMP_FILENAME_INFIX,
                self.io.generate_uuid().hyphenated(),
            )
        )
    }
}

fn validate_owner(owner: &UsernameString) -> Result<(), ValidationError> {
    if owner.is_set() {
        Ok(())
    } else {
        Err(ValidationError::UserNotSet)
    }
}

async fn read_limited_utf8_lossy<R: io::AsyncRead + Unpin + Send>(
    limit: u64,
    size_hint: u64,
    reader: R,
) -> Result<String, StorageError> {
    // one byte over the limit tells a file that grew since it was opened
    let mut buf = Vec::with_capacity(usize::try_from(size_hint.min(limit)).unwrap_or(0));
    io::BufReader::new(reader)
        .take(limit.saturating_add(1))
        .read_to_end(&mut buf)
        .await?;
    if buf.len() as u64 > limit {
        return Err(StorageError::TooBig);
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
