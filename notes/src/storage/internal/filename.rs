use std::ffi::OsStr;
use uuid::Uuid;
use crate::lib_constants::{NAME_ID_SEPARATOR, NOTE_FILE_EXTENSION};

const HYPHENED_UUID_SIZE: usize = 36;

/// `<name>_<id>.txt`, the physical name of a note file.
///
/// The id is the part after the rightmost separator, so names may
/// themselves contain underscores.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NoteFileName {
    pub name: String,
    pub id: Uuid,
}

impl NoteFileName {
    pub fn new(name: impl Into<String>, id: Uuid) -> Self {
        NoteFileName {
            name: name.into(),
            id,
        }
    }

    pub fn encode(&self) -> String {
        format!(
            "{}{}{}{}",
            self.name,
            NAME_ID_SEPARATOR,
            self.id.hyphenated(),
            NOTE_FILE_EXTENSION,
        )
    }

    /// Only the exact output of [`NoteFileName::encode`] is accepted, so
    /// that a decoded name always re-encodes to the file it came from.
    pub fn decode(file_name: &OsStr) -> Option<Self> {
        let (name, id) = file_name.to_str()?
            .strip_suffix(NOTE_FILE_EXTENSION)?
            .rsplit_once(NAME_ID_SEPARATOR)?;
        Some(id)
            .filter(|id| id.len() == HYPHENED_UUID_SIZE)
            .filter(|id| !id.chars().any(|c| c.is_uppercase()))
            .and_then(|id| Uuid::try_parse(id).ok())
            .map(|id| NoteFileName::new(name, id))
    }
}

/// Temporary files are dot-files and never notes.
pub fn is_hidden(file_name: &OsStr) -> bool {
    file_name.as_encoded_bytes().first() == Some(&b'.')
}
