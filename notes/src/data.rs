use uuid::Uuid;
use crate::lib_constants::{ACTIVE_DIRECTORY_PATH, ARCHIVED_DIRECTORY_PATH};
use crate::username_string::UsernameString;

/// Archival state of a note. On disk it is the subtree the note file
/// lives in, never a stored field.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NoteState {
    Active,
    Archived,
}

impl NoteState {
    pub fn is_archived(self) -> bool {
        self == NoteState::Archived
    }

    pub fn directory_name(self) -> &'static str {
        match self {
            NoteState::Active => ACTIVE_DIRECTORY_PATH,
            NoteState::Archived => ARCHIVED_DIRECTORY_PATH,
        }
    }
}

impl From<bool> for NoteState {
    fn from(archived: bool) -> Self {
        if archived {
            NoteState::Archived
        } else {
            NoteState::Active
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Note {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub owner: UsernameString,
    pub state: NoteState,
}

impl Note {
    pub fn is_archived(&self) -> bool {
        self.state.is_archived()
    }
}
