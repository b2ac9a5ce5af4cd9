//! Request payloads as handed over by the transport layer.
//!
//! Every field is optional on the wire; absent strings decode to empty ones
//! and are rejected later by the storage validation, so that a missing name
//! and an empty name produce the same error.

use serde::Deserialize;
use crate::data::NoteState;
use crate::storage::StorageError;
use crate::username_string::UsernameString;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct NotePayload {
    pub name: String,
    pub content: String,
    pub user: UserPayload,
    pub archived: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct UserPayload {
    pub username: UsernameString,
}

impl NotePayload {
    pub fn decode(bytes: &[u8]) -> Result<Self, StorageError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The state transition asked for, if any. `archived: false` does not
    /// force anything by itself: it only unarchives a note that is
    /// actually archived.
    pub fn requested_state(&self) -> Option<NoteState> {
        self.archived.map(NoteState::from)
    }

    pub fn owner(&self) -> &UsernameString {
        &self.user.username
    }
}

impl UserPayload {
    pub fn decode(bytes: &[u8]) -> Result<Self, StorageError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
