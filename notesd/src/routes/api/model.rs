use notes::data::Note;
use serde::Serialize;

pub const FAILURE_STATUS_CODE: u16 = 500;
pub const SUCCESS_STATUS_CODE: u16 = 200;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct JsonNote {
    pub id: String,
    pub name: String,
    pub content: String,
    pub user: JsonUser,
    pub archived: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct JsonUser {
    pub username: String,
}

impl From<Note> for JsonNote {
    fn from(value: Note) -> Self {
        JsonNote {
            id: value.id.hyphenated().to_string(),
            archived: value.is_archived(),
            name: value.name,
            content: value.content,
            user: JsonUser {
                username: value.owner.to_string(),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Success,
    Failed,
}

/// The envelope every mutating call answers with. Failures of any kind
/// share one status code; only the message tells them apart.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NoteResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub status_code: u16,
    pub data: Vec<JsonNote>,
    pub message: String,
}

impl NoteResponse {
    pub fn success(
        notes: impl IntoIterator<Item=Note>,
        message: impl Into<String>,
    ) -> Self {
        NoteResponse {
            response_type: ResponseType::Success,
            status_code: SUCCESS_STATUS_CODE,
            data: notes.into_iter().map(JsonNote::from).collect(),
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        NoteResponse {
            response_type: ResponseType::Failed,
            status_code: FAILURE_STATUS_CODE,
            data: Vec::new(),
            message: message.into(),
        }
    }
}
