use thiserror::Error;
use tokio::io::Error as IoError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("file does not exist")]
    NoteNotFound,

    #[error(transparent)]
    Io(#[from] IoError),

    #[error("invalid note payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("malformed note file name \"{0}\"")]
    MalformedFileName(String),

    #[error("file too large")]
    TooBig,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
    #[error("name must be set")]
    NameNotSet,

    #[error("user must be set")]
    UserNotSet,

    #[error("name must not contain path separators")]
    NameHasPathSeparator,

    #[error("name must not start with a dot")]
    NameHidden,

    #[error("name is too long")]
    NameTooLong,

    #[error("content is too large")]
    ContentTooLarge,
}
