use notes::storage::StorageError;
use notes::username_string::UsernameParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("request too large")]
    RequestTooLarge,

    #[error("invalid username: {0}")]
    Username(#[from] UsernameParseError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RequestError {
    /// Failures of the service itself, as opposed to bad requests.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            RequestError::Io(_)
                | RequestError::Storage(StorageError::Io(_))
                | RequestError::Storage(StorageError::MalformedFileName(_))
                | RequestError::Storage(StorageError::TooBig)
        )
    }
}
