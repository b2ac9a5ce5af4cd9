use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::lib_constants::{
    DEFAULT_DATA_DIR,
    DEFAULT_MAX_NOTE_LEN,
    DEFAULT_MAX_NOTE_NAME_LEN,
    MAX_FILE_NAME_LEN,
    NOTE_FILE_NAME_OVERHEAD,
};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_directory: PathBuf,
    pub max_note_size: u64,
    pub max_note_name_size: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Figment(#[from] Box<rocket::figment::Error>),

    #[error("data_directory must be set")]
    DataDirectoryNotSet,

    #[error("max_note_size must be positive")]
    NoteSizeZero,

    #[error("max_note_name_size must be between 1 and {max}")]
    NoteNameSizeOutOfRange { max: u64 },
}

impl From<rocket::figment::Error> for ConfigError {
    fn from(value: rocket::figment::Error) -> Self {
        ConfigError::Figment(Box::new(value))
    }
}

impl AppConfig {
    /// Longest note name whose file name still fits the filesystem limit.
    pub const MAX_NOTE_NAME_SIZE: u64 = MAX_FILE_NAME_LEN - NOTE_FILE_NAME_OVERHEAD;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_directory.as_os_str().is_empty() {
            return Err(ConfigError::DataDirectoryNotSet);
        }
        if self.max_note_size == 0 {
            return Err(ConfigError::NoteSizeZero);
        }
        if !(1..=Self::MAX_NOTE_NAME_SIZE).contains(&self.max_note_name_size) {
            return Err(
                ConfigError::NoteNameSizeOutOfRange {
                    max: Self::MAX_NOTE_NAME_SIZE,
                }
            );
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_directory: PathBuf::from(DEFAULT_DATA_DIR),
            max_note_size: DEFAULT_MAX_NOTE_LEN,
            max_note_name_size: DEFAULT_MAX_NOTE_NAME_LEN,
        }
    }
}
