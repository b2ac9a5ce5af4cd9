pub const DEFAULT_DATA_DIR: &str = "/var/notes";

pub const DEFAULT_MAX_NOTE_LEN: u64 = 128 * 1024;
// leaves room for "_<uuid>.txt" within a 255-byte file name
pub const DEFAULT_MAX_NOTE_NAME_LEN: u64 = 200;

// relative to the data directory
pub const NOTES_DIRECTORY_PATH: &str = "notes";

// relative to a user's directory
pub const ACTIVE_DIRECTORY_PATH: &str = "active";
pub const ARCHIVED_DIRECTORY_PATH: &str = "archived";

pub const NOTE_FILE_EXTENSION: &str = ".txt";
pub const NAME_ID_SEPARATOR: char = '_';

// common file name limit of the filesystems notes are stored on
pub const MAX_FILE_NAME_LEN: u64 = 255;
// "_" + hyphenated uuid + ".txt"
pub const NOTE_FILE_NAME_OVERHEAD: u64 = 1 + 36 + NOTE_FILE_EXTENSION.len() as u64;
