pub const DEFAULT_CONFIG_FILE: &str = "/etc/notes/notes.toml";
pub const APP_CONFIG_ENV_PREFIX: &str = "NOTES_";
