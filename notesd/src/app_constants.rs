pub const API_PREFIX: &str = "/";
pub const WEB_PREFIX: &str = "/";

// a note body may grow this much when escaped into json
pub const JSON_ESCAPE_FACTOR: u64 = 6;
// room for the name, user and field names around the body
pub const REQUEST_OVERHEAD: u64 = 4 * 1024;
