pub const MAX_COMMENT_LENGTH: usize = 500;
pub const MAX_TITLE_LENGTH: usize = 200;
pub const MIN_POLL_OPTIONS: usize = 2;

/// Marker inside backend file paths; everything up to and including it is
/// replaced by the static asset base URL.
pub const ASSETS_MARKER: &str = "assets/";

pub fn api_base_url() -> String {
    std::env::var("SOCPORT_API_BASE_URL")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "http://localhost:5000".to_string())
}

pub fn asset_base_url() -> String {
    std::env::var("SOCPORT_ASSET_BASE_URL")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "http://localhost:5000/assets".to_string())
}

pub fn session_file_path() -> String {
    std::env::var("SOCPORT_SESSION_FILE")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| ".socport-session.json".to_string())
}
