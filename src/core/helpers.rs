pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Pull a human-readable message out of a backend error body.
///
/// The backend is inconsistent about the field name, so both `message` and
/// `error` are tried before falling back to a generic status line.
pub fn error_message(body: &[u8], status: u16) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| format!("request failed with status {}", status))
}
