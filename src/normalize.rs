//! Normalization of the backend's loosely-shaped payload fields.
//!
//! Tag and achievement fields arrive as a native array, a JSON-encoded
//! string, or a comma-separated string depending on which code path wrote
//! them. Media paths arrive as Windows-style disk paths. Everything here is
//! total: any JSON value maps to a result, nothing panics.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::ASSETS_MARKER;

/// Convert any JSON value into an ordered list of trimmed, non-empty strings.
///
/// Arrays pass through element-wise; strings starting with `[` are parsed as
/// an encoded list with a comma-split fallback; strings containing a comma
/// are split; any other non-empty string becomes a single element. Null and
/// anything unrecognized map to an empty list.
pub fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => collect_items(items),
        Value::String(s) => string_list_from_str(s),
        _ => Vec::new(),
    }
}

fn collect_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect()
}

fn string_list_from_str(s: &str) -> Vec<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if trimmed.starts_with('[') {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
            return collect_items(&items);
        }
        // malformed encoded list, fall through to comma handling
    }
    if trimmed.contains(',') {
        trimmed
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect()
    } else {
        vec![trimmed.to_string()]
    }
}

/// serde adapter for fields that should always land as `Vec<String>`.
pub fn de_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| string_list(&v)).unwrap_or_default())
}

/// serde adapter for flags the backend sends as 0/1, booleans, or strings.
pub fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0) != 0,
        Some(Value::String(s)) => s == "1" || s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Convert a backend file path into a browser-usable URL under `base`.
///
/// Back-slashes become forward slashes and anything up to and including the
/// `assets/` marker is dropped. Values that are already absolute URLs pass
/// through untouched.
pub fn asset_url(raw: &str, base: &str) -> String {
    let slashed = raw.replace('\\', "/");
    if slashed.starts_with("http://") || slashed.starts_with("https://") {
        return slashed;
    }
    let relative = match slashed.find(ASSETS_MARKER) {
        Some(idx) => &slashed[idx + ASSETS_MARKER.len()..],
        None => slashed.trim_start_matches('/'),
    };
    format!("{}/{}", base.trim_end_matches('/'), relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_missing_and_empty_map_to_empty() {
        assert!(string_list(&Value::Null).is_empty());
        assert!(string_list(&json!("")).is_empty());
        assert!(string_list(&json!("   ")).is_empty());
        assert!(string_list(&json!([])).is_empty());
        assert!(string_list(&json!(42)).is_empty());
        assert!(string_list(&json!({"a": 1})).is_empty());
    }

    #[test]
    fn comma_string_splits_and_trims() {
        assert_eq!(string_list(&json!("a, b, c")), vec!["a", "b", "c"]);
        assert_eq!(string_list(&json!("a,,c")), vec!["a", "c"]);
    }

    #[test]
    fn native_array_passes_through() {
        assert_eq!(string_list(&json!(["a", "b"])), vec!["a", "b"]);
        assert_eq!(string_list(&json!([" a ", ""])), vec!["a"]);
    }

    #[test]
    fn encoded_list_parses() {
        assert_eq!(string_list(&json!("[\"x\",\"y\"]")), vec!["x", "y"]);
    }

    #[test]
    fn malformed_encoded_list_falls_back_to_comma_split() {
        assert_eq!(string_list(&json!("[x, y")), vec!["[x", "y"]);
    }

    #[test]
    fn single_word_wraps() {
        assert_eq!(string_list(&json!("chess")), vec!["chess"]);
    }

    #[derive(serde::Deserialize)]
    struct Flagged {
        #[serde(default, deserialize_with = "de_flag")]
        on: bool,
    }

    #[test]
    fn flags_accept_numbers_bools_and_strings() {
        for v in [json!({"on": 1}), json!({"on": true}), json!({"on": "1"})] {
            assert!(serde_json::from_value::<Flagged>(v).unwrap().on);
        }
        for v in [json!({"on": 0}), json!({"on": null}), json!({})] {
            assert!(!serde_json::from_value::<Flagged>(v).unwrap().on);
        }
    }

    #[test]
    fn asset_url_strips_windows_prefix() {
        let url = asset_url(
            "C:\\srv\\portal\\assets\\uploads\\logo.png",
            "http://localhost:5000/assets",
        );
        assert_eq!(url, "http://localhost:5000/assets/uploads/logo.png");
    }

    #[test]
    fn asset_url_handles_relative_paths() {
        let url = asset_url("uploads/logo.png", "http://localhost:5000/assets/");
        assert_eq!(url, "http://localhost:5000/assets/uploads/logo.png");
    }

    #[test]
    fn asset_url_never_double_prefixes() {
        let already = "https://cdn.example.edu/assets/uploads/a.png";
        assert_eq!(asset_url(already, "http://localhost:5000/assets"), already);
    }
}
