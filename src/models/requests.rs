//! Request DTOs for the playground API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;

/// Maximum accepted paste key length
pub const MAX_KEY_LENGTH: usize = 64;

/// Request body for POST /run
#[derive(Debug, Clone, Deserialize)]
pub struct RunRequest {
    /// Source code to execute
    pub code: String,
    /// Language name as sent by the viewer (`go`, `python`, `ruby`)
    pub language: String,
}

/// Query string for GET /pastes and GET /paste/:key
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageQuery {
    /// Upstream syntax name, `all` or absent for no filter
    #[serde(default)]
    pub language: Option<String>,
}

/// Validates a paste key taken from the URL.
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_paste_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Paste key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Paste key exceeds maximum length of {} characters",
            MAX_KEY_LENGTH
        ));
    }
    if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some("Paste key must be alphanumeric".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_request_deserialize() {
        let json = r#"{"code": "print(1)", "language": "python"}"#;
        let req: RunRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.code, "print(1)");
        assert_eq!(req.language, "python");
    }

    #[test]
    fn test_run_request_missing_field() {
        let json = r#"{"code": "print(1)"}"#;
        assert!(serde_json::from_str::<RunRequest>(json).is_err());
    }

    #[test]
    fn test_validate_paste_key() {
        assert!(validate_paste_key("abc123XY").is_none());
        assert!(validate_paste_key("").is_some());
        assert!(validate_paste_key("../etc").is_some());
        assert!(validate_paste_key("abc&i=x").is_some());
        assert!(validate_paste_key(&"a".repeat(MAX_KEY_LENGTH + 1)).is_some());
    }
}
