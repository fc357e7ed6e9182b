//! Error handling for the inventory console
//!
//! Three families, per the console's error taxonomy: local validation
//! (caught before any network call), insufficient-stock arithmetic failures,
//! and network/server errors with the backend's `detail` or per-field
//! messages folded into one string.

use serde_json::Value;
use thiserror::Error;

use shared::StockError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Stock arithmetic rejected the operation before submission
    #[error(transparent)]
    Stock(#[from] StockError),

    /// Form-level validation failure
    #[error("validation error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    /// The backend rejected the request
    #[error("server error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never completed
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for console operations
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Whether the user can fix this by editing the form and retrying
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Configuration(_) | AppError::Internal(_))
    }
}

/// Fold a backend error body into a single user-facing message
///
/// Django REST Framework responds with either `{"detail": "..."}`,
/// `{"error": "..."}`, or a per-field map like
/// `{"quantity": ["msg1", "msg2"]}`; anything unparseable is passed through
/// truncated.
pub fn extract_api_message(body: &str) -> String {
    const FALLBACK_LIMIT: usize = 200;

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return truncate(body, FALLBACK_LIMIT);
    };

    match &value {
        Value::Object(map) => {
            if let Some(detail) = map.get("detail").and_then(Value::as_str) {
                return detail.to_string();
            }
            if let Some(error) = map.get("error").and_then(Value::as_str) {
                return error.to_string();
            }
            let mut parts = Vec::with_capacity(map.len());
            for (field, messages) in map {
                let joined = match messages {
                    Value::Array(items) => items
                        .iter()
                        .map(value_to_text)
                        .collect::<Vec<_>>()
                        .join(", "),
                    other => value_to_text(other),
                };
                parts.push(format!("{}: {}", field, joined));
            }
            if parts.is_empty() {
                truncate(body, FALLBACK_LIMIT)
            } else {
                parts.join(". ")
            }
        }
        Value::String(s) => s.clone(),
        _ => truncate(body, FALLBACK_LIMIT),
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        text.to_string()
    } else {
        let mut end = limit;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &text[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_detail_field() {
        assert_eq!(
            extract_api_message(r#"{"detail": "Stock insuficiente. Disponible: 3"}"#),
            "Stock insuficiente. Disponible: 3"
        );
    }

    #[test]
    fn extracts_error_field() {
        assert_eq!(
            extract_api_message(r#"{"error": "Para salidas, debe especificar ubicación de origen"}"#),
            "Para salidas, debe especificar ubicación de origen"
        );
    }

    #[test]
    fn joins_per_field_messages() {
        let body = r#"{"quantity": ["must be positive", "exceeds stock"]}"#;
        assert_eq!(
            extract_api_message(body),
            "quantity: must be positive, exceeds stock"
        );
    }

    #[test]
    fn passes_through_unparseable_bodies() {
        assert_eq!(extract_api_message("Bad Gateway"), "Bad Gateway");
    }
}
