//! Structured completion boundary.
//!
//! A completion provider takes a prompt plus a JSON schema and answers with
//! JSON matching that schema. Vendors live behind
//! [`StructuredCompletionTrait`]; this crate ships no network client of its own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Mutex;

use crate::error::RequestError;

// ============================================================================
// Request
// ============================================================================

/// A single schema-constrained completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    /// Model identifier understood by the provider.
    pub model: String,
    pub prompt: String,
    /// JSON schema the response must follow.
    pub schema: Value,
}

// ============================================================================
// Completion Trait
// ============================================================================

/// Trait for providers that return schema-constrained JSON.
///
/// Providers only supply the raw response text; decoding is shared.
#[async_trait]
pub trait StructuredCompletionTrait: Send + Sync {
    /// Run `request` and return the provider's response text.
    async fn complete_text(&self, request: CompletionRequest) -> Result<String, RequestError>;

    /// Run `request` and return the decoded JSON body.
    ///
    /// Fails with a [`RequestError`] on transport or parse failure.
    async fn complete_json(&self, request: CompletionRequest) -> Result<Value, RequestError> {
        let text = self.complete_text(request).await?;
        parse_completion_text(&text)
    }
}

/// Decodes raw provider text into JSON.
///
/// Providers sometimes wrap JSON in a markdown code fence even when asked for
/// a JSON mime type, so a surrounding ```` ``` ```` / ```` ```json ```` fence
/// is stripped first.
pub fn parse_completion_text(raw: &str) -> Result<Value, RequestError> {
    let mut text = raw.trim();

    if let Some(inner) = text.strip_prefix("```") {
        let inner = inner.strip_suffix("```").unwrap_or(inner);
        // Drop an optional language tag on the opening fence line.
        text = match inner.split_once('\n') {
            Some((tag, body)) if !tag.trim_start().starts_with(['{', '[']) => body,
            _ => inner,
        }
        .trim();
    }

    if text.is_empty() {
        return Err(RequestError::EmptyResponse);
    }

    serde_json::from_str(text).map_err(RequestError::from)
}

// ============================================================================
// Fake Provider for Testing
// ============================================================================

/// A fake completion provider that returns a canned response.
pub struct FakeCompletion {
    response: Result<String, RequestError>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeCompletion {
    /// Create a fake provider that always answers with `text` verbatim.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a fake provider that always answers with `value` as JSON text.
    pub fn with_value(value: Value) -> Self {
        Self::with_text(value.to_string())
    }

    /// Create a fake provider that always fails with `error`.
    pub fn with_error(error: RequestError) -> Self {
        Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl StructuredCompletionTrait for FakeCompletion {
    async fn complete_text(&self, request: CompletionRequest) -> Result<String, RequestError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        self.response.clone()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_json() {
        let value = parse_completion_text(r#"[{"name": "Manali"}]"#).unwrap();
        assert_eq!(value, json!([{"name": "Manali"}]));
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = "```json\n{\"destination\": \"Goa\", \"days\": []}\n```";
        let value = parse_completion_text(raw).unwrap();
        assert_eq!(value["destination"], "Goa");
    }

    #[test]
    fn test_parse_bare_fence() {
        let value = parse_completion_text("```\n[]\n```").unwrap();
        assert_eq!(value, json!([]));
    }

    #[test]
    fn test_parse_empty_text() {
        assert_eq!(parse_completion_text("   "), Err(RequestError::EmptyResponse));
        assert_eq!(parse_completion_text("```json\n```"), Err(RequestError::EmptyResponse));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_completion_text("Here are some ideas!").unwrap_err();
        assert_eq!(err.code(), "PARSE_ERROR");
    }

    #[tokio::test]
    async fn test_fake_completion_records_requests() {
        let fake = FakeCompletion::with_value(json!({"ok": true}));
        let request = CompletionRequest {
            model: "test-model".to_string(),
            prompt: "hello".to_string(),
            schema: json!({"type": "object"}),
        };

        let value = fake.complete_json(request.clone()).await.unwrap();

        assert_eq!(value, json!({"ok": true}));
        assert_eq!(fake.requests(), vec![request]);
    }

    #[tokio::test]
    async fn test_complete_json_decodes_fenced_text() {
        let fake = FakeCompletion::with_text("```json\n{\"destination\": \"Goa\"}\n```");
        let request = CompletionRequest {
            model: "test-model".to_string(),
            prompt: "plan".to_string(),
            schema: json!({"type": "object"}),
        };
        let value = fake.complete_json(request).await.unwrap();
        assert_eq!(value, json!({"destination": "Goa"}));
    }

    #[tokio::test]
    async fn test_complete_json_rejects_blank_text() {
        let fake = FakeCompletion::with_text("  \n ");
        let request = CompletionRequest {
            model: "test-model".to_string(),
            prompt: "plan".to_string(),
            schema: Value::Null,
        };
        let err = fake.complete_json(request).await.unwrap_err();
        assert_eq!(err, RequestError::EmptyResponse);
    }

    #[tokio::test]
    async fn test_fake_completion_error() {
        let fake = FakeCompletion::with_error(RequestError::transport("offline"));
        let request = CompletionRequest {
            model: "test-model".to_string(),
            prompt: "hello".to_string(),
            schema: Value::Null,
        };
        let err = fake.complete_json(request).await.unwrap_err();
        assert_eq!(err, RequestError::Transport("offline".to_string()));
    }
}
