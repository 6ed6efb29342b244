//! LLM request/response types for Quill.
//!
//! These types model the data shapes exchanged with the model-invocation
//! backend: completion requests built from conversation history, responses,
//! token usage, and the provider error taxonomy.

use serde::{Deserialize, Serialize};

use crate::history::ChatTurn;

/// Request to an LLM provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    /// Conversation so far, oldest first, ending with the new user turn.
    pub turns: Vec<ChatTurn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Response from an LLM provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub content: String,
    pub model: String,
    pub usage: Usage,
}

/// Token usage for a completion request/response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl Usage {
    /// Sum two usage records (for session-level accumulation).
    pub fn accumulate(&mut self, other: Usage) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
    }
}

/// Errors from LLM provider operations.
///
/// Nothing here is retried internally; every failure is surfaced to the
/// caller to decide (retry, prompt again, abort).
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited by provider")]
    RateLimited,

    #[error("provider overloaded: {0}")]
    Overloaded(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::TurnRole;

    #[test]
    fn test_usage_accumulate() {
        let mut total = Usage::default();
        total.accumulate(Usage {
            input_tokens: 100,
            output_tokens: 40,
        });
        total.accumulate(Usage {
            input_tokens: 50,
            output_tokens: 75,
        });
        assert_eq!(total.input_tokens, 150);
        assert_eq!(total.output_tokens, 115);
    }

    #[test]
    fn test_request_omits_unset_options() {
        let request = CompletionRequest {
            model: "meta-llama/llama-3.3-70b-instruct:free".to_string(),
            turns: vec![ChatTurn::user("hi")],
            system: None,
            temperature: None,
            max_tokens: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("system"));
        assert!(!json.contains("temperature"));
        assert!(!json.contains("max_tokens"));
        assert!(json.contains("\"role\":\"User\""));
        assert_eq!(request.turns[0].role, TurnRole::User);
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Provider {
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: boom");
        assert_eq!(
            LlmError::AuthenticationFailed.to_string(),
            "authentication failed"
        );
    }
}
