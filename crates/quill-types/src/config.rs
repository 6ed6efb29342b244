//! Assistant configuration and the selectable model catalog.
//!
//! No hidden globals: the CLI layer builds an [`AssistantConfig`] and
//! passes it down at construction time. The model catalog and defaults
//! are compiled-in constants, not runtime-editable.

use serde::{Deserialize, Serialize};

/// Default OpenRouter model identifier.
pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.3-70b-instruct:free";

/// Default sliding-window bound on conversation turns.
pub const DEFAULT_MAX_HISTORY: usize = 20;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.8;

/// A selectable model in the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    /// Provider-side model identifier.
    pub id: &'static str,
    /// Human-readable label for menus.
    pub label: &'static str,
}

/// The fixed list of remote models the assistant can switch between.
pub const MODEL_CATALOG: &[ModelInfo] = &[
    ModelInfo {
        id: "meta-llama/llama-3.3-70b-instruct:free",
        label: "Llama 3.3 70B (fast)",
    },
    ModelInfo {
        id: "deepseek/deepseek-r1:free",
        label: "DeepSeek R1 (thorough, slower)",
    },
    ModelInfo {
        id: "google/gemini-2.5-flash-image-preview:free",
        label: "Gemini 2.5 Flash",
    },
];

/// Configuration for one assistant session.
///
/// `max_history` must be a positive integer; the window invariant is
/// meaningless at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Sliding-window bound on retained conversation turns.
    pub max_history: usize,
    /// Sampling temperature passed through to the provider.
    pub temperature: f64,
    /// Optional cap on completion tokens; `None` leaves it to the provider.
    pub max_tokens: Option<u32>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_history: DEFAULT_MAX_HISTORY,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
        }
    }
}

impl AssistantConfig {
    /// Default configuration with a specific model.
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }
}
