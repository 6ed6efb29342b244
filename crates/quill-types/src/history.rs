//! Conversation turn and statistics types for Quill.
//!
//! A conversation is an ordered sequence of [`ChatTurn`]s, attributed to
//! either the user or the assistant. The wire format for saved
//! transcripts uses the role strings `"User"` and `"AI"` exactly.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Who produced a turn in a conversation.
///
/// Serializes to the transcript wire strings: `"User"` for the user and
/// `"AI"` for the assistant. Parsing is strict -- no case folding --
/// because saved transcripts are the only place these strings appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnRole {
    User,
    #[serde(rename = "AI")]
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "User"),
            TurnRole::Assistant => write!(f, "AI"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(TurnRole::User),
            "AI" => Ok(TurnRole::Assistant),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// A single message in a conversation.
///
/// Immutable once created; the history only ever appends or evicts whole
/// turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ChatTurn {
    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// Derived statistics over a conversation history.
///
/// Computed on demand; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Total turns currently retained in the window.
    pub total_turns: usize,
    /// Turns attributed to the user.
    pub user_turns: usize,
    /// Turns attributed to the assistant.
    pub assistant_turns: usize,
    /// Configured sliding-window bound.
    pub max_history: usize,
}

impl SessionStats {
    /// How full the sliding window is, as a ratio in `[0.0, 1.0]`.
    pub fn utilization(&self) -> f64 {
        if self.max_history == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.max_history as f64
    }
}
