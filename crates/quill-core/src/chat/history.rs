//! Bounded conversation history.
//!
//! An ordered sequence of turns with a sliding-window bound: once the
//! window is full, the oldest turns are evicted first. The bound holds
//! after every public operation. Turns are only ever appended in
//! user/assistant pairs or replaced wholesale by a transcript load.

use std::collections::VecDeque;

use serde_json::Value;

use quill_types::error::HistoryError;
use quill_types::history::{ChatTurn, SessionStats, TurnRole};

/// Ordered, length-bounded sequence of chat turns.
pub struct ConversationHistory {
    turns: VecDeque<ChatTurn>,
    max_history: usize,
}

impl ConversationHistory {
    /// Create an empty history with the given window bound.
    ///
    /// `max_history` must be positive.
    pub fn new(max_history: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(max_history),
            max_history,
        }
    }

    /// Number of turns currently retained.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the history holds no turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Configured window bound.
    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Record one complete exchange: a user turn followed by the
    /// assistant's reply, then a single truncation pass.
    ///
    /// Both turns land before the window is enforced, so the buffer can
    /// transiently exceed the bound inside this call; the overshoot is
    /// never observable because no public operation returns in between.
    pub fn record_exchange(&mut self, user_text: impl Into<String>, reply: impl Into<String>) {
        self.turns.push_back(ChatTurn::user(user_text));
        self.turns.push_back(ChatTurn::assistant(reply));
        self.truncate_to_window();
    }

    /// Read-only snapshot of the turns, oldest first.
    pub fn snapshot(&self) -> Vec<ChatTurn> {
        self.turns.iter().cloned().collect()
    }

    /// Drop all turns.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Compute statistics over the current turns.
    pub fn stats(&self) -> SessionStats {
        let user_turns = self
            .turns
            .iter()
            .filter(|t| t.role == TurnRole::User)
            .count();
        SessionStats {
            total_turns: self.turns.len(),
            user_turns,
            assistant_turns: self.turns.len() - user_turns,
            max_history: self.max_history,
        }
    }

    /// Serialize the history as a pretty-printed JSON array of
    /// `{role, content}` objects in chronological order.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    /// Replace the current history with a parsed transcript.
    ///
    /// All-or-nothing: on any [`HistoryError`] the existing turns are
    /// left untouched. A transcript longer than the window is truncated
    /// to its most recent `max_history` turns after the replace, keeping
    /// the bound invariant.
    pub fn from_json(&mut self, text: &str) -> Result<(), HistoryError> {
        let root: Value = serde_json::from_str(text)
            .map_err(|e| HistoryError::InvalidJson(e.to_string()))?;

        let items = root.as_array().ok_or(HistoryError::NotAnArray)?;

        let mut parsed = VecDeque::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let obj = item
                .as_object()
                .ok_or(HistoryError::NotAnObject { index })?;

            let role_value = obj
                .get("role")
                .ok_or(HistoryError::MissingField { index, field: "role" })?;
            let role_str = role_value
                .as_str()
                .ok_or(HistoryError::NotAString { index, field: "role" })?;
            let role: TurnRole = role_str.parse().map_err(|_| HistoryError::InvalidRole {
                index,
                role: role_str.to_string(),
            })?;

            let content_value = obj.get("content").ok_or(HistoryError::MissingField {
                index,
                field: "content",
            })?;
            let content = content_value.as_str().ok_or(HistoryError::NotAString {
                index,
                field: "content",
            })?;

            parsed.push_back(ChatTurn {
                role,
                content: content.to_string(),
            });
        }

        self.turns = parsed;
        self.truncate_to_window();
        Ok(())
    }

    fn truncate_to_window(&mut self) {
        while self.turns.len() > self.max_history {
            self.turns.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(max_history: usize, exchanges: usize) -> ConversationHistory {
        let mut history = ConversationHistory::new(max_history);
        for i in 0..exchanges {
            history.record_exchange(format!("question {i}"), format!("answer {i}"));
        }
        history
    }

    #[test]
    fn test_record_exchange_appends_pair() {
        let mut history = ConversationHistory::new(20);
        history.record_exchange("hello", "hi there");

        let turns = history.snapshot();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0], ChatTurn::user("hello"));
        assert_eq!(turns[1], ChatTurn::assistant("hi there"));
    }

    #[test]
    fn test_window_bound_holds_after_every_exchange() {
        let mut history = ConversationHistory::new(6);
        for i in 0..50 {
            history.record_exchange(format!("q{i}"), format!("a{i}"));
            assert!(history.len() <= 6);
        }
    }

    #[test]
    fn test_eviction_is_oldest_first() {
        let history = filled(4, 5);

        // 5 exchanges = 10 turns; only the last 4 survive.
        let turns = history.snapshot();
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0], ChatTurn::user("question 3"));
        assert_eq!(turns[1], ChatTurn::assistant("answer 3"));
        assert_eq!(turns[2], ChatTurn::user("question 4"));
        assert_eq!(turns[3], ChatTurn::assistant("answer 4"));
    }

    #[test]
    fn test_odd_window_splits_an_exchange() {
        let mut history = ConversationHistory::new(3);
        history.record_exchange("q0", "a0");
        history.record_exchange("q1", "a1");

        // Window of 3 keeps the assistant half of the first exchange.
        let turns = history.snapshot();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0], ChatTurn::assistant("a0"));
        assert_eq!(turns[1], ChatTurn::user("q1"));
        assert_eq!(turns[2], ChatTurn::assistant("a1"));
    }

    #[test]
    fn test_clear() {
        let mut history = filled(20, 3);
        assert_eq!(history.len(), 6);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.stats().total_turns, 0);
    }

    #[test]
    fn test_stats_empty() {
        let history = ConversationHistory::new(20);
        let stats = history.stats();
        assert_eq!(stats.total_turns, 0);
        assert_eq!(stats.user_turns, 0);
        assert_eq!(stats.assistant_turns, 0);
        assert_eq!(stats.max_history, 20);
        assert_eq!(stats.utilization(), 0.0);
    }

    #[test]
    fn test_stats_counts_by_role() {
        let history = filled(20, 3);
        let stats = history.stats();
        assert_eq!(stats.total_turns, 6);
        assert_eq!(stats.user_turns, 3);
        assert_eq!(stats.assistant_turns, 3);
        assert!((stats.utilization() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut original = filled(20, 3);
        let json = original.to_json().unwrap();

        let mut restored = ConversationHistory::new(20);
        restored.from_json(&json).unwrap();
        assert_eq!(restored.snapshot(), original.snapshot());

        // And a second trip through the restored copy.
        assert_eq!(restored.to_json().unwrap(), json);
        original.clear();
        assert!(original.is_empty());
    }

    #[test]
    fn test_to_json_wire_format() {
        let mut history = ConversationHistory::new(20);
        history.record_exchange("hello", "hi");
        let json = history.to_json().unwrap();
        assert!(json.contains("\"role\": \"User\""));
        assert!(json.contains("\"role\": \"AI\""));
        assert!(json.trim_start().starts_with('['));
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        let mut history = filled(20, 1);
        let err = history.from_json("{not json").unwrap_err();
        assert!(matches!(err, HistoryError::InvalidJson(_)));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_trailing_garbage() {
        let mut history = filled(20, 1);
        let err = history.from_json("[]extra").unwrap_err();
        assert!(matches!(err, HistoryError::InvalidJson(_)));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let mut history = filled(20, 1);
        let err = history.from_json(r#"{"role":"User","content":"x"}"#).unwrap_err();
        assert!(matches!(err, HistoryError::NotAnArray));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_missing_role() {
        let mut history = filled(20, 1);
        let before = history.snapshot();
        let err = history.from_json(r#"[{"content":"x"}]"#).unwrap_err();
        assert!(matches!(
            err,
            HistoryError::MissingField { index: 0, field: "role" }
        ));
        assert_eq!(history.snapshot(), before);
    }

    #[test]
    fn test_from_json_rejects_missing_content() {
        let mut history = ConversationHistory::new(20);
        let err = history.from_json(r#"[{"role":"User"}]"#).unwrap_err();
        assert!(matches!(
            err,
            HistoryError::MissingField { index: 0, field: "content" }
        ));
    }

    #[test]
    fn test_from_json_rejects_invalid_role() {
        let mut history = filled(20, 1);
        let before = history.snapshot();
        let err = history
            .from_json(r#"[{"role":"Bot","content":"x"}]"#)
            .unwrap_err();
        match err {
            HistoryError::InvalidRole { index, role } => {
                assert_eq!(index, 0);
                assert_eq!(role, "Bot");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(history.snapshot(), before);
    }

    #[test]
    fn test_from_json_rejects_non_string_content() {
        let mut history = ConversationHistory::new(20);
        let err = history
            .from_json(r#"[{"role":"User","content":42}]"#)
            .unwrap_err();
        assert!(matches!(
            err,
            HistoryError::NotAString { index: 0, field: "content" }
        ));
    }

    #[test]
    fn test_from_json_rejects_non_object_entry() {
        let mut history = ConversationHistory::new(20);
        let err = history.from_json(r#"["just a string"]"#).unwrap_err();
        assert!(matches!(err, HistoryError::NotAnObject { index: 0 }));
    }

    #[test]
    fn test_from_json_replaces_existing_turns() {
        let mut history = filled(20, 2);
        history
            .from_json(r#"[{"role":"User","content":"loaded"}]"#)
            .unwrap();
        let turns = history.snapshot();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0], ChatTurn::user("loaded"));
    }

    #[test]
    fn test_from_json_truncates_oversized_transcript() {
        let mut donor = ConversationHistory::new(100);
        for i in 0..10 {
            donor.record_exchange(format!("q{i}"), format!("a{i}"));
        }
        let json = donor.to_json().unwrap();

        let mut small = ConversationHistory::new(4);
        small.from_json(&json).unwrap();
        assert_eq!(small.len(), 4);
        assert_eq!(small.snapshot()[0], ChatTurn::user("q8"));
    }

    #[test]
    fn test_from_json_empty_array() {
        let mut history = filled(20, 2);
        history.from_json("[]").unwrap();
        assert!(history.is_empty());
    }
}
