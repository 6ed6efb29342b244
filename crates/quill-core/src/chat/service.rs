//! Chat service: mediates between the conversation history and the
//! model-invocation backend.
//!
//! The service is single-session and synchronous in contract: one
//! outstanding completion at a time, history mutated only after the
//! provider call succeeds.

use tracing::{debug, info};

use quill_types::config::AssistantConfig;
use quill_types::error::HistoryError;
use quill_types::history::{ChatTurn, SessionStats};
use quill_types::llm::{CompletionRequest, LlmError, Usage};

use crate::llm::LlmProvider;

use super::history::ConversationHistory;

/// Standing system prompt sent with every conversational completion.
const SYSTEM_PROMPT: &str = "You are a helpful personal assistant.";

/// One assistant session: a bounded history plus a provider handle.
pub struct ChatService<P> {
    provider: P,
    config: AssistantConfig,
    history: ConversationHistory,
    session_usage: Usage,
}

impl<P: LlmProvider> ChatService<P> {
    /// Create a session with an empty history.
    pub fn new(provider: P, config: AssistantConfig) -> Self {
        let history = ConversationHistory::new(config.max_history);
        Self {
            provider,
            config,
            history,
            session_usage: Usage::default(),
        }
    }

    /// Send a user message in the context of the conversation so far.
    ///
    /// On success both turns of the exchange are recorded and the window
    /// is enforced; on provider failure the history is left exactly as it
    /// was before the call.
    pub async fn send(&mut self, user_text: &str) -> Result<String, LlmError> {
        let mut turns = self.history.snapshot();
        turns.push(ChatTurn::user(user_text));

        let request = CompletionRequest {
            model: self.config.model.clone(),
            turns,
            system: Some(SYSTEM_PROMPT.to_string()),
            temperature: Some(self.config.temperature),
            max_tokens: self.config.max_tokens,
        };

        debug!(
            provider = self.provider.name(),
            model = %request.model,
            context_turns = request.turns.len(),
            "sending chat completion"
        );
        let response = self.provider.complete(&request).await?;
        info!(
            model = %response.model,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "completion received"
        );

        self.session_usage.accumulate(response.usage);
        self.history.record_exchange(user_text, &response.content);
        Ok(response.content)
    }

    /// Send a standalone prompt (e.g., a rendered template) without
    /// reading or mutating the conversation history.
    pub async fn send_prompt(&mut self, prompt: &str) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            turns: vec![ChatTurn::user(prompt)],
            system: None,
            temperature: Some(self.config.temperature),
            max_tokens: self.config.max_tokens,
        };

        debug!(
            provider = self.provider.name(),
            model = %request.model,
            "sending one-shot completion"
        );
        let response = self.provider.complete(&request).await?;
        self.session_usage.accumulate(response.usage);
        Ok(response.content)
    }

    /// Owned snapshot of the conversation, oldest first.
    pub fn history(&self) -> Vec<ChatTurn> {
        self.history.snapshot()
    }

    /// Reset the conversation to empty.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Statistics over the current conversation.
    pub fn stats(&self) -> SessionStats {
        self.history.stats()
    }

    /// Tokens consumed by this session so far, across chat and one-shot
    /// completions.
    pub fn usage(&self) -> Usage {
        self.session_usage
    }

    /// Serialize the conversation as a JSON transcript.
    pub fn serialize(&self) -> Result<String, serde_json::Error> {
        self.history.to_json()
    }

    /// Replace the conversation with a parsed transcript.
    ///
    /// All-or-nothing: on failure the prior history is unchanged.
    pub fn deserialize(&mut self, text: &str) -> Result<(), HistoryError> {
        self.history.from_json(text)
    }

    /// Model identifier currently in use.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Switch to a different model; the conversation carries over.
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.config.model = model.into();
        info!(model = %self.config.model, "switched model");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use quill_types::llm::CompletionResponse;

    /// Scripted provider: pops canned outcomes and records requests.
    struct MockProvider {
        replies: Mutex<Vec<Result<String, LlmError>>>,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl MockProvider {
        fn new(replies: Vec<Result<String, LlmError>>) -> Self {
            let mut replies = replies;
            replies.reverse();
            Self {
                replies: Mutex::new(replies),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn replying(reply: &str) -> Self {
            Self::new(vec![Ok(reply.to_string())])
        }
    }

    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.seen.lock().unwrap().push(request.clone());
            let outcome = self
                .replies
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(Err(LlmError::Provider {
                    message: "script exhausted".to_string(),
                }));
            outcome.map(|content| CompletionResponse {
                id: "cmpl-test".to_string(),
                content,
                model: request.model.clone(),
                usage: Usage {
                    input_tokens: 10,
                    output_tokens: 5,
                },
            })
        }
    }

    fn service_with(provider: MockProvider) -> ChatService<MockProvider> {
        ChatService::new(provider, AssistantConfig::default())
    }

    #[tokio::test]
    async fn test_send_records_both_turns() {
        let mut service = service_with(MockProvider::replying("hi!"));
        let reply = service.send("hello").await.unwrap();
        assert_eq!(reply, "hi!");

        let turns = service.history();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0], ChatTurn::user("hello"));
        assert_eq!(turns[1], ChatTurn::assistant("hi!"));
    }

    #[tokio::test]
    async fn test_send_includes_prior_history_and_system_prompt() {
        let provider = MockProvider::new(vec![
            Ok("first".to_string()),
            Ok("second".to_string()),
        ]);
        let mut service = service_with(provider);
        service.send("one").await.unwrap();
        service.send("two").await.unwrap();

        let seen = service.provider.seen.lock().unwrap();
        // Second request carries the first exchange plus the new turn.
        assert_eq!(seen[1].turns.len(), 3);
        assert_eq!(seen[1].turns[2], ChatTurn::user("two"));
        assert_eq!(seen[1].system.as_deref(), Some(SYSTEM_PROMPT));
    }

    #[tokio::test]
    async fn test_send_failure_leaves_history_untouched() {
        let provider = MockProvider::new(vec![
            Ok("ok".to_string()),
            Err(LlmError::RateLimited),
        ]);
        let mut service = service_with(provider);
        service.send("keep me").await.unwrap();
        let before = service.history();

        let err = service.send("lost").await.unwrap_err();
        assert!(matches!(err, LlmError::RateLimited));
        assert_eq!(service.history(), before);
    }

    #[tokio::test]
    async fn test_window_bound_holds_across_sends() {
        let replies: Vec<Result<String, LlmError>> =
            (0..20).map(|i| Ok(format!("reply {i}"))).collect();
        let config = AssistantConfig {
            max_history: 6,
            ..AssistantConfig::default()
        };
        let mut service = ChatService::new(MockProvider::new(replies), config);

        for i in 0..20 {
            service.send(&format!("msg {i}")).await.unwrap();
            assert!(service.history().len() <= 6);
        }

        // Strictly oldest-first eviction: only the newest 3 exchanges remain.
        let turns = service.history();
        assert_eq!(turns[0], ChatTurn::user("msg 17"));
        assert_eq!(turns[5], ChatTurn::assistant("reply 19"));
    }

    #[tokio::test]
    async fn test_send_prompt_bypasses_history() {
        let mut service = service_with(MockProvider::replying("rendered answer"));
        let reply = service.send_prompt("explain this code").await.unwrap();
        assert_eq!(reply, "rendered answer");
        assert!(service.history().is_empty());

        let seen = service.provider.seen.lock().unwrap();
        assert_eq!(seen[0].turns.len(), 1);
        assert!(seen[0].system.is_none());
    }

    #[tokio::test]
    async fn test_usage_accumulates() {
        let provider = MockProvider::new(vec![Ok("a".to_string()), Ok("b".to_string())]);
        let mut service = service_with(provider);
        service.send("one").await.unwrap();
        service.send_prompt("two").await.unwrap();

        let usage = service.usage();
        assert_eq!(usage.input_tokens, 20);
        assert_eq!(usage.output_tokens, 10);
    }

    #[tokio::test]
    async fn test_set_model_keeps_history() {
        let provider = MockProvider::new(vec![Ok("a".to_string()), Ok("b".to_string())]);
        let mut service = service_with(provider);
        service.send("one").await.unwrap();

        service.set_model("deepseek/deepseek-r1:free");
        assert_eq!(service.model(), "deepseek/deepseek-r1:free");
        assert_eq!(service.history().len(), 2);

        service.send("two").await.unwrap();
        let seen = service.provider.seen.lock().unwrap();
        assert_eq!(seen[1].model, "deepseek/deepseek-r1:free");
    }

    #[tokio::test]
    async fn test_serialize_deserialize_via_service() {
        let mut service = service_with(MockProvider::replying("hi"));
        service.send("hello").await.unwrap();
        let json = service.serialize().unwrap();

        let mut fresh = service_with(MockProvider::replying("unused"));
        fresh.deserialize(&json).unwrap();
        assert_eq!(fresh.history(), service.history());
    }

    #[tokio::test]
    async fn test_deserialize_failure_preserves_history() {
        let mut service = service_with(MockProvider::replying("hi"));
        service.send("hello").await.unwrap();
        let before = service.history();

        assert!(service.deserialize("{not json").is_err());
        assert_eq!(service.history(), before);
    }

    #[tokio::test]
    async fn test_clear_and_stats() {
        let mut service = service_with(MockProvider::replying("hi"));
        service.send("hello").await.unwrap();

        let stats = service.stats();
        assert_eq!(stats.total_turns, 2);
        assert_eq!(stats.user_turns, 1);
        assert_eq!(stats.assistant_turns, 1);

        service.clear();
        assert_eq!(service.stats().total_turns, 0);
    }
}
