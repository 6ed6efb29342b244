//! Conversation history and the chat service built on top of it.

pub mod history;
pub mod service;

pub use history::ConversationHistory;
pub use service::ChatService;
