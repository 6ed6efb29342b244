//! Business logic for Quill.
//!
//! This crate owns the two pieces with a lasting design contract: the
//! bounded conversation history with its chat service, and the fixed
//! prompt-template engine. It also defines the [`llm::provider::LlmProvider`]
//! port that the infrastructure layer implements. Depends only on
//! `quill-types` -- never on `quill-infra` or any HTTP/IO crate.

pub mod chat;
pub mod llm;
pub mod template;
