//! Infrastructure layer for Quill.
//!
//! Contains the implementations behind the ports defined in `quill-core`:
//! the OpenRouter LLM provider (OpenAI-compatible API via `async-openai`),
//! environment-based API key resolution, and the transcript file store.

pub mod llm;
pub mod secret;
pub mod storage;
