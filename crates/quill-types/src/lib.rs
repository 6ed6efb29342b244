//! Shared domain types for Quill.
//!
//! This crate contains the core domain types used across the Quill
//! workspace: chat turns, completion request/response shapes, assistant
//! configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod history;
pub mod llm;
