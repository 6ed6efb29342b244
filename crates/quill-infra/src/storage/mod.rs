//! Persistent storage for Quill.

pub mod transcripts;

pub use transcripts::TranscriptStore;
