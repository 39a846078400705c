//! Core traits and types for newslens
//!
//! This crate defines the fundamental traits and types used across the
//! newslens system. It provides capability-facing interfaces for the chat
//! model and embedding provider, plus the document, chunk, and answer types
//! shared by the pipeline crates, making the system test-friendly and
//! extensible.

pub mod answer;
pub mod chat;
pub mod document;
pub mod embedding;
pub mod error;

pub use answer::{Answer, QueryOutcome};
pub use chat::{ChatModel, Completion, CompletionConfig};
pub use document::{chunk_id, Chunk, Document, ScoredChunk};
pub use embedding::EmbeddingProvider;
pub use error::{Error, Result};
