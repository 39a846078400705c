//! OpenAI-compatible API integration for newslens
//!
//! This crate provides the hosted implementation of the `ChatModel` and
//! `EmbeddingProvider` traits.

mod client;
mod config;


pub use client::OpenAiClient;
pub use config::OpenAiConfig;

// Re-export core types for convenience
pub use newslens_core::{
    ChatModel, Completion, CompletionConfig, EmbeddingProvider, Error, Result,
};
