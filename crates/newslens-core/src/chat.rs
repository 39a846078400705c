//! Chat model trait and generation types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::Result;

/// Configuration for a single completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub stop_sequences: Vec<String>,
    #[serde(skip, default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model_id: "gpt-4".to_string(),
            max_tokens: 500,
            temperature: 0.9,
            stop_sequences: Vec::new(),
            timeout: default_timeout(),
        }
    }
}

/// Result of a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    pub text: String,
    pub model_id: String,
}

/// Trait for hosted chat-completion models
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a completion for a prompt
    async fn complete(&self, prompt: &str, config: &CompletionConfig) -> Result<Completion>;

    /// Identifier of the model used by default
    fn model_id(&self) -> &str;
}
