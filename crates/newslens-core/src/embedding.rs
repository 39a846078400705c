//! Embedding provider trait

use async_trait::async_trait;

use crate::{Error, Result};

/// Trait for hosted embedding providers
///
/// Implementations must return exactly one vector per input, in input order.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of texts, one vector per text, order-preserving
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Embed a single query string
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        let texts = [text.to_string()];
        let mut vectors = self.embed_batch(&texts).await?;
        vectors
            .pop()
            .ok_or_else(|| Error::Embedding("provider returned no vector for query".to_string()))
    }

    /// Identifier of the embedding model
    fn model_id(&self) -> &str;
}
