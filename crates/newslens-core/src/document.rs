//! Document and chunk types shared across the pipeline

use serde::{Deserialize, Serialize};

/// An article fetched from a URL, read-only after extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub url: String,
    pub text: String,
}

impl Document {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}

/// A bounded-size segment of a document, the unit of retrieval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub text: String,
    pub source_url: String,
}

impl Chunk {
    pub fn new(text: impl Into<String>, source_url: impl Into<String>) -> Self {
        let text = text.into();
        let source_url = source_url.into();
        Self {
            id: chunk_id(&source_url, &text),
            text,
            source_url,
        }
    }
}

/// Stable content-derived chunk id: md5 of the source URL joined with md5 of
/// the chunk text. Re-chunking identical content yields identical ids.
pub fn chunk_id(source_url: &str, text: &str) -> String {
    let url_hash = format!("{:x}", md5::compute(source_url.as_bytes()));
    let text_hash = format!("{:x}", md5::compute(text.as_bytes()));
    format!("{}-{}", url_hash, text_hash)
}

/// A chunk paired with its similarity score for a query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub score: f32,
}
