//! Article ingestion, similarity index, and query answering for newslens
//!
//! This crate implements the pipeline between the user-facing surface and the
//! hosted providers: fetching and extracting article text, chunking it,
//! building the file-persisted similarity index, and answering questions
//! against it.

mod chunker;
mod engine;
mod extract;
mod index;
mod loader;


pub use chunker::{TextChunker, DEFAULT_MAX_CHARS};
pub use engine::{ProcessSummary, ResearchEngine, DEFAULT_INDEX_PATH, DEFAULT_TOP_K};
pub use extract::extract_text;
pub use index::{cosine_similarity, ArticleIndex, IndexedChunk, INDEX_FORMAT_VERSION};
pub use loader::{ArticleLoader, MAX_URLS};

// Re-export core types for convenience
pub use newslens_core::{
    Answer, ChatModel, Chunk, Completion, CompletionConfig, Document, EmbeddingProvider, Error,
    QueryOutcome, Result, ScoredChunk,
};
