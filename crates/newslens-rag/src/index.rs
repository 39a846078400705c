//! File-persisted similarity index over (chunk, embedding) pairs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use newslens_core::{Chunk, Error, Result, ScoredChunk};

/// Bumped when the on-disk layout changes; older files are rejected on load
pub const INDEX_FORMAT_VERSION: u32 = 1;

/// One chunk paired with its embedding vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedChunk {
    pub chunk: Chunk,
    pub embedding: Vec<f32>,
}

/// The whole similarity index, serialized wholesale to a single JSON file.
///
/// Rebuilt from scratch on every process action; the persisted file is the
/// sole source of truth for answering queries until the next rebuild.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleIndex {
    version: u32,
    pub embedding_model: String,
    pub dimension: usize,
    pub built_at: DateTime<Utc>,
    entries: Vec<IndexedChunk>,
}

impl ArticleIndex {
    /// Pair chunks with their embeddings and build the index
    pub fn build(
        embedding_model: impl Into<String>,
        chunks: Vec<Chunk>,
        embeddings: Vec<Vec<f32>>,
    ) -> Result<Self> {
        if chunks.len() != embeddings.len() {
            return Err(Error::Index(format!(
                "{} chunks but {} embeddings",
                chunks.len(),
                embeddings.len()
            )));
        }
        if chunks.is_empty() {
            return Err(Error::Index("cannot build an empty index".to_string()));
        }

        let dimension = embeddings[0].len();
        if embeddings.iter().any(|vector| vector.len() != dimension) {
            return Err(Error::Index(
                "embedding vectors have inconsistent dimensions".to_string(),
            ));
        }

        let entries = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| IndexedChunk { chunk, embedding })
            .collect();

        Ok(Self {
            version: INDEX_FORMAT_VERSION,
            embedding_model: embedding_model.into(),
            dimension,
            built_at: Utc::now(),
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Nearest-neighbor lookup by cosine similarity, best first
    pub fn search(&self, query: &[f32], top_k: usize) -> Vec<ScoredChunk> {
        let mut scored: Vec<ScoredChunk> = self
            .entries
            .iter()
            .map(|entry| ScoredChunk {
                chunk: entry.chunk.clone(),
                score: cosine_similarity(query, &entry.embedding),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);
        scored
    }

    /// Serialize the whole index to `path`.
    ///
    /// Writes to a temp file in the target directory and renames it into
    /// place, so an interrupted save never clobbers a valid index.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }

    /// Load an index previously written by `save`
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let index: ArticleIndex =
            serde_json::from_str(&content).map_err(|e| Error::Serialization(e.to_string()))?;

        if index.version != INDEX_FORMAT_VERSION {
            return Err(Error::Index(format!(
                "unsupported index format version {}",
                index.version
            )));
        }

        Ok(index)
    }
}

/// Calculate cosine similarity between two vectors
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_index() -> ArticleIndex {
        let chunks = vec![
            Chunk::new("rates rose sharply", "https://example.com/a"),
            Chunk::new("the match ended in a draw", "https://example.com/b"),
        ];
        let embeddings = vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]];
        ArticleIndex::build("test-model", chunks, embeddings).unwrap()
    }

    #[test]
    fn test_cosine_similarity() {
        let vec1 = vec![1.0, 0.0, 0.0];
        let vec2 = vec![1.0, 0.0, 0.0];
        let vec3 = vec![0.0, 1.0, 0.0];

        assert!((cosine_similarity(&vec1, &vec2) - 1.0).abs() < 0.001);
        assert!((cosine_similarity(&vec1, &vec3) - 0.0).abs() < 0.001);
    }

    #[test]
    fn mismatched_lengths_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0]), 0.0);
    }

    #[test]
    fn search_returns_best_match_first() {
        let index = sample_index();
        let results = index.search(&[0.9, 0.1, 0.0], 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].chunk.source_url, "https://example.com/a");
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn search_truncates_to_top_k() {
        let index = sample_index();
        let results = index.search(&[1.0, 0.0, 0.0], 1);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn build_rejects_mismatched_counts() {
        let chunks = vec![Chunk::new("text", "https://example.com")];
        let result = ArticleIndex::build("m", chunks, vec![]);
        assert!(matches!(result, Err(Error::Index(_))));
    }

    #[test]
    fn build_rejects_inconsistent_dimensions() {
        let chunks = vec![
            Chunk::new("one", "https://example.com"),
            Chunk::new("two", "https://example.com"),
        ];
        let embeddings = vec![vec![1.0, 0.0], vec![1.0]];
        let result = ArticleIndex::build("m", chunks, embeddings);
        assert!(matches!(result, Err(Error::Index(_))));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.json");

        let index = sample_index();
        index.save(&path).unwrap();

        let loaded = ArticleIndex::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.embedding_model, "test-model");
        assert_eq!(loaded.dimension, 3);
    }

    #[test]
    fn save_replaces_a_previous_index() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.json");

        sample_index().save(&path).unwrap();

        let chunks = vec![Chunk::new("only entry", "https://example.com/c")];
        let replacement = ArticleIndex::build("test-model", chunks, vec![vec![1.0]]).unwrap();
        replacement.save(&path).unwrap();

        let loaded = ArticleIndex::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn unknown_format_version_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.json");

        let index = sample_index();
        index.save(&path).unwrap();

        let mut raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        raw["version"] = serde_json::json!(99);
        fs::write(&path, serde_json::to_string(&raw).unwrap()).unwrap();

        let result = ArticleIndex::load(&path);
        assert!(matches!(result, Err(Error::Index(_))));
    }
}
