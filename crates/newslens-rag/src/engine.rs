//! The research engine: the session-facing pipeline object

use std::path::{Path, PathBuf};
use std::sync::Arc;

use newslens_core::{
    Answer, ChatModel, CompletionConfig, EmbeddingProvider, Error, QueryOutcome, Result,
    ScoredChunk,
};
use serde::Serialize;

use crate::chunker::TextChunker;
use crate::index::ArticleIndex;
use crate::loader::ArticleLoader;

/// Default location of the persisted index
pub const DEFAULT_INDEX_PATH: &str = "article_index.json";

/// Default number of chunks retrieved per question
pub const DEFAULT_TOP_K: usize = 4;

/// What a successful process action produced
#[derive(Debug, Clone, Serialize)]
pub struct ProcessSummary {
    pub documents: usize,
    pub chunks: usize,
    pub index_path: PathBuf,
}

/// Drives the whole pipeline for one user session: process a batch of URLs
/// into a fresh index, answer questions against the persisted index.
pub struct ResearchEngine<E: EmbeddingProvider, C: ChatModel> {
    loader: ArticleLoader,
    chunker: TextChunker,
    embedder: Arc<E>,
    chat: Arc<C>,
    index_path: PathBuf,
    top_k: usize,
}

impl<E: EmbeddingProvider, C: ChatModel> ResearchEngine<E, C> {
    pub fn new(embedder: Arc<E>, chat: Arc<C>, index_path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            loader: ArticleLoader::new()?,
            chunker: TextChunker::default(),
            embedder,
            chat,
            index_path: index_path.into(),
            top_k: DEFAULT_TOP_K,
        })
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    /// Whether a persisted index exists for this session to query
    pub fn is_ready(&self) -> bool {
        self.index_path.exists()
    }

    /// Fetch, chunk, embed, and index a batch of URLs, replacing any prior
    /// index wholesale. Nothing is persisted unless every stage succeeds.
    pub async fn process_urls(&self, entries: &[String]) -> Result<ProcessSummary> {
        let documents = self.loader.load(entries).await?;

        let mut chunks = Vec::new();
        for document in &documents {
            chunks.extend(self.chunker.chunk_document(document));
        }
        if chunks.is_empty() {
            return Err(Error::Loader(
                "articles contained no usable text after chunking".to_string(),
            ));
        }

        let texts: Vec<String> = chunks.iter().map(|chunk| chunk.text.clone()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;

        let index = ArticleIndex::build(self.embedder.model_id(), chunks, embeddings)?;
        index.save(&self.index_path)?;

        Ok(ProcessSummary {
            documents: documents.len(),
            chunks: index.len(),
            index_path: self.index_path.clone(),
        })
    }

    /// Answer a question against the persisted index.
    ///
    /// Returns `QueryOutcome::NotReady` when no index has been built yet.
    pub async fn answer(&self, question: &str) -> Result<QueryOutcome> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::InvalidInput("empty question".to_string()));
        }
        if !self.index_path.exists() {
            return Ok(QueryOutcome::NotReady);
        }

        let index = ArticleIndex::load(&self.index_path)?;
        let query_vector = self.embedder.embed_query(question).await?;
        let matches = index.search(&query_vector, self.top_k);

        let prompt = build_prompt(question, &matches);
        let config = CompletionConfig {
            model_id: self.chat.model_id().to_string(),
            ..Default::default()
        };
        let completion = self.chat.complete(&prompt, &config).await?;

        Ok(QueryOutcome::Answered(parse_reply(&completion.text)))
    }
}

/// Render retrieved chunks as numbered, URL-tagged excerpts and wrap them in
/// the answering instruction.
pub(crate) fn build_prompt(question: &str, matches: &[ScoredChunk]) -> String {
    let mut excerpts = String::new();
    for (i, scored) in matches.iter().enumerate() {
        excerpts.push_str(&format!(
            "{}. [{}] {}\n\n",
            i + 1,
            scored.chunk.source_url,
            scored.chunk.text
        ));
    }

    format!(
        "You are a research assistant answering questions about news articles.\n\
         Answer using only the numbered excerpts below. If they do not contain \
         the answer, say you do not know.\n\
         End your reply with a final line starting with \"SOURCES:\" listing the \
         URLs of the excerpts you used.\n\
         \n\
         Excerpts:\n\
         {}\
         Question: {}\n\
         Answer:",
        excerpts, question
    )
}

/// Split a model reply into answer text and cited source URLs.
///
/// Sources after the `SOURCES:` marker may be newline- or comma-delimited and
/// may carry list bullets; duplicates are dropped, order kept.
pub(crate) fn parse_reply(reply: &str) -> Answer {
    let marker = ["SOURCES:", "Sources:"]
        .iter()
        .find_map(|marker| reply.find(marker).map(|at| (at, marker.len())));

    let Some((at, marker_len)) = marker else {
        return Answer {
            text: reply.trim().to_string(),
            sources: Vec::new(),
        };
    };

    let text = reply[..at].trim().to_string();
    let mut sources = Vec::new();
    for candidate in reply[at + marker_len..].split(['\n', ',']) {
        let candidate = candidate.trim().trim_start_matches(['-', '*']).trim();
        if candidate.is_empty() {
            continue;
        }
        let candidate = candidate.to_string();
        if !sources.contains(&candidate) {
            sources.push(candidate);
        }
    }

    Answer { text, sources }
}
