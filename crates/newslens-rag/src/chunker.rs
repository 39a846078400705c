//! Separator-preference text chunker
//!
//! Splits document text into bounded-size chunks by trying separators in
//! preference order: paragraph break, line break, period, comma. Pieces are
//! greedily packed back up to the bound; a piece no separator can shrink is
//! hard-cut at the character level. No emitted chunk exceeds the bound.

use newslens_core::{Chunk, Document};

/// Separators in preference order
const SEPARATORS: [&str; 4] = ["\n\n", "\n", ".", ","];

/// Default maximum chunk size in characters
pub const DEFAULT_MAX_CHARS: usize = 1000;

#[derive(Debug, Clone)]
pub struct TextChunker {
    max_chars: usize,
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHARS)
    }
}

impl TextChunker {
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars: max_chars.max(1),
        }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Split raw text into chunk strings
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        self.split_level(text, 0, &mut chunks);
        chunks
    }

    /// Split a document into chunks carrying its source URL
    pub fn chunk_document(&self, document: &Document) -> Vec<Chunk> {
        self.split(&document.text)
            .into_iter()
            .map(|text| Chunk::new(text, document.url.clone()))
            .collect()
    }

    fn split_level(&self, text: &str, level: usize, out: &mut Vec<String>) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if char_len(text) <= self.max_chars {
            out.push(text.to_string());
            return;
        }
        if level >= SEPARATORS.len() {
            self.hard_cut(text, out);
            return;
        }

        let separator = SEPARATORS[level];
        if !text.contains(separator) {
            self.split_level(text, level + 1, out);
            return;
        }

        // Greedily pack separator-delimited pieces back up to the bound.
        let mut buffer = String::new();
        for piece in text.split_inclusive(separator) {
            if char_len(&buffer) + char_len(piece) <= self.max_chars {
                buffer.push_str(piece);
                continue;
            }

            self.emit(&buffer, out);
            buffer.clear();

            if char_len(piece) <= self.max_chars {
                buffer.push_str(piece);
            } else {
                // This piece alone breaks the bound; try the next separator.
                self.split_level(piece, level + 1, out);
            }
        }
        self.emit(&buffer, out);
    }

    fn emit(&self, buffer: &str, out: &mut Vec<String>) {
        let trimmed = buffer.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }

    /// Last resort: cut at the character level, respecting the bound
    fn hard_cut(&self, text: &str, out: &mut Vec<String>) {
        let chars: Vec<char> = text.chars().collect();
        for window in chars.chunks(self.max_chars) {
            let chunk: String = window.iter().collect();
            self.emit(&chunk, out);
        }
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_within_bound(chunks: &[String], max_chars: usize) {
        for chunk in chunks {
            assert!(
                chunk.chars().count() <= max_chars,
                "chunk of {} chars exceeds bound {}: {:?}",
                chunk.chars().count(),
                max_chars,
                chunk
            );
        }
    }

    #[test]
    fn short_text_is_a_single_chunk() {
        let chunker = TextChunker::new(100);
        let chunks = chunker.split("A short paragraph.");
        assert_eq!(chunks, vec!["A short paragraph.".to_string()]);
    }

    #[test]
    fn splits_on_paragraph_breaks_first() {
        let chunker = TextChunker::new(40);
        let text = "First paragraph about markets.\n\nSecond paragraph about rates.";
        let chunks = chunker.split(text);
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].contains("First paragraph"));
        assert!(chunks[1].contains("Second paragraph"));
        assert_within_bound(&chunks, 40);
    }

    #[test]
    fn packs_small_pieces_up_to_the_bound() {
        let chunker = TextChunker::new(100);
        let text = "One.\n\nTwo.\n\nThree.";
        let chunks = chunker.split(text);
        // All three paragraphs fit in a single 100-char chunk.
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn falls_back_to_sentences_within_a_long_paragraph() {
        let chunker = TextChunker::new(60);
        let text = "The first sentence is here. The second sentence follows it. The third one closes the paragraph.";
        let chunks = chunker.split(text);
        assert!(chunks.len() >= 2);
        assert_within_bound(&chunks, 60);
    }

    #[test]
    fn hard_cuts_text_with_no_separators() {
        let chunker = TextChunker::new(1000);
        let text = "a".repeat(2500);
        let chunks = chunker.split(&text);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), 1000);
        assert_eq!(chunks[1].chars().count(), 1000);
        assert_eq!(chunks[2].chars().count(), 500);
    }

    #[test]
    fn every_chunk_respects_the_bound_on_mixed_text() {
        let chunker = TextChunker::new(50);
        let mut text = String::new();
        for i in 0..20 {
            text.push_str(&format!(
                "Paragraph {} has a sentence. It also has another, with a comma clause.\n\n",
                i
            ));
        }
        text.push_str(&"x".repeat(180));
        let chunks = chunker.split(&text);
        assert!(!chunks.is_empty());
        assert_within_bound(&chunks, 50);
    }

    #[test]
    fn whitespace_only_input_yields_no_chunks() {
        let chunker = TextChunker::new(100);
        assert!(chunker.split("\n\n  \n\n").is_empty());
    }

    #[test]
    fn chunk_document_carries_source_url() {
        let chunker = TextChunker::new(40);
        let document = Document::new(
            "https://example.com/article",
            "First paragraph about markets.\n\nSecond paragraph about rates.",
        );
        let chunks = chunker.chunk_document(&document);
        assert_eq!(chunks.len(), 2);
        for chunk in &chunks {
            assert_eq!(chunk.source_url, "https://example.com/article");
            assert!(!chunk.id.is_empty());
        }
    }
}
