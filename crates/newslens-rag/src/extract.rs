//! Plain-text extraction from article HTML

use regex::Regex;
use scraper::{Html, Selector};

/// Block-level elements that carry readable article text
const BLOCK_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, li, blockquote, td, th";

/// Extract readable text from an HTML document.
///
/// Each block-level element becomes one paragraph; paragraphs are joined with
/// blank lines so the chunker's separator preference applies downstream.
/// Returns an empty string when the page has no readable blocks.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let whitespace = match Regex::new(r"\s+") {
        Ok(re) => re,
        Err(_) => return String::new(),
    };

    let mut blocks = Vec::new();
    if let Ok(selector) = Selector::parse(BLOCK_SELECTOR) {
        for element in document.select(&selector) {
            let raw = element.text().collect::<Vec<_>>().join(" ");
            let text = whitespace.replace_all(&raw, " ").trim().to_string();
            if !text.is_empty() {
                blocks.push(text);
            }
        }
    }

    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_block_level_text() {
        let html = r#"
            <html>
                <body>
                    <h1>Test Title</h1>
                    <p>This is a test paragraph with enough content to be indexed.</p>
                    <ul><li>First item</li><li>Second item</li></ul>
                </body>
            </html>
        "#;

        let text = extract_text(html);
        assert!(text.contains("Test Title"));
        assert!(text.contains("test paragraph"));
        assert!(text.contains("First item"));
    }

    #[test]
    fn blocks_are_separated_by_blank_lines() {
        let html = "<h1>Heading</h1><p>Body text.</p>";
        let text = extract_text(html);
        assert_eq!(text, "Heading\n\nBody text.");
    }

    #[test]
    fn collapses_interior_whitespace() {
        let html = "<p>Spread   across\n   lines</p>";
        let text = extract_text(html);
        assert_eq!(text, "Spread across lines");
    }

    #[test]
    fn script_and_style_content_is_ignored() {
        let html = "<script>var x = 1;</script><style>p { color: red; }</style><p>Visible</p>";
        let text = extract_text(html);
        assert_eq!(text, "Visible");
    }

    #[test]
    fn empty_page_yields_empty_text() {
        assert!(extract_text("<html><body></body></html>").is_empty());
    }
}
