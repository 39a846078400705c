//! Article fetching and batch loading

use futures::future;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use newslens_core::{Document, Error, Result};

use crate::extract::extract_text;

/// Maximum number of URLs accepted per batch
pub const MAX_URLS: usize = 3;

/// Fetches article URLs and extracts their readable text.
///
/// A batch either fully succeeds or fails as a whole: any fetch or extraction
/// failure aborts with a single aggregated error and nothing downstream runs.
pub struct ArticleLoader {
    client: Client,
}

impl ArticleLoader {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent(concat!("newslens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Drop blank entries and validate the rest as http(s) URLs
    pub fn prepare_urls(entries: &[String]) -> Result<Vec<String>> {
        let urls: Vec<String> = entries
            .iter()
            .map(|entry| entry.trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect();

        if urls.is_empty() {
            return Err(Error::InvalidInput("no URLs provided".to_string()));
        }
        if urls.len() > MAX_URLS {
            return Err(Error::InvalidInput(format!(
                "at most {} URLs per batch, got {}",
                MAX_URLS,
                urls.len()
            )));
        }

        for url in &urls {
            let parsed = Url::parse(url)
                .map_err(|e| Error::InvalidInput(format!("invalid URL {}: {}", url, e)))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(Error::InvalidInput(format!(
                    "unsupported URL scheme {}: {}",
                    parsed.scheme(),
                    url
                )));
            }
        }

        Ok(urls)
    }

    /// Fetch and extract every URL in the batch, order-preserving
    pub async fn load(&self, entries: &[String]) -> Result<Vec<Document>> {
        let urls = Self::prepare_urls(entries)?;

        let fetches = urls.iter().map(|url| self.fetch_document(url));
        let results = future::join_all(fetches).await;

        let mut documents = Vec::new();
        let mut failures = Vec::new();
        for (url, result) in urls.iter().zip(results) {
            match result {
                Ok(document) => documents.push(document),
                Err(e) => failures.push(format!("{}: {}", url, e)),
            }
        }

        if !failures.is_empty() {
            return Err(Error::Loader(failures.join("; ")));
        }

        Ok(documents)
    }

    async fn fetch_document(&self, url: &str) -> Result<Document> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Loader(format!(
                "request failed with status {}",
                response.status()
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let text = extract_text(&html);
        if text.is_empty() {
            return Err(Error::Loader("no readable text extracted".to_string()));
        }

        Ok(Document::new(url, text))
    }
}
