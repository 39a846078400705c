//! Answer and query outcome types

use serde::{Deserialize, Serialize};

/// Generated answer text plus the source URLs it drew from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub sources: Vec<String>,
}

/// Outcome of a query against the article index.
///
/// `NotReady` means no index has been built yet. It is a first-class outcome
/// rather than an error so callers can tell "nothing to search" apart from a
/// failed search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum QueryOutcome {
    NotReady,
    Answered(Answer),
}

impl QueryOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, QueryOutcome::Answered(_))
    }
}
