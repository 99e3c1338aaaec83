//! Data types for web search results and outcomes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SearchError;

/// Maximum number of hits included in rendered output.
///
/// Providers are asked for more (see [`crate::providers`]) but only the top
/// results are shown to keep the summary readable.
pub const DISPLAY_LIMIT: usize = 5;

/// Search backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    /// Serper (google.serper.dev), the default backend.
    Serper,
    /// SerpApi (serpapi.com), the alternate backend.
    SerpApi,
}

impl ProviderKind {
    /// Environment variable holding this backend's API key.
    pub fn env_key(self) -> &'static str {
        match self {
            ProviderKind::Serper => "SERPER_API_KEY",
            ProviderKind::SerpApi => "SERPAPI_API_KEY",
        }
    }

    /// Backend name as it appears in user-facing messages.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::Serper => "Serper API",
            ProviderKind::SerpApi => "SerpAPI",
        }
    }

    /// The alternate backend, used when failing over.
    pub fn other(self) -> Self {
        match self {
            ProviderKind::Serper => ProviderKind::SerpApi,
            ProviderKind::SerpApi => ProviderKind::Serper,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Serper => write!(f, "serper"),
            ProviderKind::SerpApi => write!(f, "serpapi"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "serper" => Ok(ProviderKind::Serper),
            "serpapi" => Ok(ProviderKind::SerpApi),
            other => Err(SearchError::UnsupportedProvider {
                name: other.to_string(),
            }),
        }
    }
}

/// Single organic search hit.
///
/// All fields are optional; rendering substitutes placeholders for whatever
/// the backend left out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Page title.
    pub title: Option<String>,
    /// Page URL.
    pub link: Option<String>,
    /// Short description excerpt.
    pub snippet: Option<String>,
}

impl SearchHit {
    /// Render this hit as a numbered three-line block.
    fn render_block(&self, index: usize) -> String {
        format!(
            "{}. {}\n   URL: {}\n   Description: {}\n",
            index,
            self.title.as_deref().unwrap_or("No title"),
            self.link.as_deref().unwrap_or("No link"),
            self.snippet.as_deref().unwrap_or("No description"),
        )
    }
}

/// Outcome of one search call.
///
/// Callers that need to react to the failure class programmatically match on
/// [`SearchOutcome::Failed`]; callers that only display text use
/// [`SearchOutcome::render`].
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// The backend answered with at least one organic hit.
    Hits(Vec<SearchHit>),
    /// The backend answered successfully but found nothing.
    Empty,
    /// The call failed; the error carries the user-facing message.
    Failed(SearchError),
}

impl SearchOutcome {
    /// Classify a successful provider answer.
    pub fn from_hits(hits: Vec<SearchHit>) -> Self {
        if hits.is_empty() {
            SearchOutcome::Empty
        } else {
            SearchOutcome::Hits(hits)
        }
    }

    /// Whether this outcome represents a failed call.
    pub fn is_failure(&self) -> bool {
        matches!(self, SearchOutcome::Failed(_))
    }

    /// Lower the outcome to its user-facing string.
    ///
    /// Hits render as 1-based numbered blocks, capped at [`DISPLAY_LIMIT`]
    /// and separated by a blank line, in the order the backend returned them.
    pub fn render(&self) -> String {
        match self {
            SearchOutcome::Hits(hits) => hits
                .iter()
                .take(DISPLAY_LIMIT)
                .enumerate()
                .map(|(i, hit)| hit.render_block(i + 1))
                .collect::<Vec<_>>()
                .join("\n"),
            SearchOutcome::Empty => "No results found for the query.".to_string(),
            SearchOutcome::Failed(err) => err.to_string(),
        }
    }
}
