//! Webscout Core - Web search with provider failover
//!
//! Answers text queries through one of two hosted search backends (Serper,
//! SerpApi), selecting a provider from the configured API keys and failing
//! over once when the preferred provider cannot serve the call. The public
//! string surface is total: every failure renders as a message, nothing
//! panics or escapes as an error.

#![warn(missing_docs)]
#![warn(clippy::too_many_lines)]

pub mod config;
pub mod errors;
pub mod providers;
pub mod tool;
pub mod types;

// Re-export main types
pub use config::Credentials;
pub use errors::SearchError;
pub use providers::{SearchProvider, SerpApiProvider, SerperProvider};
pub use tool::WebSearchTool;
pub use types::{ProviderKind, SearchHit, SearchOutcome};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
