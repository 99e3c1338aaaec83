//! Provider implementations for web search backends.

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::types::{ProviderKind, SearchHit};

pub mod mock;
pub mod serp_api;
pub mod serper;

#[cfg(test)]
pub use mock::MockProvider;
pub use serp_api::SerpApiProvider;
pub use serper::SerperProvider;

/// Trait for web search backends.
///
/// Implementations issue one query against their backend and return organic
/// hits in encounter order. Callers format and cap the hits; providers do
/// not truncate.
#[async_trait]
pub trait SearchProvider: Send + Sync + std::fmt::Debug {
    /// Which backend this provider talks to.
    fn kind(&self) -> ProviderKind;

    /// Run a query and return organic hits.
    ///
    /// # Errors
    /// - `SearchError::Status` - backend answered with a non-2xx status
    /// - `SearchError::Transport` - request failed or the body did not decode
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}
