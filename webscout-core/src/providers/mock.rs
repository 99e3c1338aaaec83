//! Mock provider implementation for testing.

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use super::SearchProvider;
#[cfg(test)]
use crate::errors::SearchError;
#[cfg(test)]
use crate::types::{ProviderKind, SearchHit};

/// Scripted provider for testing.
///
/// Answers every call with the same configured result: a fixed hit list or
/// a fixed error.
#[cfg(test)]
#[derive(Debug)]
pub struct MockProvider {
    kind: ProviderKind,
    script: Script,
}

#[cfg(test)]
#[derive(Debug)]
enum Script {
    Hits(Vec<SearchHit>),
    Fail(SearchError),
}

#[cfg(test)]
impl MockProvider {
    /// Provider that returns `count` numbered hits tagged with its backend name.
    pub fn with_hits(kind: ProviderKind, count: usize) -> Self {
        let hits = (1..=count)
            .map(|i| SearchHit {
                title: Some(format!("{} result {i}", kind.display_name())),
                link: Some(format!("https://{kind}.example/{i}")),
                snippet: Some(format!("Snippet {i}")),
            })
            .collect();
        Self {
            kind,
            script: Script::Hits(hits),
        }
    }

    /// Provider that returns an empty hit list.
    pub fn empty(kind: ProviderKind) -> Self {
        Self {
            kind,
            script: Script::Hits(Vec::new()),
        }
    }

    /// Provider that fails every call with a transport error.
    pub fn failing(kind: ProviderKind, reason: &str) -> Self {
        Self {
            kind,
            script: Script::Fail(SearchError::Transport {
                provider: kind,
                reason: reason.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl SearchProvider for MockProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn search(&self, _query: &str) -> Result<Vec<SearchHit>, SearchError> {
        match &self.script {
            Script::Hits(hits) => Ok(hits.clone()),
            Script::Fail(err) => Err(err.clone()),
        }
    }
}
