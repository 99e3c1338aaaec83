//! Serper search provider (google.serper.dev).

use async_trait::async_trait;
use serde::Deserialize;

use super::SearchProvider;
use crate::errors::SearchError;
use crate::types::{ProviderKind, SearchHit};

/// Default endpoint for Serper's Google search API.
const SERPER_ENDPOINT: &str = "https://google.serper.dev/search";

/// Serper client.
///
/// Authenticates with the `X-API-KEY` header and reads the `organic` result
/// list from the JSON body. This is the default backend; any error from it
/// is what the tool's failover reacts to.
#[derive(Debug)]
pub struct SerperProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Response from the Serper search endpoint.
#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SerperHit>,
}

/// Single organic result from Serper.
#[derive(Debug, Deserialize)]
struct SerperHit {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
}

impl From<SerperHit> for SearchHit {
    fn from(hit: SerperHit) -> Self {
        SearchHit {
            title: hit.title,
            link: hit.link,
            snippet: hit.snippet,
        }
    }
}

impl SerperProvider {
    /// Create a provider against the production endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_config(SERPER_ENDPOINT.to_string(), api_key)
    }

    /// Create a provider against a custom endpoint (tests, proxies).
    pub fn with_config(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl SearchProvider for SerperProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Serper
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let params = [("q", query), ("gl", "us"), ("hl", "en"), ("num", "10")];

        let response = self
            .client
            .get(&self.base_url)
            .header("X-API-KEY", &self.api_key)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::Transport {
                provider: ProviderKind::Serper,
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                provider: ProviderKind::Serper,
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SerperResponse =
            response.json().await.map_err(|e| SearchError::Transport {
                provider: ProviderKind::Serper,
                reason: e.to_string(),
            })?;

        Ok(parsed.organic.into_iter().map(SearchHit::from).collect())
    }
}
