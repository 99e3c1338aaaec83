//! SerpApi search provider (serpapi.com).

use async_trait::async_trait;
use serde::Deserialize;

use super::SearchProvider;
use crate::errors::SearchError;
use crate::types::{ProviderKind, SearchHit};

/// Default endpoint for SerpApi's search API.
const SERPAPI_ENDPOINT: &str = "https://serpapi.com/search";

/// SerpApi client.
///
/// Passes the API key as a query parameter and reads the `organic_results`
/// list from the JSON body. Non-2xx responses surface the status code
/// together with the raw body text so upstream diagnostics are not lost.
#[derive(Debug)]
pub struct SerpApiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Response from the SerpApi search endpoint.
#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<SerpApiHit>,
}

/// Single organic result from SerpApi.
#[derive(Debug, Deserialize)]
struct SerpApiHit {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
}

impl From<SerpApiHit> for SearchHit {
    fn from(hit: SerpApiHit) -> Self {
        SearchHit {
            title: hit.title,
            link: hit.link,
            snippet: hit.snippet,
        }
    }
}

impl SerpApiProvider {
    /// Create a provider against the production endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_config(SERPAPI_ENDPOINT.to_string(), api_key)
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
impl SearchProvider for SerpApiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::SerpApi
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let params = [
            ("q", query),
            ("engine", "google"),
            ("api_key", &self.api_key),
            ("gl", "us"),
            ("hl", "en"),
            ("num", "10"),
        ];

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::Transport {
                provider: ProviderKind::SerpApi,
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                provider: ProviderKind::SerpApi,
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SerpApiResponse =
            response.json().await.map_err(|e| SearchError::Transport {
                provider: ProviderKind::SerpApi,
                reason: e.to_string(),
            })?;

        Ok(parsed
            .organic_results
            .into_iter()
            .map(SearchHit::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_organic_results() {
        let body = r#"{
            "search_metadata": {"status": "Success"},
            "organic_results": [
                {"title": "First", "link": "https://a.example", "snippet": "alpha"},
                {"title": "Second", "snippet": "beta"},
                {}
            ]
        }"#;

        let parsed: SerpApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.organic_results.len(), 3);

        let hits: Vec<SearchHit> = parsed
            .organic_results
            .into_iter()
            .map(SearchHit::from)
            .collect();
        assert_eq!(hits[0].link.as_deref(), Some("https://a.example"));
        assert_eq!(hits[1].link, None);
        assert_eq!(hits[2].title, None);
    }

    #[test]
    fn test_parse_missing_results_defaults_empty() {
        let parsed: SerpApiResponse =
            serde_json::from_str(r#"{"search_metadata": {}}"#).unwrap();
        assert!(parsed.organic_results.is_empty());
    }
}
