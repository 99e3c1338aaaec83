//! Web search tool with credential-driven provider selection and failover.

use tracing::{debug, warn};

use crate::config::Credentials;
use crate::errors::SearchError;
use crate::providers::{SearchProvider, SerpApiProvider, SerperProvider};
use crate::types::{ProviderKind, SearchOutcome};

/// Web search facade over the two hosted backends.
///
/// Selection at construction: an explicit preference wins; otherwise SerpApi
/// when it holds the only configured key; otherwise Serper, whether or not
/// its key is present. A call that cannot be served by the selected backend
/// fails over to the other exactly once:
///
/// - Serper selected with no key, or Serper returning an error, delegates to
///   SerpApi when its key exists.
/// - SerpApi selected with no key delegates to Serper when its key exists.
///   A live SerpApi failure is returned as-is.
///
/// [`Self::search`] persists the switch for subsequent calls;
/// [`Self::dispatch`] leaves persistence to the caller.
#[derive(Debug)]
pub struct WebSearchTool {
    provider: ProviderKind,
    serper: Option<Box<dyn SearchProvider>>,
    serp_api: Option<Box<dyn SearchProvider>>,
}

impl WebSearchTool {
    /// Build a tool from the process environment.
    pub fn from_env(preference: Option<ProviderKind>) -> Self {
        Self::with_credentials(Credentials::from_env(), preference)
    }

    /// Build a tool from explicit credentials.
    pub fn with_credentials(credentials: Credentials, preference: Option<ProviderKind>) -> Self {
        let serper = credentials
            .serper_api_key
            .map(|key| Box::new(SerperProvider::new(key)) as Box<dyn SearchProvider>);
        let serp_api = credentials
            .serpapi_api_key
            .map(|key| Box::new(SerpApiProvider::new(key)) as Box<dyn SearchProvider>);

        Self::with_providers(serper, serp_api, preference)
    }

    /// Assemble a tool from provider instances.
    ///
    /// A `None` slot behaves exactly like a missing credential. This is the
    /// seam for custom endpoints and test doubles.
    pub fn with_providers(
        serper: Option<Box<dyn SearchProvider>>,
        serp_api: Option<Box<dyn SearchProvider>>,
        preference: Option<ProviderKind>,
    ) -> Self {
        let provider = match preference {
            Some(kind) => kind,
            None if serp_api.is_some() && serper.is_none() => ProviderKind::SerpApi,
            None => ProviderKind::Serper,
        };

        Self {
            provider,
            serper,
            serp_api,
        }
    }

    /// Currently selected backend.
    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    /// Run a query and render the outcome, persisting any provider switch.
    ///
    /// Total over all credential configurations: always returns a non-empty
    /// string, never panics, never propagates an error.
    pub async fn search(&mut self, query: &str) -> String {
        let (outcome, provider) = self.dispatch(query).await;
        self.provider = provider;
        outcome.render()
    }

    /// Blocking variant of [`Self::search`] with identical semantics,
    /// including failover and provider persistence.
    ///
    /// Spins up a current-thread runtime per call; must not be invoked from
    /// inside an async context.
    pub fn search_blocking(&mut self, query: &str) -> String {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                return SearchOutcome::Failed(SearchError::Transport {
                    provider: self.provider,
                    reason: e.to_string(),
                })
                .render();
            }
        };

        runtime.block_on(self.search(query))
    }

    /// Answer a query without mutating the tool.
    ///
    /// Returns the outcome together with the backend that ended up serving
    /// the call, so the caller decides whether to persist a switch. Fallback
    /// happens at most once per call.
    pub async fn dispatch(&self, query: &str) -> (SearchOutcome, ProviderKind) {
        match self.provider {
            ProviderKind::Serper => match &self.serper {
                Some(primary) => match Self::run_provider(primary.as_ref(), query).await {
                    SearchOutcome::Failed(err) => match &self.serp_api {
                        Some(fallback) => {
                            warn!(error = %err, "Serper search failed, switching to SerpAPI");
                            (
                                Self::run_provider(fallback.as_ref(), query).await,
                                ProviderKind::SerpApi,
                            )
                        }
                        None => (SearchOutcome::Failed(err), ProviderKind::Serper),
                    },
                    outcome => (outcome, ProviderKind::Serper),
                },
                None => match &self.serp_api {
                    Some(fallback) => {
                        warn!("SERPER_API_KEY not configured, switching to SerpAPI");
                        (
                            Self::run_provider(fallback.as_ref(), query).await,
                            ProviderKind::SerpApi,
                        )
                    }
                    None => (
                        SearchOutcome::Failed(SearchError::MissingCredential {
                            provider: ProviderKind::Serper,
                        }),
                        ProviderKind::Serper,
                    ),
                },
            },
            ProviderKind::SerpApi => match &self.serp_api {
                // A live SerpApi failure does not fall back to Serper.
                Some(primary) => (
                    Self::run_provider(primary.as_ref(), query).await,
                    ProviderKind::SerpApi,
                ),
                None => match &self.serper {
                    Some(fallback) => {
                        warn!("SERPAPI_API_KEY not configured, switching to Serper");
                        (
                            Self::run_provider(fallback.as_ref(), query).await,
                            ProviderKind::Serper,
                        )
                    }
                    None => (
                        SearchOutcome::Failed(SearchError::MissingCredential {
                            provider: ProviderKind::SerpApi,
                        }),
                        ProviderKind::SerpApi,
                    ),
                },
            },
        }
    }

    async fn run_provider(provider: &dyn SearchProvider, query: &str) -> SearchOutcome {
        debug!(provider = %provider.kind(), query, "dispatching web search");
        match provider.search(query).await {
            Ok(hits) => SearchOutcome::from_hits(hits),
            Err(err) => SearchOutcome::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockProvider;

    fn boxed(provider: MockProvider) -> Option<Box<dyn SearchProvider>> {
        Some(Box::new(provider))
    }

    #[test]
    fn test_explicit_preference_wins() {
        let tool = WebSearchTool::with_credentials(
            Credentials::new(Some("a".to_string()), Some("b".to_string())),
            Some(ProviderKind::SerpApi),
        );
        assert_eq!(tool.provider(), ProviderKind::SerpApi);
    }

    #[test]
    fn test_serpapi_selected_when_only_its_key_exists() {
        let tool =
            WebSearchTool::with_credentials(Credentials::new(None, Some("b".to_string())), None);
        assert_eq!(tool.provider(), ProviderKind::SerpApi);
    }

    #[test]
    fn test_serper_is_default_even_without_key() {
        let tool = WebSearchTool::with_credentials(Credentials::default(), None);
        assert_eq!(tool.provider(), ProviderKind::Serper);

        let tool = WebSearchTool::with_credentials(
            Credentials::new(Some("a".to_string()), Some("b".to_string())),
            None,
        );
        assert_eq!(tool.provider(), ProviderKind::Serper);
    }

    #[tokio::test]
    async fn test_no_credentials_returns_serper_missing_key_message() {
        let mut tool = WebSearchTool::with_credentials(Credentials::default(), None);

        let result = tool.search("anything").await;
        assert_eq!(
            result,
            "Error: SERPER_API_KEY not found in environment variables. \
             Please add your Serper API key to the .env file."
        );
        assert_eq!(tool.provider(), ProviderKind::Serper);
    }

    #[tokio::test]
    async fn test_missing_serper_key_delegates_to_serpapi() {
        let mut tool = WebSearchTool::with_providers(
            None,
            boxed(MockProvider::with_hits(ProviderKind::SerpApi, 2)),
            None,
        );
        // Only the SerpApi slot is filled, so it was selected up front.
        assert_eq!(tool.provider(), ProviderKind::SerpApi);

        let result = tool.search("rust").await;
        assert!(result.contains("SerpAPI result 1"));
    }

    #[tokio::test]
    async fn test_serper_failure_falls_back_to_serpapi() {
        let mut tool = WebSearchTool::with_providers(
            boxed(MockProvider::failing(ProviderKind::Serper, "boom")),
            boxed(MockProvider::with_hits(ProviderKind::SerpApi, 2)),
            None,
        );
        assert_eq!(tool.provider(), ProviderKind::Serper);

        let result = tool.search("rust").await;
        let expected = SearchOutcome::from_hits(
            MockProvider::with_hits(ProviderKind::SerpApi, 2)
                .search("rust")
                .await
                .unwrap(),
        )
        .render();
        assert_eq!(result, expected);
        assert_eq!(tool.provider(), ProviderKind::SerpApi);
    }

    #[tokio::test]
    async fn test_serper_failure_without_serpapi_returns_raw_error() {
        let mut tool = WebSearchTool::with_providers(
            boxed(MockProvider::failing(ProviderKind::Serper, "boom")),
            None,
            None,
        );

        let result = tool.search("rust").await;
        assert_eq!(result, "Error performing Serper API web search: boom");
        assert_eq!(tool.provider(), ProviderKind::Serper);
    }

    #[tokio::test]
    async fn test_live_serpapi_failure_does_not_fall_back() {
        let mut tool = WebSearchTool::with_providers(
            boxed(MockProvider::with_hits(ProviderKind::Serper, 2)),
            boxed(MockProvider::failing(ProviderKind::SerpApi, "down")),
            Some(ProviderKind::SerpApi),
        );

        let result = tool.search("rust").await;
        assert_eq!(result, "Error performing SerpAPI web search: down");
        assert_eq!(tool.provider(), ProviderKind::SerpApi);
    }

    #[tokio::test]
    async fn test_missing_serpapi_key_switches_to_serper() {
        let mut tool = WebSearchTool::with_providers(
            boxed(MockProvider::with_hits(ProviderKind::Serper, 1)),
            None,
            Some(ProviderKind::SerpApi),
        );

        let result = tool.search("rust").await;
        assert!(result.contains("Serper API result 1"));
        assert_eq!(tool.provider(), ProviderKind::Serper);
    }

    #[tokio::test]
    async fn test_missing_serpapi_key_without_serper_returns_message() {
        let mut tool = WebSearchTool::with_providers(None, None, Some(ProviderKind::SerpApi));

        let result = tool.search("rust").await;
        assert_eq!(
            result,
            "Error: SERPAPI_API_KEY not found in environment variables. \
             Please add your SerpAPI key to the .env file."
        );
    }

    #[tokio::test]
    async fn test_empty_hits_render_no_results_literal() {
        let mut tool = WebSearchTool::with_providers(
            boxed(MockProvider::empty(ProviderKind::Serper)),
            boxed(MockProvider::with_hits(ProviderKind::SerpApi, 3)),
            None,
        );

        // An empty answer is a successful call, so no failover happens.
        let result = tool.search("rust").await;
        assert_eq!(result, "No results found for the query.");
        assert_eq!(tool.provider(), ProviderKind::Serper);
    }

    #[tokio::test]
    async fn test_dispatch_does_not_mutate_selection() {
        let tool = WebSearchTool::with_providers(
            boxed(MockProvider::failing(ProviderKind::Serper, "boom")),
            boxed(MockProvider::with_hits(ProviderKind::SerpApi, 1)),
            None,
        );

        let (outcome, provider) = tool.dispatch("rust").await;
        assert!(!outcome.is_failure());
        assert_eq!(provider, ProviderKind::SerpApi);
        assert_eq!(tool.provider(), ProviderKind::Serper);
    }

    #[test]
    fn test_search_blocking_matches_async_semantics() {
        let mut tool = WebSearchTool::with_providers(
            boxed(MockProvider::failing(ProviderKind::Serper, "boom")),
            boxed(MockProvider::with_hits(ProviderKind::SerpApi, 1)),
            None,
        );

        let result = tool.search_blocking("rust");
        assert!(result.contains("SerpAPI result 1"));
        assert_eq!(tool.provider(), ProviderKind::SerpApi);
    }

    #[test]
    fn test_search_blocking_without_credentials_never_panics() {
        let mut tool = WebSearchTool::with_credentials(Credentials::default(), None);
        let result = tool.search_blocking("rust");
        assert!(!result.is_empty());
    }
}
