//! Credential configuration for search backends.
//!
//! Keys are read from the process environment exactly once, at construction.
//! Nothing in the crate reads the environment after that point, so tests and
//! embedders can supply credentials explicitly.

use std::env;

use crate::types::ProviderKind;

/// API keys for the two search backends.
///
/// Presence or absence of each key drives provider selection and failover in
/// [`crate::tool::WebSearchTool`].
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Serper API key, from `SERPER_API_KEY`.
    pub serper_api_key: Option<String>,
    /// SerpApi key, from `SERPAPI_API_KEY`.
    pub serpapi_api_key: Option<String>,
}

impl Credentials {
    /// Read both keys from the process environment.
    ///
    /// Blank values are treated as absent.
    pub fn from_env() -> Self {
        Self {
            serper_api_key: read_key(ProviderKind::Serper),
            serpapi_api_key: read_key(ProviderKind::SerpApi),
        }
    }

    /// Build credentials from explicit values.
    pub fn new(serper_api_key: Option<String>, serpapi_api_key: Option<String>) -> Self {
        Self {
            serper_api_key,
            serpapi_api_key,
        }
    }

    /// Key for the given backend, if configured.
    pub fn key_for(&self, provider: ProviderKind) -> Option<&str> {
        match provider {
            ProviderKind::Serper => self.serper_api_key.as_deref(),
            ProviderKind::SerpApi => self.serpapi_api_key.as_deref(),
        }
    }

    /// Whether the given backend has a key configured.
    pub fn has(&self, provider: ProviderKind) -> bool {
        self.key_for(provider).is_some()
    }
}

fn read_key(provider: ProviderKind) -> Option<String> {
    env::var(provider.env_key())
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_lookup() {
        let credentials = Credentials::new(Some("serper-key".to_string()), None);

        assert_eq!(credentials.key_for(ProviderKind::Serper), Some("serper-key"));
        assert_eq!(credentials.key_for(ProviderKind::SerpApi), None);
        assert!(credentials.has(ProviderKind::Serper));
        assert!(!credentials.has(ProviderKind::SerpApi));
    }

    #[test]
    fn test_default_is_empty() {
        let credentials = Credentials::default();
        assert!(!credentials.has(ProviderKind::Serper));
        assert!(!credentials.has(ProviderKind::SerpApi));
    }
}
