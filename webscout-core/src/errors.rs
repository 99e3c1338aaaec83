//! Error types for web search operations.

use thiserror::Error;

use crate::types::ProviderKind;

/// Errors that can occur while answering a search query.
///
/// Every variant's `Display` output is the exact message callers of the
/// string surface receive; none of these escapes `WebSearchTool::search`.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// The selected backend has no API key configured.
    #[error(
        "Error: {} not found in environment variables. Please add your {} key to the .env file.",
        .provider.env_key(),
        .provider.display_name()
    )]
    MissingCredential {
        /// Backend whose credential is absent
        provider: ProviderKind,
    },

    /// A provider name outside the supported set was given.
    #[error("Error: Unsupported API type '{name}'. Use 'serper' or 'serpapi'.")]
    UnsupportedProvider {
        /// The unrecognized provider name
        name: String,
    },

    /// The backend answered with a non-2xx status.
    #[error(
        "Error performing {} web search: {status} - {body}",
        .provider.display_name()
    )]
    Status {
        /// Backend that produced the response
        provider: ProviderKind,
        /// HTTP status code
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// The request or response decoding failed before a status was read.
    #[error("Error performing {} web search: {reason}", .provider.display_name())]
    Transport {
        /// Backend the request was addressed to
        provider: ProviderKind,
        /// Underlying failure description
        reason: String,
    },
}

impl SearchError {
    /// Backend this error is attributed to, when one applies.
    pub fn provider(&self) -> Option<ProviderKind> {
        match self {
            SearchError::MissingCredential { provider }
            | SearchError::Status { provider, .. }
            | SearchError::Transport { provider, .. } => Some(*provider),
            SearchError::UnsupportedProvider { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_messages() {
        let serper = SearchError::MissingCredential {
            provider: ProviderKind::Serper,
        };
        assert_eq!(
            serper.to_string(),
            "Error: SERPER_API_KEY not found in environment variables. \
             Please add your Serper API key to the .env file."
        );

        let serp_api = SearchError::MissingCredential {
            provider: ProviderKind::SerpApi,
        };
        assert_eq!(
            serp_api.to_string(),
            "Error: SERPAPI_API_KEY not found in environment variables. \
             Please add your SerpAPI key to the .env file."
        );
    }

    #[test]
    fn test_status_message_embeds_status_and_body() {
        let err = SearchError::Status {
            provider: ProviderKind::SerpApi,
            status: 503,
            body: "service unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error performing SerpAPI web search: 503 - service unavailable"
        );
    }

    #[test]
    fn test_transport_message_names_backend() {
        let err = SearchError::Transport {
            provider: ProviderKind::Serper,
            reason: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error performing Serper API web search: connection refused"
        );
    }

    #[test]
    fn test_provider_attribution() {
        let err = SearchError::UnsupportedProvider {
            name: "bing".to_string(),
        };
        assert_eq!(err.provider(), None);

        let err = SearchError::Transport {
            provider: ProviderKind::SerpApi,
            reason: "timeout".to_string(),
        };
        assert_eq!(err.provider(), Some(ProviderKind::SerpApi));
    }
}
