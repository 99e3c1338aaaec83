//! CLI command implementations

use clap::Subcommand;
use tracing::debug;
use webscout_core::{ProviderKind, WebSearchTool};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search the web for a query
    Search {
        /// Query text
        query: String,
        /// Backend to use ("serper" or "serpapi"); defaults to key-based selection
        #[arg(short, long)]
        provider: Option<ProviderKind>,
    },
}

/// Handle the CLI command
pub async fn handle_command(command: Commands) {
    match command {
        Commands::Search { query, provider } => run_search(query, provider).await,
    }
}

/// Run a web search and print the rendered outcome.
///
/// The tool resolves errors to messages itself, so this always prints
/// something useful and never exits non-zero on a failed search.
async fn run_search(query: String, provider: Option<ProviderKind>) {
    let mut tool = WebSearchTool::from_env(provider);
    debug!(provider = %tool.provider(), "resolved search backend");

    println!("Searching via {}...", tool.provider().display_name());
    println!("{:-<60}", "");

    let result = tool.search(&query).await;
    println!("{result}");
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parses_search_with_provider() {
        let harness =
            Harness::try_parse_from(["webscout", "search", "rust", "--provider", "serpapi"])
                .unwrap();
        let Commands::Search { query, provider } = harness.command;
        assert_eq!(query, "rust");
        assert_eq!(provider, Some(ProviderKind::SerpApi));
    }

    #[test]
    fn test_rejects_unknown_provider() {
        let result = Harness::try_parse_from(["webscout", "search", "rust", "--provider", "bing"]);
        assert!(result.is_err());
    }
}
