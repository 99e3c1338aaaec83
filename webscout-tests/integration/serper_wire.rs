//! Wire-level tests for the Serper provider through the full tool.

use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use webscout_core::{ProviderKind, SerperProvider, WebSearchTool};

use crate::stub_server;

fn tool_against(endpoint: String) -> WebSearchTool {
    let provider = SerperProvider::with_config(endpoint, "serper-key".to_string());
    WebSearchTool::with_providers(Some(Box::new(provider)), None, None)
}

#[tokio::test]
async fn test_api_key_sent_in_header() {
    let router = Router::new().route(
        "/search",
        get(|headers: HeaderMap| async move {
            let authorized = headers
                .get("x-api-key")
                .and_then(|value| value.to_str().ok())
                == Some("serper-key");
            if authorized {
                Json(json!({
                    "organic": [
                        {"title": "Serper hit", "link": "https://serper.example", "snippet": "via header auth"}
                    ]
                }))
                .into_response()
            } else {
                (StatusCode::FORBIDDEN, "missing key").into_response()
            }
        }),
    );
    let addr = stub_server::spawn(router).await;

    let mut tool = tool_against(stub_server::endpoint(addr));
    let result = tool.search("rust").await;

    assert_eq!(
        result,
        "1. Serper hit\n   URL: https://serper.example\n   Description: via header auth\n"
    );
    assert_eq!(tool.provider(), ProviderKind::Serper);
}

#[tokio::test]
async fn test_upstream_error_without_fallback_surfaces_status() {
    let router = Router::new().route(
        "/search",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "quota exceeded") }),
    );
    let addr = stub_server::spawn(router).await;

    let mut tool = tool_against(stub_server::endpoint(addr));
    let result = tool.search("rust").await;

    assert_eq!(
        result,
        "Error performing Serper API web search: 500 - quota exceeded"
    );
    assert_eq!(tool.provider(), ProviderKind::Serper);
}

#[tokio::test]
async fn test_empty_organic_list_is_not_a_failure() {
    let router = Router::new().route("/search", get(|| async { Json(json!({"organic": []})) }));
    let addr = stub_server::spawn(router).await;

    let mut tool = tool_against(stub_server::endpoint(addr));
    let result = tool.search("qwzxvbnm").await;

    assert_eq!(result, "No results found for the query.");
}
