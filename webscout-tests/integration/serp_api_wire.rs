//! Wire-level tests for the SerpApi provider through the full tool.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use webscout_core::{SerpApiProvider, WebSearchTool};

use crate::stub_server;

fn organic_results(count: usize) -> Value {
    let items: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "title": format!("Result {i}"),
                "link": format!("https://example.com/{i}"),
                "snippet": format!("Snippet {i}")
            })
        })
        .collect();
    json!({ "organic_results": items })
}

fn tool_against(endpoint: String) -> WebSearchTool {
    let provider = SerpApiProvider::with_config(endpoint, "test-key".to_string());
    WebSearchTool::with_providers(None, Some(Box::new(provider)), None)
}

#[tokio::test]
async fn test_seven_results_render_exactly_five_blocks() {
    let router = Router::new().route("/search", get(|| async { Json(organic_results(7)) }));
    let addr = stub_server::spawn(router).await;

    let mut tool = tool_against(stub_server::endpoint(addr));
    let result = tool.search("rust async runtimes").await;

    let expected = (1..=5)
        .map(|i| {
            format!(
                "{i}. Result {i}\n   URL: https://example.com/{i}\n   Description: Snippet {i}\n"
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(result, expected);
}

#[tokio::test]
async fn test_empty_results_return_no_results_literal() {
    let router = Router::new().route("/search", get(|| async { Json(organic_results(0)) }));
    let addr = stub_server::spawn(router).await;

    let mut tool = tool_against(stub_server::endpoint(addr));
    let result = tool.search("qwzxvbnm").await;

    assert_eq!(result, "No results found for the query.");
}

#[tokio::test]
async fn test_503_embeds_status_and_body() {
    let router = Router::new().route(
        "/search",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "upstream exploded") }),
    );
    let addr = stub_server::spawn(router).await;

    let mut tool = tool_against(stub_server::endpoint(addr));
    let result = tool.search("rust").await;

    assert_eq!(
        result,
        "Error performing SerpAPI web search: 503 - upstream exploded"
    );
}

#[tokio::test]
async fn test_malformed_body_reports_transport_error() {
    let router = Router::new().route("/search", get(|| async { "this is not json" }));
    let addr = stub_server::spawn(router).await;

    let mut tool = tool_against(stub_server::endpoint(addr));
    let result = tool.search("rust").await;

    assert!(result.starts_with("Error performing SerpAPI web search:"));
}

#[tokio::test]
async fn test_missing_fields_render_placeholders() {
    let router = Router::new().route(
        "/search",
        get(|| async { Json(json!({ "organic_results": [{}] })) }),
    );
    let addr = stub_server::spawn(router).await;

    let mut tool = tool_against(stub_server::endpoint(addr));
    let result = tool.search("rust").await;

    assert_eq!(
        result,
        "1. No title\n   URL: No link\n   Description: No description\n"
    );
}

#[tokio::test]
async fn test_request_carries_key_engine_and_query_params() {
    let router = Router::new().route(
        "/search",
        get(
            |axum::extract::Query(params): axum::extract::Query<HashMap<String, String>>| async move {
                let authorized = params.get("api_key").map(String::as_str) == Some("test-key")
                    && params.get("engine").map(String::as_str) == Some("google")
                    && params.get("q").map(String::as_str) == Some("rust");
                if authorized {
                    Json(organic_results(1)).into_response()
                } else {
                    (StatusCode::UNAUTHORIZED, "bad request parameters").into_response()
                }
            },
        ),
    );
    let addr = stub_server::spawn(router).await;

    let mut tool = tool_against(stub_server::endpoint(addr));
    let result = tool.search("rust").await;

    assert!(result.starts_with("1. Result 1\n"));
}
