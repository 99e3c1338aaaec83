//! End-to-end failover behavior across both providers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use webscout_core::{ProviderKind, SerpApiProvider, SerperProvider, WebSearchTool};

use crate::stub_server;

/// Stub that counts hits and answers with one named result.
fn counting_router(name: &'static str, counter: Arc<AtomicUsize>) -> Router {
    Router::new().route(
        "/search",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({
                    "organic": [
                        {"title": name, "link": "https://stub.example", "snippet": "stub"}
                    ],
                    "organic_results": [
                        {"title": name, "link": "https://stub.example", "snippet": "stub"}
                    ]
                }))
            }
        }),
    )
}

#[tokio::test]
async fn test_serper_failure_fails_over_to_serpapi() {
    let serper_router = Router::new().route(
        "/search",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "serper down") }),
    );
    let serper_addr = stub_server::spawn(serper_router).await;

    let serpapi_hits = Arc::new(AtomicUsize::new(0));
    let serpapi_addr =
        stub_server::spawn(counting_router("SerpApi rescue", serpapi_hits.clone())).await;

    let mut tool = WebSearchTool::with_providers(
        Some(Box::new(SerperProvider::with_config(
            stub_server::endpoint(serper_addr),
            "serper-key".to_string(),
        ))),
        Some(Box::new(SerpApiProvider::with_config(
            stub_server::endpoint(serpapi_addr),
            "serpapi-key".to_string(),
        ))),
        None,
    );
    assert_eq!(tool.provider(), ProviderKind::Serper);

    let result = tool.search("rust").await;

    assert_eq!(
        result,
        "1. SerpApi rescue\n   URL: https://stub.example\n   Description: stub\n"
    );
    assert_eq!(serpapi_hits.load(Ordering::SeqCst), 1);
    assert_eq!(tool.provider(), ProviderKind::SerpApi);
}

#[tokio::test]
async fn test_healthy_serper_never_touches_serpapi() {
    let serper_hits = Arc::new(AtomicUsize::new(0));
    let serper_addr =
        stub_server::spawn(counting_router("Serper answer", serper_hits.clone())).await;

    let serpapi_hits = Arc::new(AtomicUsize::new(0));
    let serpapi_addr =
        stub_server::spawn(counting_router("unused", serpapi_hits.clone())).await;

    let mut tool = WebSearchTool::with_providers(
        Some(Box::new(SerperProvider::with_config(
            stub_server::endpoint(serper_addr),
            "serper-key".to_string(),
        ))),
        Some(Box::new(SerpApiProvider::with_config(
            stub_server::endpoint(serpapi_addr),
            "serpapi-key".to_string(),
        ))),
        None,
    );

    let result = tool.search("rust").await;

    assert!(result.contains("Serper answer"));
    assert_eq!(serper_hits.load(Ordering::SeqCst), 1);
    assert_eq!(serpapi_hits.load(Ordering::SeqCst), 0);
    assert_eq!(tool.provider(), ProviderKind::Serper);
}

#[tokio::test]
async fn test_live_serpapi_failure_does_not_retry_serper() {
    let serper_hits = Arc::new(AtomicUsize::new(0));
    let serper_addr =
        stub_server::spawn(counting_router("unused", serper_hits.clone())).await;

    let serpapi_router = Router::new().route(
        "/search",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "serpapi melting") }),
    );
    let serpapi_addr = stub_server::spawn(serpapi_router).await;

    let mut tool = WebSearchTool::with_providers(
        Some(Box::new(SerperProvider::with_config(
            stub_server::endpoint(serper_addr),
            "serper-key".to_string(),
        ))),
        Some(Box::new(SerpApiProvider::with_config(
            stub_server::endpoint(serpapi_addr),
            "serpapi-key".to_string(),
        ))),
        Some(ProviderKind::SerpApi),
    );

    let result = tool.search("rust").await;

    assert_eq!(
        result,
        "Error performing SerpAPI web search: 503 - serpapi melting"
    );
    assert_eq!(serper_hits.load(Ordering::SeqCst), 0);
    assert_eq!(tool.provider(), ProviderKind::SerpApi);
}

#[tokio::test]
async fn test_provider_switch_persists_for_subsequent_calls() {
    let serper_router = Router::new().route(
        "/search",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "serper down") }),
    );
    let serper_addr = stub_server::spawn(serper_router).await;

    let serpapi_hits = Arc::new(AtomicUsize::new(0));
    let serpapi_addr =
        stub_server::spawn(counting_router("SerpApi answer", serpapi_hits.clone())).await;

    let mut tool = WebSearchTool::with_providers(
        Some(Box::new(SerperProvider::with_config(
            stub_server::endpoint(serper_addr),
            "serper-key".to_string(),
        ))),
        Some(Box::new(SerpApiProvider::with_config(
            stub_server::endpoint(serpapi_addr),
            "serpapi-key".to_string(),
        ))),
        None,
    );

    let first = tool.search("rust").await;
    assert!(first.contains("SerpApi answer"));
    assert_eq!(tool.provider(), ProviderKind::SerpApi);

    // Second call goes straight to SerpApi without probing Serper again.
    let second = tool.search("tokio").await;
    assert!(second.contains("SerpApi answer"));
    assert_eq!(serpapi_hits.load(Ordering::SeqCst), 2);
}
