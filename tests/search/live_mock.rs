use crate::common;
use ecopulse_rs::{CacheMode, DataMode, EpClient, LatencyProfile, SearchBuilder, search_companies};
use httpmock::Method::GET;
use std::time::Duration;

#[tokio::test]
async fn live_search_maps_provider_rows() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/search")
            .query_param("query", "Apple")
            .query_param("limit", "10")
            .query_param("apikey", common::API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("search", "apple", "json"));
    });

    let client = common::live_client(&server);
    assert_eq!(client.mode(), DataMode::Live);

    let hits = search_companies(&client, "Apple").await;
    mock.assert();

    // the row without a symbol is dropped
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].ticker, "AAPL");
    assert_eq!(hits[0].id, "AAPL");
    assert_eq!(hits[0].industry, "NASDAQ");
    assert_eq!(hits[1].name, "Apple Hospitality REIT, Inc.");
}

#[tokio::test]
async fn live_search_respects_limit_override() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/search")
            .query_param("limit", "3");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("search", "apple", "json"));
    });

    let client = common::live_client(&server);
    let hits = SearchBuilder::new(&client, "Apple").limit(3).fetch().await;
    mock.assert();
    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn live_search_uses_cache_when_enabled() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v3/search");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("search", "apple", "json"));
    });

    let client = EpClient::builder()
        .api_key(common::API_KEY)
        .base_url(common::api_base(&server))
        .latency(LatencyProfile::none())
        .cache_ttl(Duration::from_secs(300))
        .build()
        .unwrap();

    let first = search_companies(&client, "Apple").await;
    let second = search_companies(&client, "Apple").await;
    assert_eq!(first, second);
    mock.assert_calls(1);

    let _ = SearchBuilder::new(&client, "Apple")
        .cache_mode(CacheMode::Refresh)
        .fetch()
        .await;
    mock.assert_calls(2);
}
