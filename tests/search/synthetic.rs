use crate::common;
use ecopulse_rs::{DataMode, EpClient, LatencyProfile, SearchBuilder, search_companies};
use std::time::{Duration, Instant};

#[tokio::test]
async fn synthetic_search_finds_apple() {
    let client = common::synthetic_client();
    assert_eq!(client.mode(), DataMode::Synthetic);

    let hits = search_companies(&client, "Apple").await;
    assert!(!hits.is_empty());
    assert!(hits.iter().any(|c| c.ticker == "AAPL"));
}

#[tokio::test]
async fn synthetic_search_matches_industry_and_ticker() {
    let client = common::synthetic_client();

    let tech = search_companies(&client, "technology").await;
    let tickers: Vec<_> = tech.iter().map(|c| c.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["AAPL", "MSFT", "CRM"]);

    let by_ticker = search_companies(&client, "  cmg ").await;
    assert_eq!(by_ticker.len(), 1);
    assert_eq!(by_ticker[0].name, "Chipotle Mexican Grill");

    assert!(search_companies(&client, "definitely not listed").await.is_empty());
}

#[tokio::test]
async fn synthetic_search_is_stable_per_client() {
    let client = common::synthetic_client();
    let a = SearchBuilder::new(&client, "tesla").fetch().await;
    let b = SearchBuilder::new(&client, "TESLA").fetch().await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn empty_query_skips_latency() {
    let client = EpClient::builder()
        .latency(LatencyProfile::uniform(Duration::from_secs(5)))
        .build()
        .unwrap();
    let start = Instant::now();
    assert!(search_companies(&client, "").await.is_empty());
    assert!(search_companies(&client, " \t ").await.is_empty());
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn synthetic_search_waits_for_simulated_latency() {
    let client = EpClient::builder()
        .latency(LatencyProfile::uniform(Duration::from_millis(120)))
        .build()
        .unwrap();
    let start = Instant::now();
    let hits = search_companies(&client, "energy").await;
    assert!(start.elapsed() >= Duration::from_millis(120));
    assert!(hits.iter().any(|c| c.ticker == "NEE"));
}
