use crate::common;
use ecopulse_rs::{Momentum, PipelineStatus, company_search_meta};
use httpmock::Method::GET;

#[tokio::test]
async fn synthetic_bundle_seeds_the_search_ui() {
    let meta = company_search_meta(&common::synthetic_client()).await;
    assert_eq!(meta.filters.first().map(String::as_str), Some("All"));
    assert!(!meta.suggestions.is_empty());
    assert!(!meta.trending_ideas.is_empty());
    assert!(!meta.watchlist_pipelines.is_empty());
}

#[tokio::test]
async fn live_bundle_derives_from_sector_and_active_feeds() {
    let server = common::setup_server();
    let sectors = common::mock_json(&server, "sectors-performance", "sectors_performance", "all");
    let actives = common::mock_json(&server, "stock_market/actives", "stock_market_actives", "all");

    let meta = company_search_meta(&common::live_client(&server)).await;
    sectors.assert();
    actives.assert();

    assert_eq!(
        meta.filters,
        vec!["All", "Basic Materials", "Technology", "Utilities", "Energy"]
    );

    assert_eq!(meta.suggestions.len(), 5);
    assert_eq!(meta.suggestions[0].ticker, "NVDA");

    let nvda = &meta.trending_ideas[0];
    assert_eq!(nvda.momentum, Momentum::Bullish);
    assert_eq!(nvda.change_percentage, 3.41);
    assert_eq!(nvda.context, "Volume 312.5M");
    assert_eq!(meta.trending_ideas[1].momentum, Momentum::Bearish);
    assert_eq!(meta.trending_ideas[2].momentum, Momentum::Neutral);

    let materials = &meta.watchlist_pipelines[0];
    assert_eq!(materials.name, "Basic Materials");
    assert_eq!(materials.companies, 10);
    assert_eq!(materials.status, PipelineStatus::ActionRequired);

    let utilities = &meta.watchlist_pipelines[2];
    assert_eq!(utilities.companies, 18);
    assert_eq!(utilities.status, PipelineStatus::Monitoring);

    let energy = &meta.watchlist_pipelines[3];
    assert_eq!(energy.companies, 6);
    assert_eq!(energy.status.to_string(), "Action required");
}

#[tokio::test]
async fn one_failing_feed_falls_back_to_synthetic_bundle() {
    let server = common::setup_server();
    let _sectors = common::mock_json(&server, "sectors-performance", "sectors_performance", "all");
    let actives = server.mock(|when, then| {
        when.method(GET).path("/api/v3/stock_market/actives");
        then.status(429);
    });

    let meta = company_search_meta(&common::live_client(&server)).await;
    actives.assert();
    assert_eq!(meta, common::synthetic_client().synthetic().search_meta());
}

#[tokio::test]
async fn malformed_feed_falls_back_to_synthetic_bundle() {
    let server = common::setup_server();
    let _actives = common::mock_json(&server, "stock_market/actives", "stock_market_actives", "all");
    let sectors = server.mock(|when, then| {
        when.method(GET).path("/api/v3/sectors-performance");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"sectors": [{"name": "Energy"}]}"#);
    });

    let meta = company_search_meta(&common::live_client(&server)).await;
    sectors.assert();
    assert_eq!(meta, common::synthetic_client().synthetic().search_meta());
}
