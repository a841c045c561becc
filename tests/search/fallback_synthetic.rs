use crate::common;
use ecopulse_rs::search_companies;
use httpmock::Method::GET;

#[tokio::test]
async fn transport_failure_falls_back_to_synthetic() {
    let expected = search_companies(&common::synthetic_client(), "Apple").await;

    let client = common::unreachable_client();
    let hits = search_companies(&client, "Apple").await;

    assert!(hits.iter().any(|c| c.ticker == "AAPL"));
    assert_eq!(hits, expected);
}

#[tokio::test]
async fn server_error_falls_back_to_synthetic() {
    let server = common::setup_server();
    let mock = common::mock_everything_fails(&server);

    let client = common::live_client(&server);
    let hits = search_companies(&client, "Apple").await;

    mock.assert_calls(1);
    assert_eq!(hits, search_companies(&common::synthetic_client(), "Apple").await);
}

#[tokio::test]
async fn empty_result_array_falls_back_to_synthetic() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v3/search");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let hits = search_companies(&common::live_client(&server), "Tesla").await;
    mock.assert();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].ticker, "TSLA");
}

#[tokio::test]
async fn malformed_payload_falls_back_to_synthetic() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v3/search");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"Error Message": "Invalid API KEY."}"#);
    });

    let hits = search_companies(&common::live_client(&server), "NextEra").await;
    mock.assert();
    assert_eq!(hits[0].ticker, "NEE");
}

#[tokio::test]
async fn empty_query_never_reaches_the_provider() {
    let server = common::setup_server();
    let mock = common::mock_everything_fails(&server);

    let client = common::live_client(&server);
    assert!(search_companies(&client, "").await.is_empty());
    assert!(search_companies(&client, "   ").await.is_empty());
    mock.assert_calls(0);
}
