use crate::common;
use ecopulse_rs::company_details;
use httpmock::Method::GET;

#[tokio::test]
async fn transport_failure_falls_back_to_synthetic() {
    let expected = company_details(&common::synthetic_client(), "AAPL").await;

    let d = company_details(&common::unreachable_client(), "AAPL").await;
    assert_eq!(d.as_ref().map(|d| d.company.ticker.as_str()), Some("AAPL"));
    assert_eq!(d, expected);
}

#[tokio::test]
async fn quote_failure_alone_triggers_fallback() {
    let server = common::setup_server();
    let profile = common::mock_json(&server, "profile/AAPL", "profile", "AAPL");
    let quote = server.mock(|when, then| {
        when.method(GET).path("/api/v3/quote/AAPL");
        then.status(503);
    });

    let d = company_details(&common::live_client(&server), "AAPL").await.unwrap();
    profile.assert();
    quote.assert();

    // synthetic roster data, not the provider profile
    assert_eq!(d.company.industry, "Technology");
    assert_eq!(d.headquarters.as_deref(), Some("Cupertino, United States"));
}

#[tokio::test]
async fn empty_profile_falls_back_and_may_yield_none() {
    let server = common::setup_server();
    let profile = server.mock(|when, then| {
        when.method(GET).path("/api/v3/profile/ACME");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });
    let quote = server.mock(|when, then| {
        when.method(GET).path("/api/v3/quote/ACME");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let d = company_details(&common::live_client(&server), "ACME").await;
    profile.assert();
    quote.assert();
    assert!(d.is_none());
}

#[tokio::test]
async fn empty_ticker_never_reaches_the_provider() {
    let server = common::setup_server();
    let mock = common::mock_everything_fails(&server);

    assert!(company_details(&common::live_client(&server), "").await.is_none());
    mock.assert_calls(0);
}
