use crate::common;
use ecopulse_rs::company_details;

#[tokio::test]
async fn live_details_join_profile_and_quote() {
    let server = common::setup_server();
    let profile = common::mock_json(&server, "profile/AAPL", "profile", "AAPL");
    let quote = common::mock_json(&server, "quote/AAPL", "quote", "AAPL");

    let client = common::live_client(&server);
    let d = company_details(&client, "AAPL").await.unwrap();

    profile.assert();
    quote.assert();

    assert_eq!(d.company.ticker, "AAPL");
    assert_eq!(d.company.industry, "Consumer Electronics");
    assert_eq!(
        d.company.logo_url.as_deref(),
        Some("https://images.financialmodelingprep.com/symbol/AAPL.png")
    );
    assert_eq!(d.headquarters.as_deref(), Some("Cupertino, US"));
    assert_eq!(d.market_cap, Some(3_459_227_904_000.0));
    assert!(d.description.starts_with("Apple Inc. designs"));

    // ESG scores are generated from the company name, deterministically per client
    assert_eq!(d.esg_score, client.synthetic().esg_score("Apple Inc."));
    assert!(d.esg_score.in_bounds());
}
