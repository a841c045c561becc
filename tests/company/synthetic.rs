use crate::common;
use ecopulse_rs::company_details;

#[tokio::test]
async fn synthetic_details_for_roster_company() {
    let client = common::synthetic_client();
    let d = company_details(&client, "AAPL").await.unwrap();

    assert_eq!(d.company.ticker, "AAPL");
    assert_eq!(d.company.name, "Apple Inc.");
    assert_eq!(
        d.company.logo_url.as_deref(),
        Some("https://logo.clearbit.com/apple.com")
    );
    assert!(d.esg_score.in_bounds());
    assert!(d.market_cap.is_some());
    assert!(!d.description.is_empty());
}

#[tokio::test]
async fn synthetic_details_are_stable_per_client() {
    let client = common::synthetic_client();
    let a = company_details(&client, "msft").await.unwrap();
    let b = company_details(&client, "MSFT").await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn private_company_is_identified_by_id() {
    let client = common::synthetic_client();
    let d = company_details(&client, "Private").await.unwrap();
    assert_eq!(d.company.name, "Patagonia");
    assert_eq!(d.company.identity(), d.company.id);
}

#[tokio::test]
async fn unknown_or_empty_ticker_is_none() {
    let client = common::synthetic_client();
    assert!(company_details(&client, "ZZZZ").await.is_none());
    assert!(company_details(&client, "").await.is_none());
    assert!(company_details(&client, "   ").await.is_none());
}
