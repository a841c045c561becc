use crate::common;
use ecopulse_rs::{ScenarioLever, ScenarioState, Ticker, simulate};

#[tokio::test]
async fn dashboard_bundles_everything_for_a_ticker() {
    let client = common::synthetic_client();
    let dash = Ticker::new(&client, "NEE").dashboard().await.unwrap();

    assert_eq!(dash.details.company.name, "NextEra Energy");
    assert_eq!(dash.history.len(), 13);
    assert_eq!(dash.supply_chain.len(), 7);
    assert!((0.0..=100.0).contains(&dash.outlook.next_score));
    assert!(dash.outlook.risk_factors.len() >= 2);
}

#[tokio::test]
async fn dashboard_is_none_for_unknown_ticker() {
    let client = common::synthetic_client();
    assert!(Ticker::new(&client, "NOPE").dashboard().await.is_none());
}

#[tokio::test]
async fn scenario_from_ticker_leaves_details_untouched() {
    let client = common::synthetic_client();
    let ticker = Ticker::new(&client, "UL");
    let baseline = ticker.details().await.unwrap().esg_score;

    let state = ScenarioState::default()
        .with(ScenarioLever::CarbonPrice, 200.0)
        .with(ScenarioLever::Regulation, 100.0)
        .with(ScenarioLever::SupplyShock, 0.0);
    let impact = ticker.scenario(&state).await.unwrap();

    assert_eq!(impact.total_delta, 12.0);
    assert_eq!(impact, simulate(&baseline, &state));
    assert_eq!(ticker.details().await.unwrap().esg_score, baseline);
    assert!(impact.adjusted.in_bounds());
}
