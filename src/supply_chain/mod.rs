//! Supply-chain exposure by country.
//!
//! No provider offers this data; both modes generate it.

use crate::core::client::Op;
use crate::core::{EpClient, RiskLevel, SupplyChainData};

/// Loads one exposure record per country.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client)))]
pub async fn supply_chain(client: &EpClient, ticker: &str) -> Vec<SupplyChainData> {
    client.synthetic_delay(Op::SupplyChain).await;
    client.synthetic().supply_chain(ticker)
}

/// Total emissions across all countries, in tons of CO2 equivalent.
pub fn total_emission(rows: &[SupplyChainData]) -> u64 {
    rows.iter().map(|r| u64::from(r.emission)).sum()
}

/// Countries at the given risk level, in input order.
pub fn countries_at(rows: &[SupplyChainData], level: RiskLevel) -> Vec<&str> {
    rows.iter()
        .filter(|r| r.risk_level == level)
        .map(|r| r.country.as_str())
        .collect()
}
