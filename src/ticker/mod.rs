//! Per-company convenience handle.

use crate::core::{CacheMode, CompanyDetails, EpClient, HistoricalDataPoint, SupplyChainData};
use crate::outlook::{Outlook, outlook};
use crate::scenario::{ScenarioImpact, ScenarioState, simulate};
use crate::{company, history, supply_chain};

/// A high-level interface for a single ticker, bundling every per-company operation.
///
/// # Example
///
/// ```no_run
/// # use ecopulse_rs::{EpClient, Ticker, ScenarioState};
/// # #[tokio::main]
/// # async fn main() {
/// let client = EpClient::default();
/// let ticker = Ticker::new(&client, "AAPL");
///
/// if let Some(details) = ticker.details().await {
///     let impact = ecopulse_rs::simulate(&details.esg_score, &ScenarioState::new(150.0, 70.0, 20.0));
///     println!("{} total moves by {}", details.company.name, impact.total_delta);
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ticker {
    client: EpClient,
    symbol: String,
    cache_mode: CacheMode,
}

/// Everything the company dashboard needs for one ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub details: CompanyDetails,
    pub history: Vec<HistoricalDataPoint>,
    pub supply_chain: Vec<SupplyChainData>,
    pub outlook: Outlook,
}

impl Ticker {
    /// Creates a new `Ticker` for a given symbol.
    pub fn new(client: &EpClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            cache_mode: CacheMode::Use,
        }
    }

    /// Sets the cache mode for all subsequent live calls made by this `Ticker`.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Company details, or `None` for an empty or unknown ticker.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(symbol = %self.symbol)))]
    pub async fn details(&self) -> Option<CompanyDetails> {
        company::load_details(&self.client, &self.symbol, self.cache_mode).await
    }

    /// Thirteen months of ESG history, oldest first.
    pub async fn history(&self) -> Vec<HistoricalDataPoint> {
        history::historical_data(&self.client, &self.symbol).await
    }

    /// Supply-chain exposure by country.
    pub async fn supply_chain(&self) -> Vec<SupplyChainData> {
        supply_chain::supply_chain(&self.client, &self.symbol).await
    }

    /// Applies a scenario to this company's current score.
    pub async fn scenario(&self, state: &ScenarioState) -> Option<ScenarioImpact> {
        let details = self.details().await?;
        Some(simulate(&details.esg_score, state))
    }

    /// Details, history, supply chain and outlook, loaded concurrently.
    ///
    /// `None` when the ticker has no details.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(symbol = %self.symbol)))]
    pub async fn dashboard(&self) -> Option<Dashboard> {
        let (details, history, supply_chain) =
            tokio::join!(self.details(), self.history(), self.supply_chain());
        let details = details?;
        let outlook = outlook(&details, &history);
        Some(Dashboard {
            details,
            history,
            supply_chain,
            outlook,
        })
    }
}
