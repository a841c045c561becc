//! Company details: roster lookup in synthetic mode, provider profile + quote in live mode.

mod api;
mod wire;

use crate::core::client::Op;
use crate::core::fallback::live_or_fallback;
use crate::core::{CacheMode, CompanyDetails, DataMode, EpClient};

/// Loads details for a ticker.
///
/// An empty ticker resolves to `None` without any I/O. In live mode a failed
/// profile or quote request, or an empty profile, falls back to the synthetic
/// roster, which itself yields `None` for unknown tickers.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client)))]
pub async fn company_details(client: &EpClient, ticker: &str) -> Option<CompanyDetails> {
    load_details(client, ticker, CacheMode::Use).await
}

pub(crate) async fn load_details(
    client: &EpClient,
    ticker: &str,
    cache_mode: CacheMode,
) -> Option<CompanyDetails> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return None;
    }

    if client.mode() == DataMode::Live {
        let live = api::load_from_provider(client, ticker, cache_mode).await;
        if let Some(details) = live_or_fallback(live, "company_details", ticker) {
            return Some(details);
        }
        return client.synthetic().company_details(ticker);
    }

    client.synthetic_delay(Op::Details).await;
    client.synthetic().company_details(ticker)
}
