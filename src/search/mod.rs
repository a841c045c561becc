//! Company search: roster filtering in synthetic mode, provider symbol search in live mode.

mod wire;

use crate::core::client::Op;
use crate::core::fallback::{live_or_fallback, non_empty};
use crate::core::wire::clean_text;
use crate::core::{CacheMode, Company, DataMode, EpClient, EpError, net};
use crate::synthetic::logo_url_for;
use wire::SearchRow;

const UNKNOWN_INDUSTRY: &str = "Unknown";

/* ---------------- Public API ---------------- */

/// Searches for companies matching a free-text query.
///
/// A blank query resolves to an empty list without any I/O. Never fails: a
/// live-provider failure degrades to the synthetic roster.
pub async fn search_companies(client: &EpClient, query: &str) -> Vec<Company> {
    SearchBuilder::new(client, query).fetch().await
}

/// A builder for company searches.
#[derive(Debug)]
pub struct SearchBuilder {
    client: EpClient,
    query: String,
    limit: u32,
    cache_mode: CacheMode,
}

impl SearchBuilder {
    /// Creates a new `SearchBuilder` for a given search query.
    pub fn new(client: &EpClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            limit: client.search_limit(),
            cache_mode: CacheMode::Use,
        }
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Sets the maximum number of rows requested from the live provider.
    #[must_use]
    pub const fn limit(mut self, n: u32) -> Self {
        self.limit = n;
        self
    }

    /// Executes the search.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(query = %self.query)))]
    pub async fn fetch(self) -> Vec<Company> {
        let query = self.query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        if self.client.mode() == DataMode::Live {
            let live = self.fetch_live(query).await;
            if let Some(rows) = live_or_fallback(live, "search", query) {
                return rows;
            }
            return self.client.synthetic().search(query);
        }

        self.client.synthetic_delay(Op::Search).await;
        self.client.synthetic().search(query)
    }

    async fn fetch_live(&self, query: &str) -> Result<Vec<Company>, EpError> {
        let limit = self.limit.to_string();
        let rows: Vec<SearchRow> = net::fetch_json(
            &self.client,
            &["search"],
            &[("query", query), ("limit", limit.as_str())],
            "search",
            query,
            self.cache_mode,
        )
        .await?;
        non_empty(rows.into_iter().filter_map(map_row).collect(), "search")
    }
}

/// Rows without a symbol are dropped.
fn map_row(row: SearchRow) -> Option<Company> {
    let symbol = clean_text(row.symbol)?;
    let name = clean_text(row.name).unwrap_or_else(|| symbol.clone());
    let industry = clean_text(row.kind)
        .or_else(|| clean_text(row.exchange_short_name))
        .unwrap_or_else(|| UNKNOWN_INDUSTRY.to_string());
    Some(Company {
        id: symbol.clone(),
        logo_url: Some(logo_url_for(&name)),
        name,
        ticker: symbol,
        industry,
    })
}
