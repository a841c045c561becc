//! The search discovery bundle: filters, suggestions, trending ideas and watchlist pipelines.

mod wire;

use crate::core::client::Op;
use crate::core::fallback::{live_or_fallback, non_empty};
use crate::core::models::ALL_FILTER;
use crate::core::wire::clean_text;
use crate::core::{
    CacheMode, Company, CompanySearchMeta, DataMode, EpClient, EpError, TrendingIdea,
    WatchlistPipeline, net,
};
use crate::synthetic::logo_url_for;
use wire::{ActiveRow, ActivesFeed, SectorFeed, SectorRow};

const SUGGESTION_COUNT: usize = 5;
const TRENDING_COUNT: usize = 5;
const ACTIVE_STOCK_INDUSTRY: &str = "Most active";

/// Loads the bundle that seeds a search UI before the user types.
///
/// Never fails: any live failure yields the synthetic bundle.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client)))]
pub async fn company_search_meta(client: &EpClient) -> CompanySearchMeta {
    load_search_meta(client, CacheMode::Use).await
}

pub(crate) async fn load_search_meta(client: &EpClient, cache_mode: CacheMode) -> CompanySearchMeta {
    if client.mode() == DataMode::Live {
        let live = fetch_live(client, cache_mode).await;
        if let Some(meta) = live_or_fallback(live, "company_search_meta", "") {
            return meta;
        }
        return client.synthetic().search_meta();
    }

    client.synthetic_delay(Op::SearchMeta).await;
    client.synthetic().search_meta()
}

async fn fetch_live(client: &EpClient, cache_mode: CacheMode) -> Result<CompanySearchMeta, EpError> {
    let (sectors, actives) = tokio::join!(
        net::fetch_json::<SectorFeed>(
            client,
            &["sectors-performance"],
            &[],
            "sectors_performance",
            "all",
            cache_mode
        ),
        net::fetch_json::<ActivesFeed>(
            client,
            &["stock_market", "actives"],
            &[],
            "stock_market_actives",
            "all",
            cache_mode
        ),
    );

    let sectors = non_empty(sector_rows(sectors?.into_rows()), "sectors-performance")?;
    let actives = non_empty(active_rows(actives?.into_rows()), "stock_market/actives")?;
    Ok(assemble(&sectors, &actives))
}

/// Sector rows with a name and a parseable change.
fn sector_rows(rows: Vec<SectorRow>) -> Vec<(String, f64)> {
    rows.into_iter()
        .filter_map(|r| Some((clean_text(r.sector)?, r.changes_percentage?)))
        .collect()
}

struct Active {
    ticker: String,
    name: String,
    change: f64,
    volume: Option<f64>,
}

fn active_rows(rows: Vec<ActiveRow>) -> Vec<Active> {
    rows.into_iter()
        .filter_map(|r| {
            let ticker = clean_text(r.ticker)?;
            Some(Active {
                name: clean_text(r.company_name).unwrap_or_else(|| ticker.clone()),
                ticker,
                change: r.changes_percentage.unwrap_or(0.0),
                volume: r.volume,
            })
        })
        .collect()
}

fn assemble(sectors: &[(String, f64)], actives: &[Active]) -> CompanySearchMeta {
    let mut filters = vec![ALL_FILTER.to_string()];
    for (name, _) in sectors {
        if !filters.contains(name) {
            filters.push(name.clone());
        }
    }

    let suggestions = actives
        .iter()
        .take(SUGGESTION_COUNT)
        .map(|a| Company {
            id: a.ticker.clone(),
            name: a.name.clone(),
            ticker: a.ticker.clone(),
            industry: ACTIVE_STOCK_INDUSTRY.to_string(),
            logo_url: Some(logo_url_for(&a.name)),
        })
        .collect();

    let trending_ideas = actives
        .iter()
        .take(TRENDING_COUNT)
        .map(|a| TrendingIdea::from_activity(&a.ticker, &a.name, a.change, a.volume))
        .collect();

    let watchlist_pipelines = sectors
        .iter()
        .map(|(name, pct)| WatchlistPipeline::from_sector(name, *pct))
        .collect();

    CompanySearchMeta {
        filters,
        suggestions,
        trending_ideas,
        watchlist_pipelines,
    }
}
