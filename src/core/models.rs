use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A listed (or private) company as returned by search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    /// Exchange symbol, or a placeholder such as `"Private"` for unlisted companies.
    pub ticker: String,
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Ticker value used for companies without a public listing.
pub const PRIVATE_TICKER: &str = "Private";

impl Company {
    /// The key that identifies this company: its ticker, or its id when the
    /// ticker is a placeholder.
    pub fn identity(&self) -> &str {
        if self.ticker.is_empty() || self.ticker.eq_ignore_ascii_case(PRIVATE_TICKER) {
            &self.id
        } else {
            &self.ticker
        }
    }
}

/// Direction an ESG score has been moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// ESG scores on a 0 to 100 scale.
///
/// `total` is sourced independently of the three pillars and is not a fixed
/// function of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsgScore {
    pub total: f64,
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
    pub last_updated: DateTime<Utc>,
    pub trend: Trend,
}

/// Lower bound of every ESG score.
pub const SCORE_MIN: f64 = 0.0;
/// Upper bound of every ESG score.
pub const SCORE_MAX: f64 = 100.0;

impl EsgScore {
    /// Whether all four numeric fields lie in `[0, 100]`.
    pub fn in_bounds(&self) -> bool {
        [self.total, self.environmental, self.social, self.governance]
            .iter()
            .all(|v| (SCORE_MIN..=SCORE_MAX).contains(v))
    }
}

/// A company with its ESG score and profile details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetails {
    #[serde(flatten)]
    pub company: Company,
    pub esg_score: EsgScore,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
}

/// One month of ESG history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalDataPoint {
    pub date: NaiveDate,
    pub score: f64,
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
}

/// Supply-chain risk for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Emissions and facility exposure in one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyChainData {
    pub country: String,
    /// Tons of CO2 equivalent.
    pub emission: u32,
    pub risk_level: RiskLevel,
    pub facilities: u32,
}

/// Short-term price momentum of a trending stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Momentum {
    Bullish,
    Bearish,
    Neutral,
}

impl Momentum {
    /// Classifies a daily percentage change: at least +1% is bullish, at most -1% bearish.
    pub fn from_change(pct: f64) -> Self {
        if pct >= 1.0 {
            Self::Bullish
        } else if pct <= -1.0 {
            Self::Bearish
        } else {
            Self::Neutral
        }
    }
}

/// A stock surfaced in the discovery panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingIdea {
    pub ticker: String,
    pub company_name: String,
    pub change_percentage: f64,
    pub momentum: Momentum,
    /// Display context, e.g. `"Volume 12.3M"`.
    pub context: String,
}

impl TrendingIdea {
    /// Derives an idea from a most-active row: momentum from the change, context from volume.
    pub fn from_activity(
        ticker: impl Into<String>,
        company_name: impl Into<String>,
        change_percentage: f64,
        volume: Option<f64>,
    ) -> Self {
        let context = match volume {
            Some(v) if v > 0.0 => format!("Volume {}", format_volume(v)),
            _ => "Volume n/a".to_string(),
        };
        Self {
            ticker: ticker.into(),
            company_name: company_name.into(),
            change_percentage,
            momentum: Momentum::from_change(change_percentage),
            context,
        }
    }
}

/// Compact volume figure: `950`, `12.3K`, `4.5M`, `1.2B`.
pub fn format_volume(v: f64) -> String {
    let a = v.abs();
    if a >= 1e9 {
        format!("{:.1}B", v / 1e9)
    } else if a >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else if a >= 1e3 {
        format!("{:.1}K", v / 1e3)
    } else {
        format!("{v:.0}")
    }
}

/// Whether a watchlist pipeline needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineStatus {
    #[serde(rename = "Action required")]
    ActionRequired,
    #[serde(rename = "Monitoring")]
    Monitoring,
}

impl PipelineStatus {
    /// Negative sector performance requires action.
    pub fn from_change(pct: f64) -> Self {
        if pct < 0.0 {
            Self::ActionRequired
        } else {
            Self::Monitoring
        }
    }
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ActionRequired => "Action required",
            Self::Monitoring => "Monitoring",
        })
    }
}

/// A sector watchlist with the number of companies it tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistPipeline {
    pub name: String,
    pub companies: u32,
    pub change_percentage: f64,
    pub status: PipelineStatus,
}

impl WatchlistPipeline {
    /// Company count heuristic: `max(6, round(|pct| * 8))`.
    pub fn company_count(pct: f64) -> u32 {
        let scaled = (pct.abs() * 8.0).round();
        // `scaled` is non-negative; saturate absurd provider values.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = scaled.min(f64::from(u32::MAX)) as u32;
        n.max(6)
    }

    /// Derives a pipeline from one sector-performance row.
    pub fn from_sector(name: impl Into<String>, change_percentage: f64) -> Self {
        Self {
            name: name.into(),
            companies: Self::company_count(change_percentage),
            change_percentage,
            status: PipelineStatus::from_change(change_percentage),
        }
    }
}

/// Discovery bundle that seeds a search UI before the user types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySearchMeta {
    /// Industry/sector filters, always starting with `"All"`.
    pub filters: Vec<String>,
    pub suggestions: Vec<Company>,
    pub trending_ideas: Vec<TrendingIdea>,
    pub watchlist_pipelines: Vec<WatchlistPipeline>,
}

/// The catch-all filter that leads every filter list.
pub const ALL_FILTER: &str = "All";
