//! Deterministic synthetic data: the "mock database" behind synthetic mode and
//! every live-mode fallback.
//!
//! Each record draws from its own [`StdRng`] seeded by the session seed, a
//! purpose tag and the lookup key, so one client keeps answering the same
//! values for the same company while two clients with different seeds diverge.

mod roster;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::core::models::{
    ALL_FILTER, Company, CompanyDetails, CompanySearchMeta, EsgScore, HistoricalDataPoint,
    RiskLevel, SupplyChainData, Trend, TrendingIdea, WatchlistPipeline,
};
use roster::{DISCOVERY_FILTERS, PIPELINE_SECTORS, ROSTER, RosterEntry, SUPPLY_CHAIN_COUNTRIES};

pub(crate) use roster::logo_url_for;

/// Months of history before the current month.
pub const HISTORY_MONTHS: u32 = 12;
/// Lower clamp of the monthly history walk.
pub const HISTORY_SCORE_MIN: i32 = 20;
/// Upper clamp of the monthly history walk.
pub const HISTORY_SCORE_MAX: i32 = 95;
/// Floor applied to history pillar scores.
const HISTORY_PILLAR_FLOOR: i32 = 10;

const SUGGESTION_COUNT: usize = 5;

const TRENDS: [Trend; 3] = [Trend::Up, Trend::Down, Trend::Stable];
const RISK_LEVELS: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

/// Seeded generator for every synthetic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticSource {
    seed: u64,
    anchor: DateTime<Utc>,
}

impl SyntheticSource {
    /// A generator anchored at the start of the current UTC day.
    pub fn new(seed: u64) -> Self {
        let today = Utc::now().date_naive();
        Self::with_anchor(seed, today.and_time(NaiveTime::default()).and_utc())
    }

    /// A generator whose "now" is fixed at `anchor`.
    pub const fn with_anchor(seed: u64, anchor: DateTime<Utc>) -> Self {
        Self { seed, anchor }
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The instant synthetic timestamps and history are generated relative to.
    pub const fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    fn rng(&self, purpose: &str, key: &str) -> StdRng {
        StdRng::seed_from_u64(stream_seed(self.seed, purpose, key))
    }

    fn company(&self, entry: &RosterEntry) -> Company {
        let mut rng = self.rng("company-id", entry.name);
        let mut bytes = [0u8; 16];
        rng.fill(&mut bytes);
        Company {
            id: uuid::Builder::from_random_bytes(bytes)
                .into_uuid()
                .to_string(),
            name: entry.name.to_string(),
            ticker: entry.ticker.to_string(),
            industry: entry.industry.to_string(),
            logo_url: Some(entry.logo_url()),
        }
    }

    /// Every company in the roster.
    pub fn companies(&self) -> Vec<Company> {
        ROSTER.iter().map(|e| self.company(e)).collect()
    }

    /// Case-insensitive substring match on name, ticker or industry.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<Company> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }
        ROSTER
            .iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&q)
                    || e.ticker.to_lowercase().contains(&q)
                    || e.industry.to_lowercase().contains(&q)
            })
            .map(|e| self.company(e))
            .collect()
    }

    /// ESG scores for a company, seeded by its name.
    pub fn esg_score(&self, company_name: &str) -> EsgScore {
        let mut rng = self.rng("esg", company_name);
        let total = rng.gen_range(20..=95);
        let environmental = rng.gen_range(15..=90);
        let social = rng.gen_range(15..=90);
        let governance = rng.gen_range(15..=90);
        let age = Duration::seconds(rng.gen_range(0..30 * 24 * 3600));
        EsgScore {
            total: f64::from(total),
            environmental: f64::from(environmental),
            social: f64::from(social),
            governance: f64::from(governance),
            last_updated: self.anchor - age,
            trend: *TRENDS.choose(&mut rng).unwrap_or(&Trend::Stable),
        }
    }

    /// Full details for a roster company; `None` when the ticker is not in the roster.
    pub fn company_details(&self, ticker: &str) -> Option<CompanyDetails> {
        let entry = roster::find(ticker)?;
        let mut rng = self.rng("market-cap", entry.name);
        #[allow(clippy::cast_precision_loss)]
        let market_cap = rng.gen_range(1_000_000_000_u64..=3_000_000_000_000) as f64;
        Some(CompanyDetails {
            company: self.company(entry),
            esg_score: self.esg_score(entry.name),
            description: entry.description.to_string(),
            market_cap: Some(market_cap),
            headquarters: Some(entry.headquarters.to_string()),
        })
    }

    /// Thirteen monthly points (twelve months back plus the current month), oldest first.
    ///
    /// The score performs a random walk starting in `[40, 80]` with steps in
    /// `[-5, 5]`, clamped to `[20, 95]`. Each pillar is the month's score plus
    /// noise in `[-15, 15]`, floored at 10 and capped at 100.
    pub fn historical_data(&self, ticker: &str) -> Vec<HistoricalDataPoint> {
        let mut rng = self.rng("history", ticker);
        let current = self.anchor.date_naive();
        let mut score: i32 = rng.gen_range(40..=80);
        let pillar = |rng: &mut StdRng, score: i32| {
            f64::from((score + rng.gen_range(-15..=15)).clamp(HISTORY_PILLAR_FLOOR, 100))
        };

        (0..=HISTORY_MONTHS)
            .rev()
            .map(|back| {
                score = (score + rng.gen_range(-5..=5)).clamp(HISTORY_SCORE_MIN, HISTORY_SCORE_MAX);
                HistoricalDataPoint {
                    date: month_start(current, back),
                    score: f64::from(score),
                    environmental: pillar(&mut rng, score),
                    social: pillar(&mut rng, score),
                    governance: pillar(&mut rng, score),
                }
            })
            .collect()
    }

    /// One record per country in the fixed seven-country set.
    pub fn supply_chain(&self, ticker: &str) -> Vec<SupplyChainData> {
        let mut rng = self.rng("supply-chain", ticker);
        SUPPLY_CHAIN_COUNTRIES
            .iter()
            .map(|country| SupplyChainData {
                country: (*country).to_string(),
                emission: rng.gen_range(1_000..=50_000),
                risk_level: *RISK_LEVELS.choose(&mut rng).unwrap_or(&RiskLevel::Medium),
                facilities: rng.gen_range(1..=15),
            })
            .collect()
    }

    /// The discovery bundle shown before the user types.
    pub fn search_meta(&self) -> CompanySearchMeta {
        let mut rng = self.rng("search-meta", "");
        let filters = std::iter::once(ALL_FILTER)
            .chain(DISCOVERY_FILTERS.iter().copied())
            .map(str::to_string)
            .collect();

        let suggestions = ROSTER
            .iter()
            .take(SUGGESTION_COUNT)
            .map(|e| self.company(e))
            .collect();

        let trending_ideas = ROSTER
            .iter()
            .filter(|e| !e.ticker.eq_ignore_ascii_case(crate::core::models::PRIVATE_TICKER))
            .take(SUGGESTION_COUNT)
            .map(|e| {
                let pct = round2(rng.gen_range(-3.0..=3.0));
                let volume = f64::from(rng.gen_range(2_000_000_u32..=90_000_000));
                TrendingIdea::from_activity(e.ticker, e.name, pct, Some(volume))
            })
            .collect();

        let watchlist_pipelines = PIPELINE_SECTORS
            .iter()
            .map(|sector| WatchlistPipeline::from_sector(*sector, round2(rng.gen_range(-2.5..=2.5))))
            .collect();

        CompanySearchMeta {
            filters,
            suggestions,
            trending_ideas,
            watchlist_pipelines,
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// FNV-1a over seed, purpose and the case-folded key.
///
/// Hand-rolled because std's hashers may change between releases and the
/// synthetic streams must not.
fn stream_seed(seed: u64, purpose: &str, key: &str) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    let mut eat = |bytes: &[u8]| {
        for b in bytes {
            h ^= u64::from(*b);
            h = h.wrapping_mul(0x0100_0000_01b3);
        }
    };
    eat(&seed.to_le_bytes());
    eat(purpose.as_bytes());
    eat(&[0xff]);
    eat(key.trim().to_lowercase().as_bytes());
    h
}

/// First day of the month `back` months before `date`.
fn month_start(date: NaiveDate, back: u32) -> NaiveDate {
    #[allow(clippy::cast_possible_wrap)]
    let months = date.year() * 12 + date.month0() as i32 - back as i32;
    let (year, month0) = (months.div_euclid(12), months.rem_euclid(12));
    #[allow(clippy::cast_sign_loss)]
    let month = month0 as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}
