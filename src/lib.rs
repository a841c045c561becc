//! ecopulse-rs: data access and scenario modelling for the EcoPulse ESG dashboard.
//!
//! Two independent pieces:
//! - the **data access layer** ([`search_companies`], [`company_details`],
//!   [`historical_data`], [`supply_chain`], [`company_search_meta`]), which
//!   answers from a live provider when a credential is configured and falls back
//!   to a seeded synthetic generator on any failure;
//! - the **scenario impact engine** ([`simulate`]), a pure function that perturbs
//!   an [`EsgScore`] with three sliders.
//!
//! ```no_run
//! # use ecopulse_rs::{EpClient, ScenarioState};
//! # #[tokio::main]
//! # async fn main() -> Result<(), ecopulse_rs::EpError> {
//! let client = EpClient::builder().api_key_from_env().build()?;
//! let hits = ecopulse_rs::search_companies(&client, "apple").await;
//! if let Some(details) = ecopulse_rs::company_details(&client, &hits[0].ticker).await {
//!     let impact = ecopulse_rs::simulate(&details.esg_score, &ScenarioState::default());
//!     assert_eq!(impact.total_delta, 0.0);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;

pub mod company;
pub mod discovery;
pub mod history;
pub mod outlook;
pub mod scenario;
pub mod search;
pub mod supply_chain;
pub mod synthetic;
pub mod ticker;

pub use crate::core::{
    CacheMode, Company, CompanyDetails, CompanySearchMeta, DataMode, EpClient, EpClientBuilder,
    EpError, EsgScore, HistoricalDataPoint, LatencyProfile, Momentum, PipelineStatus, RiskLevel,
    SupplyChainData, Trend, TrendingIdea, WatchlistPipeline,
};
pub use company::company_details;
pub use discovery::company_search_meta;
pub use history::historical_data;
pub use outlook::{Outlook, outlook};
pub use scenario::{
    Direction, Driver, ScenarioImpact, ScenarioLever, ScenarioState, SegmentDeltas, SliderConfig,
    format_delta, simulate,
};
pub use search::{SearchBuilder, search_companies};
pub use supply_chain::supply_chain;
pub use synthetic::SyntheticSource;
pub use ticker::{Dashboard, Ticker};

/// Installs a `fmt` subscriber honouring `RUST_LOG`. Safe to call more than once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
