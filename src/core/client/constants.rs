//! Centralized constants for default endpoints, UA and synthetic latency.

use std::time::Duration;

/// Default UA sent to the provider.
pub(crate) const USER_AGENT: &str = concat!("ecopulse-rs/", env!("CARGO_PKG_VERSION"));

/// Financial Modeling Prep v3 API base (endpoint paths are joined onto it).
pub(crate) const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3/";

/// Environment variable read by [`EpClientBuilder::api_key_from_env`](super::EpClientBuilder::api_key_from_env).
pub const API_KEY_ENV: &str = "FMP_API_KEY";

/// Rows requested from the live symbol search.
pub(crate) const DEFAULT_SEARCH_LIMIT: u32 = 10;

pub(crate) const LATENCY_SEARCH: Duration = Duration::from_millis(300);
pub(crate) const LATENCY_DETAILS: Duration = Duration::from_millis(500);
pub(crate) const LATENCY_HISTORY: Duration = Duration::from_millis(200);
pub(crate) const LATENCY_SUPPLY_CHAIN: Duration = Duration::from_millis(400);
pub(crate) const LATENCY_SEARCH_META: Duration = Duration::from_millis(350);
