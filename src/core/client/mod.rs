//! Public client surface + builder.
//! Internals are split into `constants` (UA + defaults) and `latency` (simulated delays).

mod constants;
mod latency;

pub use constants::API_KEY_ENV;
pub use latency::LatencyProfile;
pub(crate) use latency::{Op, simulate};

use crate::core::EpError;
use crate::synthetic::SyntheticSource;
use constants::{DEFAULT_BASE_URL, DEFAULT_SEARCH_LIMIT, USER_AGENT};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use url::Url;

/// Where a client sources its data. Decided once, when the client is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataMode {
    /// No credential configured: every operation is served by the synthetic generator.
    Synthetic,
    /// A credential is configured: operations try the provider first and fall back
    /// to the synthetic generator on any failure.
    Live,
}

/// Defines the behavior of the in-memory cache for an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise, fetch from the network
    /// and write the response to the cache. (Default)
    Use,
    /// Always fetch from the network, bypassing any cached entry, and write the new response to the cache.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

/// The entry point for every data operation.
///
/// Cloning is cheap: the HTTP pool and cache are shared.
#[derive(Debug, Clone)]
pub struct EpClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
    search_limit: u32,
    latency: LatencyProfile,
    synthetic: SyntheticSource,
    cache: Option<Arc<CacheStore>>,
}

impl Default for EpClient {
    fn default() -> Self {
        // Only the bundled constant URL and a TLS backend can fail here.
        Self::builder().build().expect("default client")
    }
}

impl EpClient {
    /// Create a new builder.
    pub fn builder() -> EpClientBuilder {
        EpClientBuilder::default()
    }

    /// The data mode selected at build time.
    pub const fn mode(&self) -> DataMode {
        if self.api_key.is_some() {
            DataMode::Live
        } else {
            DataMode::Synthetic
        }
    }

    /// The artificial delays used in synthetic mode.
    pub const fn latency(&self) -> &LatencyProfile {
        &self.latency
    }

    /// The generator used for synthetic data and fallbacks.
    pub const fn synthetic(&self) -> &SyntheticSource {
        &self.synthetic
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
    pub(crate) fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
    pub(crate) const fn search_limit(&self) -> u32 {
        self.search_limit
    }

    /// Waits out the simulated latency for `op` when running in synthetic mode.
    pub(crate) async fn synthetic_delay(&self, op: Op) {
        if self.mode() == DataMode::Synthetic {
            simulate(&self.latency, op).await;
        }
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Drops every cached response.
    pub async fn clear_cache(&self) {
        if let Some(store) = &self.cache {
            store.map.write().await.clear();
        }
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        let store = self.cache.as_ref()?;
        let guard = store.map.read().await;
        if let Some(entry) = guard.get(url.as_str())
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str, ttl_override: Option<Duration>) {
        let Some(store) = &self.cache else {
            return;
        };
        let ttl = ttl_override.unwrap_or(store.default_ttl);
        let now = Instant::now();
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at: now + ttl,
        };
        let mut map = store.map.write().await;
        map.retain(|_, e| e.expires_at >= now);
        map.insert(url.as_str().to_string(), entry);
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct EpClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    search_limit: Option<u32>,
    latency: Option<LatencyProfile>,
    seed: Option<u64>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
}

impl EpClientBuilder {
    /// Provide the provider credential. A blank key is treated as absent.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = if key.trim().is_empty() { None } else { Some(key) };
        self
    }

    /// Read the credential from the `FMP_API_KEY` environment variable, if set.
    ///
    /// Intended for binaries wiring the client up at startup; library code should
    /// pass the key explicitly with [`api_key`](Self::api_key).
    pub fn api_key_from_env(self) -> Self {
        match std::env::var(API_KEY_ENV) {
            Ok(key) => self.api_key(key),
            Err(_) => self,
        }
    }

    /// Override the provider base URL (e.g., `https://financialmodelingprep.com/api/v3/`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Number of rows requested from the live symbol search. Default: 10.
    pub fn search_limit(mut self, n: u32) -> Self {
        self.search_limit = Some(n);
        self
    }

    /// Override the simulated latency used in synthetic mode.
    pub fn latency(mut self, profile: LatencyProfile) -> Self {
        self.latency = Some(profile);
        self
    }

    /// Fix the synthetic generator's session seed. Default: random per client.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable in-memory caching with a default TTL.
    /// If not set, caching is disabled.
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`EpError::Url`] if the default base URL cannot be parsed,
    /// [`EpError::Config`] if a custom base URL cannot carry path segments, or
    /// [`EpError::Http`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<EpClient, EpError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if base_url.cannot_be_a_base() {
            return Err(EpError::Config(format!("base url cannot be a base: {base_url}")));
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(EpClient {
            http,
            base_url,
            api_key: self.api_key,
            search_limit: self.search_limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
            latency: self.latency.unwrap_or_default(),
            synthetic: SyntheticSource::new(self.seed.unwrap_or_else(rand::random)),
            cache: self.cache_ttl.map(|ttl| {
                Arc::new(CacheStore {
                    map: RwLock::new(HashMap::new()),
                    default_ttl: ttl,
                })
            }),
        })
    }
}
