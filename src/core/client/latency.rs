use std::time::Duration;

use super::constants::{
    LATENCY_DETAILS, LATENCY_HISTORY, LATENCY_SEARCH, LATENCY_SEARCH_META, LATENCY_SUPPLY_CHAIN,
};

/// Artificial delays applied when the synthetic generator serves a call in synthetic mode.
///
/// The delays exist so that loading states in a rendering layer can be exercised
/// without a live provider. Use [`LatencyProfile::none`] in tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Delay before a company search resolves.
    pub search: Duration,
    /// Delay before company details resolve.
    pub details: Duration,
    /// Delay before the ESG history series resolves.
    pub history: Duration,
    /// Delay before supply-chain exposure resolves.
    pub supply_chain: Duration,
    /// Delay before the search discovery bundle resolves.
    pub search_meta: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            search: LATENCY_SEARCH,
            details: LATENCY_DETAILS,
            history: LATENCY_HISTORY,
            supply_chain: LATENCY_SUPPLY_CHAIN,
            search_meta: LATENCY_SEARCH_META,
        }
    }
}

impl LatencyProfile {
    /// A profile with every delay set to zero.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            search: Duration::ZERO,
            details: Duration::ZERO,
            history: Duration::ZERO,
            supply_chain: Duration::ZERO,
            search_meta: Duration::ZERO,
        }
    }

    /// Applies the same delay to every operation.
    #[must_use]
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            search: delay,
            details: delay,
            history: delay,
            supply_chain: delay,
            search_meta: delay,
        }
    }
}

/// Which operation a simulated delay belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    Search,
    Details,
    History,
    SupplyChain,
    SearchMeta,
}

impl LatencyProfile {
    pub(crate) const fn for_op(&self, op: Op) -> Duration {
        match op {
            Op::Search => self.search,
            Op::Details => self.details,
            Op::History => self.history,
            Op::SupplyChain => self.supply_chain,
            Op::SearchMeta => self.search_meta,
        }
    }
}

/// Sleeps for the configured delay; a zero delay returns immediately.
pub(crate) async fn simulate(profile: &LatencyProfile, op: Op) {
    let delay = profile.for_op(op);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
