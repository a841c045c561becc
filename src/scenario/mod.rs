//! Scenario impact engine.
//!
//! Three sliders (carbon price, regulation, supply shock) perturb a baseline
//! [`EsgScore`]. The computation is pure and saturating: deltas are clamped per
//! pillar and adjusted scores never leave `[0, 100]`.

mod model;

pub use model::{
    Direction, Driver, ScenarioLever, ScenarioState, SegmentDeltas, SliderConfig,
};

use serde::Serialize;

use crate::core::EsgScore;
use crate::core::models::{SCORE_MAX, SCORE_MIN};

/// Bound on the total score delta.
pub const TOTAL_DELTA_LIMIT: f64 = 12.0;
/// Bound on the environmental delta.
pub const ENVIRONMENTAL_DELTA_LIMIT: f64 = 10.0;
/// Bound on the social and governance deltas.
pub const SOCIAL_GOVERNANCE_DELTA_LIMIT: f64 = 8.0;

/// Result of applying a scenario to a baseline score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioImpact {
    pub total_delta: f64,
    pub segment_deltas: SegmentDeltas,
    /// A new score; the baseline is left untouched.
    pub adjusted: EsgScore,
    /// The lever with the largest absolute shift.
    pub primary_driver: Driver,
    drivers: [Driver; 3],
}

impl ScenarioImpact {
    /// All three drivers, strongest first. Equal magnitudes keep lever order.
    pub fn drivers(&self) -> &[Driver; 3] {
        &self.drivers
    }
}

fn bounded(v: f64, limit: f64) -> f64 {
    v.clamp(-limit, limit)
}

fn score(v: f64) -> f64 {
    v.clamp(SCORE_MIN, SCORE_MAX)
}

/// Raw per-lever shift relative to the slider default.
pub fn shift(state: &ScenarioState, lever: ScenarioLever) -> f64 {
    let cfg = lever.config();
    (cfg.clamp(state.get(lever)) - cfg.default) * lever.sensitivity()
}

/// Applies a scenario to a baseline score.
pub fn simulate(baseline: &EsgScore, state: &ScenarioState) -> ScenarioImpact {
    let carbon = shift(state, ScenarioLever::CarbonPrice);
    let regulation = shift(state, ScenarioLever::Regulation);
    let supply = shift(state, ScenarioLever::SupplyShock);

    let total_delta = bounded(carbon + regulation + supply, TOTAL_DELTA_LIMIT);
    let segment_deltas = SegmentDeltas {
        environmental: bounded(carbon - supply * 0.3, ENVIRONMENTAL_DELTA_LIMIT),
        social: bounded(regulation * 0.4 - supply * 0.2, SOCIAL_GOVERNANCE_DELTA_LIMIT),
        governance: bounded(regulation * 0.6 + carbon * 0.2, SOCIAL_GOVERNANCE_DELTA_LIMIT),
    };

    let adjusted = EsgScore {
        total: score(baseline.total + total_delta),
        environmental: score(baseline.environmental + segment_deltas.environmental),
        social: score(baseline.social + segment_deltas.social),
        governance: score(baseline.governance + segment_deltas.governance),
        ..baseline.clone()
    };

    let mut drivers = [
        Driver::new(ScenarioLever::CarbonPrice, carbon),
        Driver::new(ScenarioLever::Regulation, regulation),
        Driver::new(ScenarioLever::SupplyShock, supply),
    ];
    // Stable sort: ties stay in lever order.
    drivers.sort_by(|a, b| b.shift.abs().total_cmp(&a.shift.abs()));

    ScenarioImpact {
        total_delta,
        segment_deltas,
        adjusted,
        primary_driver: drivers[0],
        drivers,
    }
}

/// Display form of a delta: one decimal with an explicit sign, e.g. `+3.5`, `-0.8`, `+0`.
pub fn format_delta(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let sign = if rounded >= 0.0 { "+" } else { "" };
    if rounded.fract() == 0.0 {
        format!("{sign}{rounded:.0}")
    } else {
        format!("{sign}{rounded:.1}")
    }
}
