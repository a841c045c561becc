use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three scenario sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScenarioLever {
    /// Carbon price in $/t.
    CarbonPrice,
    /// Regulatory stringency in %.
    Regulation,
    /// Supply disruption in %.
    SupplyShock,
}

impl ScenarioLever {
    /// Every lever, in the order used to break driver ties.
    pub const ALL: [Self; 3] = [Self::CarbonPrice, Self::Regulation, Self::SupplyShock];

    /// The slider domain for this lever.
    pub const fn config(self) -> SliderConfig {
        match self {
            Self::CarbonPrice => SliderConfig {
                min: 0.0,
                max: 200.0,
                step: 10.0,
                default: 75.0,
                unit: "$/t",
            },
            Self::Regulation => SliderConfig {
                min: 0.0,
                max: 100.0,
                step: 5.0,
                default: 50.0,
                unit: "%",
            },
            Self::SupplyShock => SliderConfig {
                min: 0.0,
                max: 100.0,
                step: 5.0,
                default: 35.0,
                unit: "%",
            },
        }
    }

    /// Score points contributed per unit above the default. Supply shock pulls scores down.
    pub(crate) const fn sensitivity(self) -> f64 {
        match self {
            Self::CarbonPrice => 0.12,
            Self::Regulation => 0.10,
            Self::SupplyShock => -0.15,
        }
    }
}

impl fmt::Display for ScenarioLever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CarbonPrice => "carbonPrice",
            Self::Regulation => "regulation",
            Self::SupplyShock => "supplyShock",
        })
    }
}

/// Domain of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    pub unit: &'static str,
}

impl SliderConfig {
    /// Clamps into `[min, max]`; NaN becomes the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Clamps and rounds to the nearest step, as a slider would.
    pub fn snap(&self, value: f64) -> f64 {
        let v = self.clamp(value);
        let snapped = self.min + ((v - self.min) / self.step).round() * self.step;
        snapped.clamp(self.min, self.max)
    }
}

/// Slider positions. Values are always inside their slider domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioState {
    carbon_price: f64,
    regulation: f64,
    supply_shock: f64,
}

impl Default for ScenarioState {
    fn default() -> Self {
        Self {
            carbon_price: ScenarioLever::CarbonPrice.config().default,
            regulation: ScenarioLever::Regulation.config().default,
            supply_shock: ScenarioLever::SupplyShock.config().default,
        }
    }
}

impl ScenarioState {
    /// Builds a state, clamping each value into its domain.
    pub fn new(carbon_price: f64, regulation: f64, supply_shock: f64) -> Self {
        Self {
            carbon_price: ScenarioLever::CarbonPrice.config().clamp(carbon_price),
            regulation: ScenarioLever::Regulation.config().clamp(regulation),
            supply_shock: ScenarioLever::SupplyShock.config().clamp(supply_shock),
        }
    }

    pub fn get(&self, lever: ScenarioLever) -> f64 {
        match lever {
            ScenarioLever::CarbonPrice => self.carbon_price,
            ScenarioLever::Regulation => self.regulation,
            ScenarioLever::SupplyShock => self.supply_shock,
        }
    }

    /// Moves one slider; the value is clamped into its domain.
    pub fn set(&mut self, lever: ScenarioLever, value: f64) {
        let v = lever.config().clamp(value);
        match lever {
            ScenarioLever::CarbonPrice => self.carbon_price = v,
            ScenarioLever::Regulation => self.regulation = v,
            ScenarioLever::SupplyShock => self.supply_shock = v,
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, lever: ScenarioLever, value: f64) -> Self {
        self.set(lever, value);
        self
    }

    pub fn carbon_price(&self) -> f64 {
        self.carbon_price
    }
    pub fn regulation(&self) -> f64 {
        self.regulation
    }
    pub fn supply_shock(&self) -> f64 {
        self.supply_shock
    }
}

/// Whether a driver pushes scores up or down. Zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
}

/// One lever's raw shift and how it reads in display copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub lever: ScenarioLever,
    pub shift: f64,
    pub direction: Direction,
    /// The signed shift rounded half-up to a whole point, then made absolute:
    /// `-2.5` reads as `2`, `2.5` as `3`.
    pub magnitude: f64,
}

impl Driver {
    pub(crate) fn new(lever: ScenarioLever, shift: f64) -> Self {
        Self {
            lever,
            shift,
            direction: if shift >= 0.0 {
                Direction::Positive
            } else {
                Direction::Negative
            },
            magnitude: (shift + 0.5).floor().abs(),
        }
    }
}

/// Score deltas per pillar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentDeltas {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
}
