//! Short-term ESG outlook shown next to a company's scores.
//!
//! A heuristic, not a forecast model: the next score is the current total
//! nudged by recent momentum, and confidence drops as the history gets noisier.

use serde::Serialize;

use crate::core::models::{SCORE_MAX, SCORE_MIN};
use crate::core::{CompanyDetails, HistoricalDataPoint};
use crate::history::{average_monthly_change, volatility};

const BASE_IMPROVEMENT: f64 = 2.0;
const MOMENTUM_WINDOW: usize = 6;
const MOMENTUM_LIMIT: f64 = 3.0;
const BASE_CONFIDENCE: f64 = 85.0;
const MIN_CONFIDENCE: f64 = 50.0;
const VOLATILITY_PENALTY: f64 = 2.0;
const WEAK_GOVERNANCE: f64 = 50.0;

/// Projected score with its confidence and the risks behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outlook {
    pub next_score: f64,
    /// Percentage in `[50, 85]`.
    pub confidence: f64,
    pub risk_factors: Vec<String>,
}

/// Builds the outlook for a company, optionally using its history series.
pub fn outlook(details: &CompanyDetails, history: &[HistoricalDataPoint]) -> Outlook {
    let esg = &details.esg_score;

    let momentum = average_monthly_change(history, MOMENTUM_WINDOW)
        .map_or(0.0, |m| m.clamp(-MOMENTUM_LIMIT, MOMENTUM_LIMIT));
    let next_score = (esg.total + BASE_IMPROVEMENT + momentum).clamp(SCORE_MIN, SCORE_MAX);

    let confidence = volatility(history).map_or(BASE_CONFIDENCE, |v| {
        (BASE_CONFIDENCE - v * VOLATILITY_PENALTY).max(MIN_CONFIDENCE)
    });

    let mut risk_factors = vec![
        "Carbon emissions regulation".to_string(),
        "Supply chain transparency".to_string(),
    ];
    if esg.governance < WEAK_GOVERNANCE {
        risk_factors.push("Governance oversight".to_string());
    }
    if esg.environmental < esg.total {
        risk_factors.push("Environmental performance lag".to_string());
    }

    Outlook {
        next_score,
        confidence,
        risk_factors,
    }
}
