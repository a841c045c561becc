//! Monthly ESG history for trend charts.
//!
//! The provider exposes no ESG history, so both modes generate the series.

use crate::core::client::Op;
use crate::core::{EpClient, HistoricalDataPoint};

/// Loads thirteen monthly points (twelve months back plus the current month), oldest first.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client)))]
pub async fn historical_data(client: &EpClient, ticker: &str) -> Vec<HistoricalDataPoint> {
    client.synthetic_delay(Op::History).await;
    client.synthetic().historical_data(ticker)
}

/// Mean month-on-month change of the score over the last `window` points.
///
/// Returns `None` when fewer than two points are available.
pub fn average_monthly_change(points: &[HistoricalDataPoint], window: usize) -> Option<f64> {
    let tail = &points[points.len().saturating_sub(window.max(2))..];
    if tail.len() < 2 {
        return None;
    }
    let first = tail.first()?.score;
    let last = tail.last()?.score;
    #[allow(clippy::cast_precision_loss)]
    let steps = (tail.len() - 1) as f64;
    Some((last - first) / steps)
}

/// Population standard deviation of the month-on-month score changes.
pub fn volatility(points: &[HistoricalDataPoint]) -> Option<f64> {
    let changes: Vec<f64> = points.windows(2).map(|w| w[1].score - w[0].score).collect();
    if changes.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = changes.len() as f64;
    let mean = changes.iter().sum::<f64>() / n;
    let var = changes.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / n;
    Some(var.sqrt())
}
