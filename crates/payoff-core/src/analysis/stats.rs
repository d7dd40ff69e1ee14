//! Summary statistics over a payoff curve.

use super::curve::PayoffPoint;

/// Highest profit/loss on the curve.
///
/// Returns negative infinity for an empty curve.
#[must_use]
pub fn max_profit(curve: &[PayoffPoint]) -> f64 {
    curve
        .iter()
        .map(|p| p.profit_loss)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Lowest profit/loss on the curve.
///
/// Returns positive infinity for an empty curve.
#[must_use]
pub fn max_loss(curve: &[PayoffPoint]) -> f64 {
    curve
        .iter()
        .map(|p| p.profit_loss)
        .fold(f64::INFINITY, f64::min)
}

/// Sampled prices where the curve crosses or touches zero.
///
/// For each consecutive pair, records the later price when the two values
/// lie on opposite sides of zero or either one is exactly zero. Resolution
/// is bounded by the scan step: a flat stretch at zero records every point
/// after the first, and a crossing that returns between two samples is
/// missed.
#[must_use]
pub fn break_even_prices(curve: &[PayoffPoint]) -> Vec<f64> {
    curve
        .windows(2)
        .filter_map(|pair| {
            let (prev, curr) = (pair[0].profit_loss, pair[1].profit_loss);
            let crosses = (prev <= 0.0 && curr >= 0.0) || (prev >= 0.0 && curr <= 0.0);
            crosses.then_some(pair[1].price)
        })
        .collect()
}
