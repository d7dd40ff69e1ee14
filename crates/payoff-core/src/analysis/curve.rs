//! Aggregate payoff curve.

use serde::{Deserialize, Serialize};

use crate::types::{Contract, PriceScan};

/// Total profit/loss of the portfolio at one underlying price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffPoint {
    /// Underlying price at expiry.
    pub price: f64,
    /// Sum of every contract's payoff at `price`.
    pub profit_loss: f64,
}

impl PayoffPoint {
    /// Creates a new point.
    #[must_use]
    pub fn new(price: f64, profit_loss: f64) -> Self {
        Self { price, profit_loss }
    }
}

/// Portfolio profit/loss at a single price.
#[must_use]
pub fn portfolio_payoff(contracts: &[Contract], price: f64) -> f64 {
    contracts.iter().map(|c| c.payoff_at(price)).sum()
}

/// Evaluates the portfolio at every price of the scan, in ascending order.
///
/// The scan is assumed valid; see [`PriceScan::validate`].
#[must_use]
pub fn payoff_curve(contracts: &[Contract], scan: &PriceScan) -> Vec<PayoffPoint> {
    scan.prices()
        .map(|price| PayoffPoint::new(price, portfolio_payoff(contracts, price)))
        .collect()
}
