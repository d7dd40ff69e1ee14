//! Payoff analyzer: contracts in, curve and statistics out.

use log::debug;
use serde::{Deserialize, Serialize};

use super::curve::{payoff_curve, PayoffPoint};
use super::stats::{break_even_prices, max_loss, max_profit};
use crate::error::PayoffResult;
use crate::types::{validate_contracts, Contract, ContractInput, PriceScan};

/// Payoff profile of a portfolio over the scan range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Profit/loss at each scanned price, ascending by price.
    pub curve: Vec<PayoffPoint>,
    /// Highest profit/loss on the curve.
    pub max_profit: f64,
    /// Lowest profit/loss on the curve.
    pub max_loss: f64,
    /// Sampled break-even prices in scan order.
    pub break_even_prices: Vec<f64>,
}

impl AnalysisResult {
    /// Derives the statistics from an already computed curve.
    #[must_use]
    pub fn from_curve(curve: Vec<PayoffPoint>) -> Self {
        let max_profit = max_profit(&curve);
        let max_loss = max_loss(&curve);
        let break_even_prices = break_even_prices(&curve);

        Self {
            curve,
            max_profit,
            max_loss,
            break_even_prices,
        }
    }

    /// Profit/loss at an exact grid price, if it was sampled.
    #[must_use]
    pub fn profit_loss_at(&self, price: f64) -> Option<f64> {
        self.curve
            .iter()
            .find(|p| p.price == price)
            .map(|p| p.profit_loss)
    }
}

/// Computes payoff profiles over a fixed price scan.
///
/// Holds no mutable state; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PayoffAnalyzer {
    scan: PriceScan,
}

impl PayoffAnalyzer {
    /// Creates an analyzer over the given scan.
    pub fn new(scan: PriceScan) -> PayoffResult<Self> {
        scan.validate()?;
        Ok(Self { scan })
    }

    /// The price grid this analyzer samples.
    #[must_use]
    pub fn scan(&self) -> &PriceScan {
        &self.scan
    }

    /// Analyzes validated contracts. Never fails.
    #[must_use]
    pub fn analyze(&self, contracts: &[Contract]) -> AnalysisResult {
        let result = AnalysisResult::from_curve(payoff_curve(contracts, &self.scan));

        debug!(
            "Analyzed {} contracts over {} prices: max profit {}, max loss {}, {} break-even points",
            contracts.len(),
            result.curve.len(),
            result.max_profit,
            result.max_loss,
            result.break_even_prices.len()
        );

        result
    }

    /// Validates the whole batch, then analyzes it.
    ///
    /// The first invalid contract rejects the batch; nothing is computed.
    pub fn analyze_inputs(&self, inputs: &[ContractInput]) -> PayoffResult<AnalysisResult> {
        let contracts = validate_contracts(inputs)?;
        Ok(self.analyze(&contracts))
    }
}

/// Analyzes contracts over the default 50..=150 scan.
#[must_use]
pub fn analyze(contracts: &[Contract]) -> AnalysisResult {
    PayoffAnalyzer::default().analyze(contracts)
}
