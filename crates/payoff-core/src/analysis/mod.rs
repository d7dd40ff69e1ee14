//! Payoff curve generation and summary statistics.

mod analyzer;
mod curve;
mod stats;

pub use analyzer::{analyze, AnalysisResult, PayoffAnalyzer};
pub use curve::{payoff_curve, portfolio_payoff, PayoffPoint};
pub use stats::{break_even_prices, max_loss, max_profit};
