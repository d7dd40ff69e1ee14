//! Analysis response DTOs.

use payoff_core::{AnalysisResult, PayoffPoint};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A point on the profit/loss chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct XyValue {
    /// Underlying price.
    pub x: f64,
    /// Total profit/loss at `x`.
    pub y: f64,
}

impl From<PayoffPoint> for XyValue {
    fn from(point: PayoffPoint) -> Self {
        Self {
            x: point.price,
            y: point.profit_loss,
        }
    }
}

/// Analysis response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    /// Profit/loss curve, ascending by price.
    pub xy_values: Vec<XyValue>,
    pub max_profit: f64,
    pub max_loss: f64,
    /// Sampled prices where the curve crosses or touches zero.
    pub break_even_points: Vec<f64>,
}

impl From<AnalysisResult> for AnalysisResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            xy_values: result.curve.into_iter().map(XyValue::from).collect(),
            max_profit: result.max_profit,
            max_loss: result.max_loss,
            break_even_points: result.break_even_prices,
        }
    }
}
