//! Contract request DTOs.

use chrono::{DateTime, Utc};
use payoff_core::ContractInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One contract in an analysis request.
///
/// Absent fields are zero-filled, as for [`ContractInput`]: a missing
/// `type` or `long_short` fails validation, a missing number is 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContractRequest {
    /// "Call" or "Put" (case-sensitive).
    #[serde(rename = "type")]
    #[schema(example = "Call")]
    pub option_type: String,

    /// Strike price.
    #[schema(example = 100.0)]
    pub strike_price: f64,

    /// Bid quote.
    #[schema(example = 10.05)]
    pub bid: f64,

    /// Ask quote.
    #[schema(example = 12.04)]
    pub ask: f64,

    /// Expiration (RFC 3339). Not used in the payoff.
    pub expiration_date: Option<DateTime<Utc>>,

    /// "long" or "short" (case-sensitive).
    #[schema(example = "long")]
    pub long_short: String,
}

impl From<ContractRequest> for ContractInput {
    fn from(req: ContractRequest) -> Self {
        Self {
            option_type: req.option_type,
            strike_price: req.strike_price,
            bid: req.bid,
            ask: req.ask,
            expiration_date: req.expiration_date,
            long_short: req.long_short,
        }
    }
}
