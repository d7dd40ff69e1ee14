//! Option contract definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PayoffError, PayoffResult};

/// Option type (Call or Put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionKind {
    /// Intrinsic value at the given underlying price.
    #[must_use]
    pub fn intrinsic(self, price: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (price - strike).max(0.0),
            OptionKind::Put => (strike - price).max(0.0),
        }
    }
}

impl FromStr for OptionKind {
    type Err = PayoffError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Call" => Ok(OptionKind::Call),
            "Put" => Ok(OptionKind::Put),
            other => Err(PayoffError::invalid_option_type(other)),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionKind::Call => "Call",
            OptionKind::Put => "Put",
        };
        write!(f, "{name}")
    }
}

/// Side of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    /// Bought; pays the ask.
    Long,
    /// Written; receives the bid.
    Short,
}

impl FromStr for PositionSide {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(PositionSide::Long),
            "short" => Ok(PositionSide::Short),
            other => Err(PayoffError::invalid_position_type(other)),
        }
    }
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PositionSide::Long => "long",
            PositionSide::Short => "short",
        };
        write!(f, "{name}")
    }
}

/// Unvalidated contract as received on the wire.
///
/// `option_type` and `long_short` are kept as raw strings so that an
/// unrecognized value surfaces as a [`PayoffError`] rather than as a
/// deserialization failure. Absent fields take their zero value: an empty
/// string fails validation, a missing number is 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractInput {
    /// "Call" or "Put".
    #[serde(rename = "type")]
    pub option_type: String,

    /// Exercise price.
    pub strike_price: f64,

    /// Bid quote; premium received when short.
    pub bid: f64,

    /// Ask quote; premium paid when long.
    pub ask: f64,

    /// Expiration timestamp (RFC 3339).
    pub expiration_date: Option<DateTime<Utc>>,

    /// "long" or "short".
    pub long_short: String,
}

impl ContractInput {
    /// Parses the input into a [`Contract`].
    ///
    /// The option type is checked before the position.
    pub fn validate(&self) -> PayoffResult<Contract> {
        let kind = self.option_type.parse::<OptionKind>()?;
        let position = self.long_short.parse::<PositionSide>()?;

        Ok(Contract {
            kind,
            strike_price: self.strike_price,
            bid: self.bid,
            ask: self.ask,
            position,
            expiration: self.expiration_date,
        })
    }
}

impl From<&Contract> for ContractInput {
    fn from(contract: &Contract) -> Self {
        Self {
            option_type: contract.kind.to_string(),
            strike_price: contract.strike_price,
            bid: contract.bid,
            ask: contract.ask,
            expiration_date: contract.expiration,
            long_short: contract.position.to_string(),
        }
    }
}

/// Validates every input in order, stopping at the first failure.
///
/// No partial result is returned: either all contracts parse or the whole
/// batch is rejected.
pub fn validate_contracts(inputs: &[ContractInput]) -> PayoffResult<Vec<Contract>> {
    inputs.iter().map(ContractInput::validate).collect()
}

/// A single validated options position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Call or put.
    pub kind: OptionKind,
    /// Strike price.
    pub strike_price: f64,
    /// Bid quote.
    pub bid: f64,
    /// Ask quote.
    pub ask: f64,
    /// Long or short.
    pub position: PositionSide,
    /// Expiration; carried through, not used in the payoff.
    pub expiration: Option<DateTime<Utc>>,
}

impl Contract {
    /// Creates a contract with no expiration.
    #[must_use]
    pub fn new(kind: OptionKind, position: PositionSide, strike_price: f64, bid: f64, ask: f64) -> Self {
        Self {
            kind,
            strike_price,
            bid,
            ask,
            position,
            expiration: None,
        }
    }

    /// Long call.
    #[must_use]
    pub fn long_call(strike_price: f64, bid: f64, ask: f64) -> Self {
        Self::new(OptionKind::Call, PositionSide::Long, strike_price, bid, ask)
    }

    /// Short call.
    #[must_use]
    pub fn short_call(strike_price: f64, bid: f64, ask: f64) -> Self {
        Self::new(OptionKind::Call, PositionSide::Short, strike_price, bid, ask)
    }

    /// Long put.
    #[must_use]
    pub fn long_put(strike_price: f64, bid: f64, ask: f64) -> Self {
        Self::new(OptionKind::Put, PositionSide::Long, strike_price, bid, ask)
    }

    /// Short put.
    #[must_use]
    pub fn short_put(strike_price: f64, bid: f64, ask: f64) -> Self {
        Self::new(OptionKind::Put, PositionSide::Short, strike_price, bid, ask)
    }

    /// Sets the expiration.
    #[must_use]
    pub fn with_expiration(mut self, expiration: DateTime<Utc>) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Intrinsic value at expiry for the given underlying price.
    #[must_use]
    pub fn intrinsic_value(&self, price: f64) -> f64 {
        self.kind.intrinsic(price, self.strike_price)
    }

    /// Premium exchanged when the position was opened: the ask for a long,
    /// the bid for a short.
    #[must_use]
    pub fn premium(&self) -> f64 {
        match self.position {
            PositionSide::Long => self.ask,
            PositionSide::Short => self.bid,
        }
    }

    /// Profit/loss of this position at the given underlying price.
    ///
    /// Long: `intrinsic - ask`. Short: `bid - intrinsic`.
    #[must_use]
    pub fn payoff_at(&self, price: f64) -> f64 {
        let intrinsic = self.intrinsic_value(price);
        match self.position {
            PositionSide::Long => intrinsic - self.ask,
            PositionSide::Short => self.bid - intrinsic,
        }
    }
}
