//! Error types for payoff analysis.
//!
//! Validation is the only failure mode of the analyzer: once every contract
//! has parsed into its closed enums the computation is total.

use thiserror::Error;

/// A specialized Result type for payoff operations.
pub type PayoffResult<T> = Result<T, PayoffError>;

/// The main error type for payoff operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayoffError {
    /// Option type was not exactly "Call" or "Put".
    #[error("Invalid option type: {value}")]
    InvalidOptionType {
        /// The rejected value.
        value: String,
    },

    /// Position was not exactly "long" or "short".
    #[error("Invalid position type: {value}")]
    InvalidPositionType {
        /// The rejected value.
        value: String,
    },

    /// Price scan grid cannot be sampled.
    #[error("Invalid price scan: {reason}")]
    InvalidScan {
        /// Description of what's invalid.
        reason: String,
    },
}

impl PayoffError {
    /// Creates an invalid option type error.
    #[must_use]
    pub fn invalid_option_type(value: impl Into<String>) -> Self {
        Self::InvalidOptionType {
            value: value.into(),
        }
    }

    /// Creates an invalid position type error.
    #[must_use]
    pub fn invalid_position_type(value: impl Into<String>) -> Self {
        Self::InvalidPositionType {
            value: value.into(),
        }
    }

    /// Creates an invalid scan error.
    #[must_use]
    pub fn invalid_scan(reason: impl Into<String>) -> Self {
        Self::InvalidScan {
            reason: reason.into(),
        }
    }

    /// Error category without the offending value.
    ///
    /// This is what gets reported to clients; the detailed message stays in
    /// the logs.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidOptionType { .. } => "Invalid option type",
            Self::InvalidPositionType { .. } => "Invalid position type",
            Self::InvalidScan { .. } => "Invalid price scan",
        }
    }
}
