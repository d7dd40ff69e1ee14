//! # Payoff Core
//!
//! Expiry profit/loss analysis for portfolios of vanilla options.
//!
//! Given a list of calls and puts, long or short, with their strikes and
//! quotes, this crate evaluates the combined position across a grid of
//! underlying prices and derives:
//!
//! - **Payoff curve**: total profit/loss at each grid price
//! - **Max profit / max loss**: extremes of the curve
//! - **Break-even prices**: grid prices where the curve crosses or touches zero
//!
//! There is no pricing model here: premiums come straight from the quoted
//! bid (short) or ask (long).
//!
//! ## Example
//!
//! ```rust
//! use payoff_core::prelude::*;
//!
//! let result = analyze(&[Contract::long_call(100.0, 10.05, 12.04)]);
//!
//! assert_eq!(result.curve.len(), 101);
//! assert_eq!(result.break_even_prices, vec![113.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod analysis;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::{analyze, AnalysisResult, PayoffAnalyzer, PayoffPoint};
    pub use crate::error::{PayoffError, PayoffResult};
    pub use crate::types::{
        validate_contracts, Contract, ContractInput, OptionKind, PositionSide, PriceScan,
    };
}

// Re-export commonly used types at crate root
pub use analysis::{analyze, AnalysisResult, PayoffAnalyzer, PayoffPoint};
pub use error::{PayoffError, PayoffResult};
pub use types::{Contract, ContractInput, OptionKind, PositionSide, PriceScan};
