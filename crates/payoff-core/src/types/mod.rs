//! Domain types for payoff analysis.
//!
//! - [`Contract`]: a validated options position
//! - [`ContractInput`]: the unvalidated wire form of a contract
//! - [`OptionKind`]: call or put
//! - [`PositionSide`]: long or short
//! - [`PriceScan`]: the grid of underlying prices to evaluate

mod contract;
mod scan;

pub use contract::{validate_contracts, Contract, ContractInput, OptionKind, PositionSide};
pub use scan::{PriceScan, DEFAULT_SCAN_END, DEFAULT_SCAN_START, DEFAULT_SCAN_STEP, MAX_SCAN_POINTS};
