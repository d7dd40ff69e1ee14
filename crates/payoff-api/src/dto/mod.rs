//! Data Transfer Objects for API requests and responses.

pub mod analysis;
pub mod contracts;

pub use analysis::*;
pub use contracts::*;
