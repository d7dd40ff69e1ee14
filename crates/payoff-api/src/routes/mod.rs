//! HTTP route handlers.

pub mod analyze;
pub mod health;
