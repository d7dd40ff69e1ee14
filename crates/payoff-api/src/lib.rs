//! Payoff REST API Server.
//!
//! This crate exposes the payoff analyzer over HTTP.
//!
//! ## Endpoints
//!
//! - `POST /analyze`: JSON array of contracts in, payoff curve, max
//!   profit, max loss and break-even points out
//! - `GET /health`: liveness plus the configured price grid
//! - `GET /openapi.json`: OpenAPI document
//!
//! ## Usage
//!
//! ```bash
//! # Start server on default port
//! payoff-api-server
//!
//! # Custom host and port
//! payoff-api-server --host 0.0.0.0 --port 3000
//!
//! # Load a TOML config (flags still override it)
//! payoff-api-server --config config/payoff.toml --verbose
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::create_router;
pub use state::AppState;
