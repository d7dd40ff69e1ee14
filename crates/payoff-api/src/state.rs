//! Application state.

use std::sync::Arc;

use payoff_core::PayoffAnalyzer;

/// Application state shared across handlers.
///
/// Read-only: every request works on its own contracts and result.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Analyzer configured with the server's price scan.
    pub analyzer: Arc<PayoffAnalyzer>,
}

impl AppState {
    /// Create state around an analyzer.
    pub fn new(analyzer: PayoffAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}
