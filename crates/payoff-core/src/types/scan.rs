//! Underlying price grid sampled by the analyzer.

use serde::{Deserialize, Serialize};

use crate::error::{PayoffError, PayoffResult};

/// First sampled price of the default grid.
pub const DEFAULT_SCAN_START: f64 = 50.0;

/// Last sampled price of the default grid (inclusive).
pub const DEFAULT_SCAN_END: f64 = 150.0;

/// Spacing of the default grid.
pub const DEFAULT_SCAN_STEP: f64 = 1.0;

/// Slack when counting steps, so an end that sits on the grid is not lost to
/// division rounding (e.g. 0.3 / 0.1).
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Largest grid a scan may describe.
pub const MAX_SCAN_POINTS: usize = 1_000_000;

/// An inclusive, evenly spaced range of underlying prices.
///
/// The grid is independent of the contracts being analyzed; strikes outside
/// it simply never reach their kink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceScan {
    /// First price.
    pub start: f64,
    /// Last price (inclusive when it falls on the grid).
    pub end: f64,
    /// Spacing between consecutive prices.
    pub step: f64,
}

impl Default for PriceScan {
    fn default() -> Self {
        Self {
            start: DEFAULT_SCAN_START,
            end: DEFAULT_SCAN_END,
            step: DEFAULT_SCAN_STEP,
        }
    }
}

impl PriceScan {
    /// Creates a validated scan.
    pub fn new(start: f64, end: f64, step: f64) -> PayoffResult<Self> {
        let scan = Self { start, end, step };
        scan.validate()?;
        Ok(scan)
    }

    /// Checks that the grid is finite and non-empty.
    pub fn validate(&self) -> PayoffResult<()> {
        if !(self.start.is_finite() && self.end.is_finite() && self.step.is_finite()) {
            return Err(PayoffError::invalid_scan("bounds and step must be finite"));
        }
        if self.step <= 0.0 {
            return Err(PayoffError::invalid_scan(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.start > self.end {
            return Err(PayoffError::invalid_scan(format!(
                "start {} is above end {}",
                self.start, self.end
            )));
        }
        let points = self.step_count() + 1.0;
        if points > MAX_SCAN_POINTS as f64 {
            return Err(PayoffError::invalid_scan(format!(
                "grid has {points:e} points, limit is {MAX_SCAN_POINTS}"
            )));
        }
        Ok(())
    }

    /// Whole steps between start and end, as a float so an oversized grid
    /// can be detected before any integer conversion.
    fn step_count(&self) -> f64 {
        ((self.end - self.start) / self.step + STEP_COUNT_TOLERANCE).floor()
    }

    /// Number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        (self.step_count() as usize).saturating_add(1)
    }

    /// Always false for a validated scan.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid prices in ascending order.
    ///
    /// Each price is `start + i * step`, so no rounding error accumulates
    /// across the range.
    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.start + i as f64 * self.step)
    }
}
