//! Volatility-conditioned position allocation.
//!
//! Maps the latest volatility-index reading to a capital-allocation
//! multiplier applied to both the credit collected and the transaction-cost
//! deduction at entry. An already-open position is never rescaled.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Allocation regime thresholds and multipliers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Volatility reading at or above which the fear regime applies.
    pub vix_threshold: f64,
    /// Multiplier when the reading is strictly below the threshold.
    pub calm_multiplier: Decimal,
    /// Multiplier at or above the threshold.
    pub fear_multiplier: Decimal,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            vix_threshold: 20.0,
            calm_multiplier: Decimal::ONE,
            fear_multiplier: Decimal::new(5, 1), // 0.5
        }
    }
}

impl AllocationConfig {
    /// Allocation multiplier for a volatility reading.
    ///
    /// Calm only when strictly below the threshold; a reading exactly at the
    /// threshold resolves to the fear multiplier.
    pub fn multiplier(&self, vix: f64) -> Decimal {
        if vix < self.vix_threshold {
            self.calm_multiplier
        } else {
            self.fear_multiplier
        }
    }
}
