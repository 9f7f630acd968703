//! Strategy configuration.
//!
//! One explicit object passed into the engine and its collaborators at
//! construction time; there is no module-level mutable state. All fields can
//! be overridden from a TOML file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::risk::AllocationConfig;
use crate::spread::SpreadSelectorConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Underlying index symbol.
    pub underlying_symbol: String,

    /// Volatility index symbol.
    pub volatility_symbol: String,

    /// Bar history requested from the provider, in days.
    pub lookback_days: i64,

    /// Cash balance used when no ledger exists yet.
    pub starting_capital: Decimal,

    /// Fixed brokerage per leg per transaction.
    pub brokerage_per_leg: Decimal,

    /// Short moving-average window, in bars.
    pub short_ma_period: usize,

    /// Long moving-average window, in bars.
    pub long_ma_period: usize,

    /// Volatility-conditioned allocation.
    pub allocation: AllocationConfig,

    /// Strike/expiry selection.
    pub spread: SpreadSelectorConfig,

    /// Profit target as a fraction of credit received.
    ///
    /// Declared for the planned early-exit management rules; the engine
    /// currently closes positions only at expiry and never evaluates this.
    pub profit_target_pct: f64,

    /// Stop loss as a fraction of credit received. Same status as
    /// `profit_target_pct`: reserved, not evaluated.
    pub stop_loss_pct: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            underlying_symbol: "^NSEBANK".to_string(),
            volatility_symbol: "^INDIAVIX".to_string(),
            lookback_days: 45,
            starting_capital: Decimal::from(100_000),
            brokerage_per_leg: Decimal::from(20),
            short_ma_period: 20,
            long_ma_period: 80,
            allocation: AllocationConfig::default(),
            spread: SpreadSelectorConfig::default(),
            profit_target_pct: 0.80,
            stop_loss_pct: 1.50,
        }
    }
}
