//! One decision cycle of the live engine.
//!
//! Per run, in order:
//! 1. Fetch the aligned bar series and compute indicators (fatal on failure,
//!    prior state untouched).
//! 2. If the open position has reached expiry, close it and realize P&L.
//! 3. If flat and a fresh bullish crossover sits at the latest bar, look for
//!    a tradable spread and enter. Anything that goes wrong on this path
//!    (no expiry in window, missing strikes, non-positive credit, chain
//!    fetch failure) leaves the run flat and successful.
//!
//! The caller owns persistence: it loads the portfolio before the run and
//! saves it afterwards. Runs must not overlap on the same ledger.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, warn};

use crate::data::{IndicatorBar, MarketDataError, MarketDataProvider, MarketSnapshot};
use crate::portfolio::{ExitReason, Portfolio, StoreError, TradeLog, TradeRecord};
use crate::signal::CrossoverDetector;
use crate::spread::{SpreadCandidate, SpreadSelector};

use super::config::StrategyConfig;
use super::state::{Position, PositionState};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("market data unavailable: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("no bars remain after indicator warmup")]
    EmptySnapshot,

    #[error("trade log append failed: {0}")]
    TradeLog(#[from] StoreError),
}

/// What the run did to the strategy slot.
#[derive(Debug, Clone, PartialEq)]
pub enum RunAction {
    /// No transition: still flat, or position carried forward.
    NoChange,
    /// Opened a new spread.
    Entered,
    /// Closed at expiry.
    Exited { pnl: Decimal },
    /// Closed at expiry, then a fresh signal opened a new spread.
    ExitedAndEntered { pnl: Decimal },
}

/// Summary of one completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub as_of: NaiveDateTime,
    pub action: RunAction,
    pub cash: Decimal,
    pub position: Option<Position>,
}

/// The signal-and-position state machine.
pub struct TradeEngine {
    config: StrategyConfig,
    detector: CrossoverDetector,
    selector: SpreadSelector,
}

impl TradeEngine {
    pub fn new(config: StrategyConfig) -> Self {
        let selector = SpreadSelector::new(config.spread.clone());
        Self {
            config,
            detector: CrossoverDetector,
            selector,
        }
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Execute one decision cycle against the given provider, mutating the
    /// portfolio in place and appending trade records for each transition.
    pub fn run(
        &self,
        provider: &dyn MarketDataProvider,
        portfolio: &mut Portfolio,
        log: &TradeLog,
    ) -> Result<RunReport, EngineError> {
        let aligned = provider.fetch_aligned_bars(
            &self.config.underlying_symbol,
            &self.config.volatility_symbol,
            self.config.lookback_days,
        )?;
        let snapshot = MarketSnapshot::compute(
            &aligned,
            self.config.short_ma_period,
            self.config.long_ma_period,
        );
        let latest = snapshot.latest().ok_or(EngineError::EmptySnapshot)?.clone();
        let today = latest.timestamp;

        let two_leg_cost = self.config.brokerage_per_leg * Decimal::TWO;

        // Transition 1: expiry exit, unconditional once the date is reached.
        let mut exit_pnl = None;
        if let PositionState::Open(position) = &portfolio.holdings {
            if position.is_expired(today.date()) {
                let pnl = position.credit_received - two_leg_cost;
                portfolio.cash += pnl;
                log.append(&TradeRecord::Exit {
                    date: today,
                    pnl,
                    reason: ExitReason::Expiry,
                })?;
                info!(%pnl, expiry = %position.expiry, "position expired, spread closed");
                portfolio.holdings = PositionState::Flat;
                exit_pnl = Some(pnl);
            }
        }

        // Transition 2: signal entry, only from flat.
        let mut entered = false;
        if portfolio.holdings.is_flat() && self.detector.is_fresh_bullish_crossover(&snapshot) {
            info!(at = %today, close = %latest.close, "bullish MA crossover at latest bar");
            match self.evaluate_entry(provider, &latest) {
                Ok(Some(candidate)) => {
                    let multiplier = self.config.allocation.multiplier(latest.vix_close);
                    portfolio.cash += candidate.credit - two_leg_cost * multiplier;
                    let position = Position {
                        entry_date: today,
                        expiry: candidate.expiry,
                        sell_strike: candidate.sell_strike,
                        buy_strike: candidate.buy_strike,
                        credit_received: candidate.credit,
                    };
                    log.append(&TradeRecord::Entry {
                        date: today,
                        expiry: candidate.expiry,
                        sell_strike: candidate.sell_strike,
                        buy_strike: candidate.buy_strike,
                        credit: candidate.credit,
                    })?;
                    info!(
                        sell_strike = %candidate.sell_strike,
                        buy_strike = %candidate.buy_strike,
                        credit = %candidate.credit,
                        "entered bull put spread"
                    );
                    portfolio.holdings = PositionState::Open(position);
                    entered = true;
                }
                Ok(None) => {
                    info!("signal without a tradable spread, staying flat");
                }
                Err(e) => {
                    // Options-path failures abort only entry evaluation.
                    warn!(error = %e, "entry evaluation failed, staying flat");
                }
            }
        }

        let action = match (exit_pnl, entered) {
            (Some(pnl), true) => RunAction::ExitedAndEntered { pnl },
            (Some(pnl), false) => RunAction::Exited { pnl },
            (None, true) => RunAction::Entered,
            (None, false) => RunAction::NoChange,
        };

        Ok(RunReport {
            as_of: today,
            action,
            cash: portfolio.cash,
            position: portfolio.holdings.as_open().cloned(),
        })
    }

    /// Entry evaluation: expiry window, chain fetch, strike match, pricing.
    ///
    /// `Ok(None)` is the normal "nothing tradable" outcome; `Err` carries a
    /// provider failure, which the caller downgrades to a no-entry.
    fn evaluate_entry(
        &self,
        provider: &dyn MarketDataProvider,
        latest: &IndicatorBar,
    ) -> Result<Option<SpreadCandidate>, MarketDataError> {
        let expiries = provider.fetch_expiries(&self.config.underlying_symbol)?;
        let Some(expiry) = self.selector.pick_expiry(latest.timestamp.date(), &expiries) else {
            info!(max_dte = self.config.spread.max_dte, "no expiry inside DTE window");
            return Ok(None);
        };

        let chain = provider.fetch_put_chain(&self.config.underlying_symbol, expiry)?;
        let multiplier = self.config.allocation.multiplier(latest.vix_close);
        Ok(self.selector.select(&chain, latest.close, multiplier))
    }
}
