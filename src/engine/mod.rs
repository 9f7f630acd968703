//! Single-position lifecycle state machine.
//!
//! Owns the none -> open -> closed lifecycle: expiry exits first, then
//! signal entries, at most one position at any time.

pub mod config;
pub mod runner;
pub mod state;

pub use config::StrategyConfig;
pub use runner::{EngineError, RunAction, RunReport, TradeEngine};
pub use state::{Position, PositionState};
