//! Durable state: portfolio ledger and append-only trade log.
//!
//! The ledger is a single JSON file holding cash and the (at most one) open
//! position. Loading is deliberately tolerant: a missing, empty, or corrupt
//! file never fails a run. The trade log is a JSON-lines file that is only
//! ever appended to.

pub mod store;
pub mod trade_log;

pub use store::{Portfolio, PortfolioStore, StoreError};
pub use trade_log::{ExitReason, TradeLog, TradeRecord};
