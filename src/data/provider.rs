//! Provider trait for market data.
//!
//! The engine never talks to a feed directly; it consumes this trait. A
//! failure fetching the underlying/volatility series is fatal to the run,
//! while failures on the options path only suppress entry evaluation.

use chrono::NaiveDate;
use thiserror::Error;

use super::types::{AlignedBar, PutChain};

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("no data returned for {0}")]
    Empty(String),

    #[error("data source unavailable: {0}")]
    Unavailable(String),

    #[error("malformed data: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of underlying bars, expiries, and put chains.
///
/// Implementations must return bars in a single timezone with strictly
/// increasing timestamps, and the volatility reading already forward-filled
/// per day onto each bar.
pub trait MarketDataProvider {
    /// Fetch the underlying bar series annotated with the volatility index,
    /// covering at least `lookback_days` of history.
    fn fetch_aligned_bars(
        &self,
        underlying: &str,
        volatility: &str,
        lookback_days: i64,
    ) -> Result<Vec<AlignedBar>, MarketDataError>;

    /// All expiry dates currently listed for the symbol, ascending.
    fn fetch_expiries(&self, symbol: &str) -> Result<Vec<NaiveDate>, MarketDataError>;

    /// Put-side chain for one expiry.
    fn fetch_put_chain(&self, symbol: &str, expiry: NaiveDate)
        -> Result<PutChain, MarketDataError>;
}
