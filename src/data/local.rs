//! JSON-file-backed market data provider.
//!
//! Reads staged files from a data directory:
//! - `series.json` — array of bars with a `vix_close` field per bar
//! - `expiries.json` — array of ISO dates
//! - `chain_YYYY-MM-DD.json` — put chain for one expiry
//!
//! Intended for paper runs and testing; a network-backed provider would
//! implement the same trait.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::provider::{MarketDataError, MarketDataProvider};
use super::types::{AlignedBar, PutChain};

pub struct LocalDataProvider {
    data_dir: PathBuf,
}

impl LocalDataProvider {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, name: &str) -> Result<T, MarketDataError> {
        let path = self.data_dir.join(name);
        if !path.exists() {
            return Err(MarketDataError::Unavailable(format!(
                "{} not found",
                path.display()
            )));
        }
        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|e| MarketDataError::Malformed(format!("{}: {}", path.display(), e)))
    }
}

impl MarketDataProvider for LocalDataProvider {
    fn fetch_aligned_bars(
        &self,
        underlying: &str,
        _volatility: &str,
        _lookback_days: i64,
    ) -> Result<Vec<AlignedBar>, MarketDataError> {
        let bars: Vec<AlignedBar> = self.read_json("series.json")?;
        if bars.is_empty() {
            return Err(MarketDataError::Empty(underlying.to_string()));
        }
        Ok(bars)
    }

    fn fetch_expiries(&self, symbol: &str) -> Result<Vec<NaiveDate>, MarketDataError> {
        let mut expiries: Vec<NaiveDate> = self.read_json("expiries.json")?;
        if expiries.is_empty() {
            return Err(MarketDataError::Empty(symbol.to_string()));
        }
        expiries.sort();
        Ok(expiries)
    }

    fn fetch_put_chain(
        &self,
        _symbol: &str,
        expiry: NaiveDate,
    ) -> Result<PutChain, MarketDataError> {
        self.read_json(&format!("chain_{}.json", expiry.format("%Y-%m-%d")))
    }
}
