//! Portfolio ledger persisted as a JSON file.
//!
//! Loading trades safety for availability: a missing or empty file yields
//! the default state, unparseable JSON yields the default state, and a
//! holdings record missing any required field is discarded with a warning
//! rather than partially trusted. Saving overwrites the whole file.

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::engine::{Position, PositionState};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Cash balance plus the single strategy slot.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub cash: Decimal,
    pub holdings: PositionState,
}

impl Portfolio {
    pub fn new(cash: Decimal) -> Self {
        Self {
            cash,
            holdings: PositionState::Flat,
        }
    }
}

/// On-disk shape of the ledger file.
#[derive(Serialize, Deserialize)]
struct LedgerFile {
    cash: Decimal,
    holdings: Option<Position>,
}

/// JSON-file-backed portfolio store.
pub struct PortfolioStore {
    path: PathBuf,
}

impl PortfolioStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the portfolio, falling back to `default_cash` and no holdings on
    /// any integrity problem. Never fails the run.
    pub fn load(&self, default_cash: Decimal) -> Portfolio {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) if !c.trim().is_empty() => c,
            _ => return Portfolio::new(default_cash),
        };

        let value: serde_json::Value = match serde_json::from_str(&content) {
            Ok(v) => v,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable ledger file, starting fresh");
                return Portfolio::new(default_cash);
            }
        };

        let cash = value
            .get("cash")
            .and_then(|v| serde_json::from_value::<Decimal>(v.clone()).ok())
            .unwrap_or(default_cash);

        let holdings = match value.get("holdings") {
            None | Some(serde_json::Value::Null) => PositionState::Flat,
            Some(raw) => match serde_json::from_value::<Position>(raw.clone()) {
                Ok(position) => PositionState::Open(position),
                Err(e) => {
                    warn!(error = %e, "incomplete holdings record, resetting to flat");
                    PositionState::Flat
                }
            },
        };

        Portfolio { cash, holdings }
    }

    /// Persist the portfolio, overwriting the previous file. Writes to a
    /// sibling temp file and renames so a crash mid-write cannot leave a
    /// truncated ledger.
    pub fn save(&self, portfolio: &Portfolio) -> Result<(), StoreError> {
        let file = LedgerFile {
            cash: portfolio.cash,
            holdings: portfolio.holdings.as_open().cloned(),
        };
        let content = serde_json::to_string_pretty(&file)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
