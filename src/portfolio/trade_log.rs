//! Append-only trade log.
//!
//! One JSON line per lifecycle transition. Records are never read back by
//! the engine and never mutated after append.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::store::StoreError;

/// Why a position was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitReason {
    /// Position reached its expiry date.
    Expiry,
}

/// Economics of a single lifecycle transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TradeRecord {
    Entry {
        date: NaiveDateTime,
        expiry: NaiveDate,
        sell_strike: Decimal,
        buy_strike: Decimal,
        credit: Decimal,
    },
    Exit {
        date: NaiveDateTime,
        pnl: Decimal,
        reason: ExitReason,
    },
}

/// JSON-lines trade log, created on first append.
pub struct TradeLog {
    path: PathBuf,
}

impl TradeLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Append one record. Prior lines are never touched.
    pub fn append(&self, record: &TradeRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(record)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry_record() -> TradeRecord {
        TradeRecord::Entry {
            date: NaiveDate::from_ymd_opt(2024, 3, 4)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            expiry: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            sell_strike: dec!(48000),
            buy_strike: dec!(47500),
            credit: dec!(1200),
        }
    }

    #[test]
    fn test_append_creates_and_preserves_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tradelog.jsonl");
        let log = TradeLog::new(&path);

        log.append(&entry_record()).unwrap();
        log.append(&TradeRecord::Exit {
            date: NaiveDate::from_ymd_opt(2024, 3, 7)
                .unwrap()
                .and_hms_opt(15, 15, 0)
                .unwrap(),
            pnl: dec!(1160),
            reason: ExitReason::Expiry,
        })
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"event\":\"entry\""));
        assert!(lines[1].contains("\"event\":\"exit\""));
    }
}
