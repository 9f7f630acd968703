//! Position state for the single strategy slot.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An open bull put spread.
///
/// `sell_strike` is the higher (nearer-the-money) strike sold; `buy_strike`
/// is the lower protective strike, so `buy_strike <= sell_strike`.
/// `credit_received` is the net premium collected at entry, already scaled
/// by lot size and allocation multiplier, and is always positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub entry_date: NaiveDateTime,
    pub expiry: NaiveDate,
    pub sell_strike: Decimal,
    pub buy_strike: Decimal,
    pub credit_received: Decimal,
}

impl Position {
    /// Whether the position has reached its expiry date.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today >= self.expiry
    }
}

/// The strategy slot: flat or holding exactly one position.
///
/// Modeled as a tagged variant so a second concurrent position is
/// unrepresentable.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PositionState {
    #[default]
    Flat,
    Open(Position),
}

impl PositionState {
    pub fn is_flat(&self) -> bool {
        matches!(self, Self::Flat)
    }

    pub fn as_open(&self) -> Option<&Position> {
        match self {
            Self::Open(position) => Some(position),
            Self::Flat => None,
        }
    }
}
