//! Moving-average crossover detection.
//!
//! A bullish crossover at bar T holds iff short_ma[T] > long_ma[T] and
//! short_ma[T-1] <= long_ma[T-1], where T-1 is the previous element of the
//! truncated snapshot. Only a crossover at the *final* bar counts as a
//! signal; historical crossovers inside the window are ignored.

use rust_decimal::Decimal;

use crate::data::MarketSnapshot;

/// Simple moving average over a Decimal series.
///
/// Returns one slot per input element; `None` until the window has filled.
/// A zero window yields all `None`.
pub fn sma(series: &[Decimal], window: usize) -> Vec<Option<Decimal>> {
    if window == 0 {
        return vec![None; series.len()];
    }

    let divisor = Decimal::from(window as u64);
    let mut out = Vec::with_capacity(series.len());
    let mut running = Decimal::ZERO;

    for (i, value) in series.iter().enumerate() {
        running += value;
        if i >= window {
            running -= series[i - window];
        }
        if i + 1 >= window {
            out.push(Some(running / divisor));
        } else {
            out.push(None);
        }
    }

    out
}

/// Detects a fresh bullish crossover at the latest bar of a snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossoverDetector;

impl CrossoverDetector {
    /// True iff the short average crossed above the long average exactly at
    /// the snapshot's final bar. Fewer than two bars → no signal possible.
    pub fn is_fresh_bullish_crossover(&self, snapshot: &MarketSnapshot) -> bool {
        let n = snapshot.bars.len();
        if n < 2 {
            return false;
        }
        let last = &snapshot.bars[n - 1];
        let prev = &snapshot.bars[n - 2];

        last.short_ma > last.long_ma && prev.short_ma <= prev.long_ma
    }
}
