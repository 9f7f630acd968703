//! Core data types for the live spread engine.
//!
//! Bars carry intraday timestamps; the volatility index is a daily series
//! that gets forward-filled onto bar timestamps before the engine sees it.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single underlying bar (e.g., one 15-minute candle).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: NaiveDateTime,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: i64,
}

/// One daily closing value of the volatility index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VolatilityPoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// An underlying bar annotated with the volatility reading in effect at its
/// timestamp (daily value, forward-filled).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignedBar {
    #[serde(flatten)]
    pub bar: Bar,
    pub vix_close: f64,
}

/// Forward-fill a daily volatility series onto bar timestamps.
///
/// For each bar, takes the most recent volatility point dated on or before
/// the bar's date. Bars earlier than the first volatility point are dropped
/// (no reading can be attributed to them). Both inputs must be sorted
/// ascending.
pub fn align_volatility(bars: &[Bar], vix: &[VolatilityPoint]) -> Vec<AlignedBar> {
    let mut aligned = Vec::with_capacity(bars.len());
    let mut vi = 0usize;

    for bar in bars {
        let bar_date = bar.timestamp.date();
        while vi + 1 < vix.len() && vix[vi + 1].date <= bar_date {
            vi += 1;
        }
        if vix.is_empty() || vix[vi].date > bar_date {
            continue;
        }
        aligned.push(AlignedBar {
            bar: bar.clone(),
            vix_close: vix[vi].close,
        });
    }

    aligned
}

/// A bar with both moving averages attached.
#[derive(Debug, Clone)]
pub struct IndicatorBar {
    pub timestamp: NaiveDateTime,
    pub close: Decimal,
    pub short_ma: Decimal,
    pub long_ma: Decimal,
    pub vix_close: f64,
}

/// Time-ordered bar series with indicators computed, truncated so that every
/// element has both moving averages defined.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    pub bars: Vec<IndicatorBar>,
}

impl MarketSnapshot {
    /// Annotate an aligned bar series with short/long simple moving averages
    /// and drop the warmup prefix where either average is undefined.
    pub fn compute(aligned: &[AlignedBar], short_window: usize, long_window: usize) -> Self {
        let closes: Vec<Decimal> = aligned.iter().map(|a| a.bar.close).collect();
        let short = crate::signal::sma(&closes, short_window);
        let long = crate::signal::sma(&closes, long_window);

        let bars = aligned
            .iter()
            .zip(short.iter().zip(long.iter()))
            .filter_map(|(a, (s, l))| {
                Some(IndicatorBar {
                    timestamp: a.bar.timestamp,
                    close: a.bar.close,
                    short_ma: (*s)?,
                    long_ma: (*l)?,
                    vix_close: a.vix_close,
                })
            })
            .collect();

        Self { bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// The most recent bar, if any survived truncation.
    pub fn latest(&self) -> Option<&IndicatorBar> {
        self.bars.last()
    }
}

/// A put quote: strike and last traded price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionQuote {
    pub strike: Decimal,
    pub last_price: Decimal,
}

/// Put-side chain for a single expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutChain {
    pub expiry: NaiveDate,
    pub puts: Vec<OptionQuote>,
}

impl PutChain {
    /// Find a put at an exact strike.
    pub fn put_at_strike(&self, strike: Decimal) -> Option<&OptionQuote> {
        self.puts.iter().find(|q| q.strike == strike)
    }
}
