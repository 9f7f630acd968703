//! Trend-following entry signal.
//!
//! Simple moving averages over the close series plus fresh-crossover
//! detection on the truncated snapshot.

pub mod crossover;

pub use crossover::{sma, CrossoverDetector};
