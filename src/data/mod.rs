//! Market data model and provider seam.
//!
//! Defines the bar/volatility/options types consumed by the decision engine
//! and the [`MarketDataProvider`] trait that abstracts where they come from.
//! A JSON-file-backed implementation is provided for paper runs against
//! locally staged data.

pub mod local;
pub mod provider;
pub mod types;

pub use local::LocalDataProvider;
pub use provider::{MarketDataError, MarketDataProvider};
pub use types::{
    align_volatility, AlignedBar, Bar, IndicatorBar, MarketSnapshot, OptionQuote, PutChain,
    VolatilityPoint,
};
