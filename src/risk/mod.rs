//! Risk management module.
//!
//! Volatility-conditioned allocation: full size in calm regimes, reduced
//! size when the volatility index is elevated.

pub mod allocation;

pub use allocation::AllocationConfig;
