//! Bull put spread selection.
//!
//! Derives target strikes from spot and moneyness, picks the nearest expiry
//! inside the DTE window, and prices the candidate from the put chain.

pub mod selector;

pub use selector::{SpreadCandidate, SpreadSelector, SpreadSelectorConfig};
