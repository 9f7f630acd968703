pub mod data;
pub mod engine;
pub mod portfolio;
pub mod risk;
pub mod signal;
pub mod spread;

// Re-export commonly used types
pub use data::{
    AlignedBar, Bar, MarketDataError, MarketDataProvider, MarketSnapshot, OptionQuote, PutChain,
};
pub use engine::{
    EngineError, Position, PositionState, RunAction, RunReport, StrategyConfig, TradeEngine,
};
pub use portfolio::{ExitReason, Portfolio, PortfolioStore, TradeLog, TradeRecord};
pub use risk::AllocationConfig;
pub use signal::CrossoverDetector;
pub use spread::{SpreadCandidate, SpreadSelector, SpreadSelectorConfig};
