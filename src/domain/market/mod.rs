pub mod snapshot;

pub use snapshot::{MarketAnalysis, MarketSnapshot, SnapshotSource};
