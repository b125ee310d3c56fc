pub mod market_analysis;
pub mod yahoo_finance;

pub use market_analysis::LiveMarketAnalysisService;
pub use yahoo_finance::YahooPriceHistory;
