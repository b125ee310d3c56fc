pub mod newsapi;
pub mod sentiment_analyzer;

pub use newsapi::NewsApiClient;
pub use sentiment_analyzer::SentimentAnalyzer;
