//! Headline polarity scoring using VADER
//!
//! Scores industry news text in [-1.0, 1.0] by combining VADER's compound
//! score with a small business-vocabulary boost.
//!
//! # Example
//! ```rust,ignore
//! use ideaforge::infrastructure::news::sentiment_analyzer::SentimentAnalyzer;
//!
//! let analyzer = SentimentAnalyzer::new();
//! let score = analyzer.analyze("Healthcare startups see record growth");
//! assert!(score > 0.0);
//! ```

use vader_sentiment::SentimentIntensityAnalyzer;

/// Business keywords VADER's general lexicon underweights
const POSITIVE_KEYWORDS: &[(&str, f64)] = &[
    ("growth", 0.3),
    ("expansion", 0.3),
    ("record high", 0.4),
    ("record revenue", 0.4),
    ("profit", 0.3),
    ("profitable", 0.3),
    ("surge", 0.4),
    ("rally", 0.3),
    ("boom", 0.4),
    ("funding round", 0.3),
    ("raises", 0.2),
    ("acquisition", 0.2),
    ("partnership", 0.2),
    ("breakthrough", 0.4),
    ("adoption", 0.2),
    ("demand", 0.2),
    ("outperform", 0.3),
    ("upgrade", 0.3),
];

const NEGATIVE_KEYWORDS: &[(&str, f64)] = &[
    ("layoffs", -0.4),
    ("layoff", -0.4),
    ("bankruptcy", -0.5),
    ("recession", -0.4),
    ("downturn", -0.4),
    ("slump", -0.4),
    ("decline", -0.3),
    ("plunge", -0.5),
    ("crash", -0.5),
    ("lawsuit", -0.4),
    ("fine", -0.2),
    ("probe", -0.3),
    ("recall", -0.3),
    ("breach", -0.4),
    ("shortage", -0.3),
    ("downgrade", -0.3),
    ("fraud", -0.5),
    ("sell-off", -0.4),
];

/// A thread-safe sentiment analyzer using VADER with business boosting.
pub struct SentimentAnalyzer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    fn keyword_boost(&self, text: &str) -> f64 {
        let text_lower = text.to_lowercase();
        let mut boost = 0.0;

        for (keyword, score) in POSITIVE_KEYWORDS.iter().chain(NEGATIVE_KEYWORDS) {
            if text_lower.contains(keyword) {
                boost += score;
            }
        }

        boost
    }

    /// Analyze text and return a sentiment score between -1.0 and 1.0.
    pub fn analyze(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let scores = self.analyzer.polarity_scores(text);
        let vader_score = scores["compound"];

        let combined = vader_score + (self.keyword_boost(text) * 0.5);
        combined.clamp(-1.0, 1.0)
    }

    /// Mean polarity over a set of texts; 0.0 when there are none
    pub fn mean_polarity<'a, I>(&self, texts: I) -> f64
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (sum, count) = texts
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), text| {
                (sum + self.analyze(text), count + 1)
            });
        if count == 0 { 0.0 } else { sum / count as f64 }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
