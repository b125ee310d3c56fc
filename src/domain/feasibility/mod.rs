//! Feasibility scoring: keyword classification, normalization, weighting
//! and categorical labels.

pub mod assessment;
pub mod characteristics;
pub mod keywords;
pub mod labels;
pub mod scorer;

pub use assessment::{Assessment, DegradedReason, FeasibilityResult};
pub use characteristics::{FeatureWeights, NormalizationMode};
pub use keywords::KeywordRules;
pub use labels::{MarketOutlook, RiskLevel, SentimentLabel};
pub use scorer::{FeasibilityScorer, IdeaInput, RankedIdea};
