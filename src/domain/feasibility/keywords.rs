//! Keyword-based qualitative classification of idea descriptions.
//!
//! Each ruleset is an ordered list of `(level, keywords)` pairs. Levels are
//! tested in declared order and the first level with any substring hit wins,
//! so the order of `rules` is part of the configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::domain::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualitativeLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for QualitativeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualitativeLevel::High => write!(f, "high"),
            QualitativeLevel::Medium => write!(f, "medium"),
            QualitativeLevel::Low => write!(f, "low"),
        }
    }
}

/// Numeric value assigned to each qualitative level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelScale {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl LevelScale {
    /// "High" is undesirable (complexity, competition)
    pub const PENALIZING: LevelScale = LevelScale {
        high: 0.3,
        medium: 0.6,
        low: 0.9,
    };

    /// "High" is desirable (scalability)
    pub const REWARDING: LevelScale = LevelScale {
        high: 0.9,
        medium: 0.6,
        low: 0.3,
    };

    pub fn value(&self, level: QualitativeLevel) -> f64 {
        match level {
            QualitativeLevel::High => self.high,
            QualitativeLevel::Medium => self.medium,
            QualitativeLevel::Low => self.low,
        }
    }
}

/// Ethical-impact buckets, split into a negative and a positive ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EthicalLevel {
    HighRisk,
    MediumRisk,
    LowRisk,
    HighBenefit,
    MediumBenefit,
    LowBenefit,
    Neutral,
}

impl EthicalLevel {
    pub fn score(&self) -> f64 {
        match self {
            EthicalLevel::HighRisk => 0.0,
            EthicalLevel::MediumRisk => 0.2,
            EthicalLevel::LowRisk => 0.3,
            EthicalLevel::HighBenefit => 0.9,
            EthicalLevel::MediumBenefit => 0.7,
            EthicalLevel::LowBenefit | EthicalLevel::Neutral => 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule<L> {
    pub level: L,
    pub keywords: Vec<String>,
}

impl<L> KeywordRule<L> {
    pub fn new(level: L, keywords: &[&str]) -> Self {
        Self {
            level,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Keywords are compared verbatim against the lowercased text, so a
    /// keyword containing uppercase letters never matches.
    fn matches(&self, folded_text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| folded_text.contains(keyword.as_str()))
    }
}

/// First level (in declared order) whose keywords hit `folded_text`.
fn first_match<L: Copy>(rules: &[KeywordRule<L>], folded_text: &str) -> Option<L> {
    rules
        .iter()
        .find(|rule| rule.matches(folded_text))
        .map(|rule| rule.level)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRuleset<L> {
    pub rules: Vec<KeywordRule<L>>,
    pub default: L,
}

impl<L: Copy> KeywordRuleset<L> {
    pub fn classify(&self, text: &str) -> L {
        let folded = text.to_lowercase();
        first_match(&self.rules, &folded).unwrap_or(self.default)
    }
}

/// Ethical-impact rules. The negative ladder always takes priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthicalRules {
    pub negative: Vec<KeywordRule<EthicalLevel>>,
    pub positive: Vec<KeywordRule<EthicalLevel>>,
    pub default: EthicalLevel,
}

impl EthicalRules {
    pub fn classify(&self, text: &str) -> EthicalLevel {
        let folded = text.to_lowercase();
        first_match(&self.negative, &folded)
            .or_else(|| first_match(&self.positive, &folded))
            .unwrap_or(self.default)
    }
}

/// The full keyword configuration injected into the scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRules {
    pub complexity: KeywordRuleset<QualitativeLevel>,
    pub competition: KeywordRuleset<QualitativeLevel>,
    pub scalability: KeywordRuleset<QualitativeLevel>,
    pub ethics: EthicalRules,
}

impl KeywordRules {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::KeywordRules {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&raw).map_err(|e| ConfigError::KeywordRules {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl Default for KeywordRules {
    fn default() -> Self {
        use EthicalLevel::*;
        use QualitativeLevel::*;

        Self {
            complexity: KeywordRuleset {
                rules: vec![
                    KeywordRule::new(
                        High,
                        &[
                            "AI",
                            "machine learning",
                            "artificial intelligence",
                            "cybersecurity",
                            "blockchain",
                        ],
                    ),
                    KeywordRule::new(
                        Medium,
                        &["platform", "software", "system", "cloud", "digital"],
                    ),
                    KeywordRule::new(Low, &["consulting", "service", "training", "education"]),
                ],
                default: Medium,
            },
            competition: KeywordRuleset {
                rules: vec![
                    KeywordRule::new(
                        High,
                        &["software", "platform", "system", "CRM", "management"],
                    ),
                    KeywordRule::new(
                        Medium,
                        &["consulting", "service", "training", "education"],
                    ),
                    KeywordRule::new(Low, &["specialized", "niche", "unique", "innovative"]),
                ],
                default: Medium,
            },
            scalability: KeywordRuleset {
                rules: vec![
                    KeywordRule::new(
                        High,
                        &["software", "platform", "system", "cloud", "digital"],
                    ),
                    KeywordRule::new(Medium, &["consulting", "service", "training"]),
                    KeywordRule::new(Low, &["local", "physical", "brick-and-mortar"]),
                ],
                default: Medium,
            },
            ethics: EthicalRules {
                negative: vec![
                    KeywordRule::new(
                        HighRisk,
                        &[
                            "bankrupt",
                            "scam",
                            "fraud",
                            "deceptive",
                            "harmful",
                            "dangerous",
                            "illegal",
                            "bad way",
                        ],
                    ),
                    KeywordRule::new(
                        MediumRisk,
                        &[
                            "controversial",
                            "unethical",
                            "exploitative",
                            "manipulative",
                            "risky",
                        ],
                    ),
                    KeywordRule::new(LowRisk, &["questionable", "borderline", "uncertain"]),
                ],
                positive: vec![
                    KeywordRule::new(
                        HighBenefit,
                        &[
                            "sustainable",
                            "ethical",
                            "helpful",
                            "beneficial",
                            "improve",
                            "support",
                            "efficiently",
                        ],
                    ),
                    KeywordRule::new(
                        MediumBenefit,
                        &["efficient", "convenient", "innovative", "modern", "manage"],
                    ),
                    KeywordRule::new(LowBenefit, &["basic", "standard", "traditional"]),
                ],
                default: Neutral,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_declared_level_wins() {
        let rules = KeywordRules::default();
        // "blockchain" is high complexity and must beat "software" (medium)
        assert_eq!(
            rules.complexity.classify("Blockchain powered software"),
            QualitativeLevel::High
        );
        assert_eq!(
            rules.complexity.classify("Accounting software"),
            QualitativeLevel::Medium
        );
        assert_eq!(
            rules.competition.classify("Accounting software"),
            QualitativeLevel::High
        );
    }

    #[test]
    fn test_text_is_folded_before_substring_match() {
        let rules = KeywordRules::default();
        assert_eq!(
            rules.complexity.classify("A CLOUD Backup Service"),
            QualitativeLevel::Medium
        );
        assert_eq!(
            rules.scalability.classify("Brick-and-Mortar bookshop"),
            QualitativeLevel::Low
        );
        // substring, not word, matching: "service" inside "self-services"
        assert_eq!(
            rules.scalability.classify("Self-services kiosk"),
            QualitativeLevel::Medium
        );
    }

    #[test]
    fn test_uppercase_default_keywords_are_inert() {
        let rules = KeywordRules::default();
        assert_eq!(
            rules.complexity.classify("An AI tutor"),
            QualitativeLevel::Medium
        );
        assert_eq!(
            rules.competition.classify("A CRM for plumbers"),
            QualitativeLevel::Medium
        );
        // would otherwise hit "ai" inside "sustainable"
        assert_eq!(
            rules.complexity.classify("A sustainable app"),
            QualitativeLevel::Medium
        );
    }

    #[test]
    fn test_no_match_falls_back_to_default() {
        let rules = KeywordRules::default();
        assert_eq!(rules.scalability.classify(""), QualitativeLevel::Medium);
        assert_eq!(
            rules.scalability.classify("A bakery on main street"),
            QualitativeLevel::Medium
        );
        assert_eq!(rules.ethics.classify(""), EthicalLevel::Neutral);
    }

    #[test]
    fn test_negative_ladder_beats_positive() {
        let rules = KeywordRules::default();
        let level = rules
            .ethics
            .classify("A sustainable scheme to help people go bankrupt");
        assert_eq!(level, EthicalLevel::HighRisk);
        assert_eq!(level.score(), 0.0);

        // "unethical" contains "ethical" but the negative ladder runs first
        assert_eq!(
            rules.ethics.classify("An unethical marketplace"),
            EthicalLevel::MediumRisk
        );
    }

    #[test]
    fn test_positive_ladder_order() {
        let rules = KeywordRules::default();
        // "efficiently" (high benefit) also contains "efficient" (medium)
        assert_eq!(
            rules.ethics.classify("Manage finances efficiently"),
            EthicalLevel::HighBenefit
        );
        assert_eq!(
            rules.ethics.classify("A convenient laundry pickup"),
            EthicalLevel::MediumBenefit
        );
        assert_eq!(
            rules.ethics.classify("A traditional barbershop"),
            EthicalLevel::LowBenefit
        );
    }

    #[test]
    fn test_level_scales() {
        assert_eq!(LevelScale::PENALIZING.value(QualitativeLevel::High), 0.3);
        assert_eq!(LevelScale::PENALIZING.value(QualitativeLevel::Low), 0.9);
        assert_eq!(LevelScale::REWARDING.value(QualitativeLevel::High), 0.9);
        assert_eq!(LevelScale::REWARDING.value(QualitativeLevel::Medium), 0.6);
    }

    #[test]
    fn test_rules_round_trip_through_toml() {
        let defaults = KeywordRules::default();
        let raw = toml::to_string(&defaults).unwrap();
        let parsed = KeywordRules::from_toml_str(&raw).unwrap();
        assert_eq!(parsed, defaults);
    }

    #[test]
    fn test_custom_rules_from_toml() {
        let raw = r#"
            [complexity]
            default = "low"
            [[complexity.rules]]
            level = "high"
            keywords = ["quantum"]

            [competition]
            default = "medium"
            rules = []

            [scalability]
            default = "medium"
            rules = []

            [ethics]
            default = "neutral"
            positive = []
            [[ethics.negative]]
            level = "high_risk"
            keywords = ["pyramid"]
        "#;
        let rules = KeywordRules::from_toml_str(raw).unwrap();
        assert_eq!(
            rules.complexity.classify("Quantum bakery"),
            QualitativeLevel::High
        );
        assert_eq!(rules.complexity.classify("Bakery"), QualitativeLevel::Low);
        assert_eq!(
            rules.ethics.classify("A pyramid scheme"),
            EthicalLevel::HighRisk
        );
    }
}
