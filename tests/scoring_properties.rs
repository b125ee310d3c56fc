use ideaforge::domain::feasibility::{
    Assessment, FeasibilityScorer, IdeaInput, MarketOutlook, RiskLevel, SentimentLabel,
};
use ideaforge::domain::market::MarketSnapshot;
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "a", "mobile", "app", "platform", "local", "sustainable", "scam", "bakery", "cloud",
    "manufacturing", "consulting", "blockchain", "physical", "unique", "marketplace", "education",
    "questionable", "for", "students",
];

fn idea_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..12).prop_map(|w| w.join(" "))
}

fn snapshot() -> impl Strategy<Value = MarketSnapshot> {
    (-2.0f64..2.0, 0.0f64..50.0, -1.5f64..1.5)
        .prop_map(|(trend, vol, sentiment)| MarketSnapshot::new(trend, vol, sentiment))
}

const OUTLOOKS: [&str; 5] = ["Very Negative", "Negative", "Neutral", "Positive", "Very Positive"];
const RISKS: [&str; 5] = ["Very Low", "Low", "Moderate", "High", "Very High"];

proptest! {
    #[test]
    fn score_is_bounded_and_labels_valid(
        idea in idea_text(),
        investment in 0.0f64..1e9,
        roi in -5.0f64..5.0,
        snapshot in snapshot(),
    ) {
        let scorer = FeasibilityScorer::default();
        let assessment = scorer.assess(&idea, investment, roi, &snapshot);

        let result = match &assessment {
            Assessment::Scored(result) => result,
            Assessment::Degraded { .. } => panic!("valid inputs degraded: {:?}", assessment),
        };
        prop_assert!((0.0..=100.0).contains(&result.score));
        prop_assert!(OUTLOOKS.contains(&result.market_outlook.to_string().as_str()));
        prop_assert!(RISKS.contains(&result.risk_level.to_string().as_str()));
        prop_assert!(OUTLOOKS.contains(&result.sentiment.to_string().as_str()));
    }

    #[test]
    fn scoring_is_deterministic(idea in idea_text(), snapshot in snapshot()) {
        let scorer = FeasibilityScorer::default();
        prop_assert_eq!(
            scorer.assess(&idea, 1000.0, 0.1, &snapshot),
            scorer.assess(&idea, 1000.0, 0.1, &snapshot)
        );
    }

    #[test]
    fn harmful_ideas_always_score_twenty(prefix in idea_text(), snapshot in snapshot()) {
        let idea = format!("{} scam", prefix);
        let result = FeasibilityScorer::default().assess(&idea, f64::NAN, 0.1, &snapshot);
        prop_assert_eq!(result.score(), 20.0);
        let expected = Assessment::Scored(ideaforge::domain::feasibility::FeasibilityResult {
            score: 20.0,
            market_outlook: MarketOutlook::VeryNegative,
            risk_level: RiskLevel::VeryHigh,
            sentiment: SentimentLabel::VeryNegative,
        });
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn batch_is_sorted_descending(
        ideas in prop::collection::vec((idea_text(), 0.0f64..1e6, -1.0f64..1.0), 0..8),
        snapshot in snapshot(),
    ) {
        let inputs: Vec<IdeaInput> = ideas
            .into_iter()
            .map(|(idea, inv, roi)| IdeaInput::new(idea, inv, roi))
            .collect();
        let ranked = FeasibilityScorer::default().assess_batch(&inputs, &snapshot);
        prop_assert_eq!(ranked.len(), inputs.len());
        prop_assert!(ranked
            .windows(2)
            .all(|w| w[0].assessment.score() >= w[1].assessment.score()));
    }
}
