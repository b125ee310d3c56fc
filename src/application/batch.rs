//! CSV batch scoring.
//!
//! Input needs an `idea` column (any case); `initial_investment`,
//! `target_roi`, `industry` and `target_market` are optional and default to
//! 0 / "". Output repeats the input columns and appends the `out_*` columns
//! in input order.

use crate::application::advisor::BusinessAdvisor;
use crate::domain::errors::AssessmentError;
use crate::domain::feasibility::{Assessment, FeasibilityResult, IdeaInput};
use crate::domain::market::MarketSnapshot;
use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::collections::HashMap;
use std::io::{Read, Write};
use tracing::info;

pub const OUTPUT_HEADERS: [&str; 10] = [
    "idea",
    "initial_investment",
    "target_roi",
    "industry",
    "target_market",
    "out_score",
    "out_market_outlook",
    "out_risk_level",
    "out_sentiment",
    "out_status",
];

/// One input row, financial cells already parsed
#[derive(Debug, Clone)]
pub struct BatchRecord {
    pub idea: String,
    pub initial_investment: String,
    pub target_roi: String,
    pub industry: String,
    pub target_market: String,
    financials: Result<(f64, f64), AssessmentError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchRow {
    pub idea: String,
    pub initial_investment: String,
    pub target_roi: String,
    pub industry: String,
    pub target_market: String,
    pub assessment: Assessment,
}

impl BatchRow {
    fn to_record(&self) -> [String; 10] {
        [
            self.idea.clone(),
            self.initial_investment.clone(),
            self.target_roi.clone(),
            self.industry.clone(),
            self.target_market.clone(),
            format!("{:.2}", self.assessment.score()),
            self.assessment.market_outlook_label(),
            self.assessment.risk_level_label(),
            self.assessment.sentiment_label(),
            self.assessment.status(),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub scored: usize,
    pub degraded: usize,
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    idea: usize,
    initial_investment: Option<usize>,
    target_roi: Option<usize>,
    industry: Option<usize>,
    target_market: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
        let Some(idea) = find("idea") else {
            bail!("CSV input has no 'idea' column (headers: {:?})", headers);
        };
        Ok(Self {
            idea,
            initial_investment: find("initial_investment"),
            target_roi: find("target_roi"),
            industry: find("industry"),
            target_market: find("target_market"),
        })
    }
}

fn cell(record: &StringRecord, index: Option<usize>) -> String {
    index
        .and_then(|i| record.get(i))
        .unwrap_or_default()
        .to_string()
}

fn parse_number(field: &str, raw: &str) -> Result<f64, AssessmentError> {
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse::<f64>()
        .map_err(|e| AssessmentError::invalid_input(field, format!("'{}': {}", raw, e)))
}

/// Parse every row of a CSV document.
///
/// Only structural problems (unreadable CSV, missing `idea` column) fail the
/// whole read; unparseable numbers are kept on the row for later.
pub fn read_records<R: Read>(input: R) -> Result<Vec<BatchRecord>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);
    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let columns = Columns::locate(&headers)?;

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("Failed to read CSV row {}", line + 1))?;
        let initial_investment = cell(&row, columns.initial_investment);
        let target_roi = cell(&row, columns.target_roi);
        let financials = parse_number("initial_investment", &initial_investment)
            .and_then(|inv| Ok((inv, parse_number("target_roi", &target_roi)?)));

        records.push(BatchRecord {
            idea: cell(&row, Some(columns.idea)),
            initial_investment,
            target_roi,
            industry: cell(&row, columns.industry),
            target_market: cell(&row, columns.target_market),
            financials,
        });
    }
    Ok(records)
}

pub fn write_rows<W: Write>(rows: &[BatchRow], output: W) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(output);
    writer.write_record(OUTPUT_HEADERS)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }
    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

pub struct BatchAssessor<'a> {
    advisor: &'a BusinessAdvisor,
}

impl<'a> BatchAssessor<'a> {
    pub fn new(advisor: &'a BusinessAdvisor) -> Self {
        Self { advisor }
    }

    /// Score records in input order, one market lookup per distinct industry.
    ///
    /// The whole file is one normalization batch: every parseable row is
    /// scored in a single pass against its own industry's snapshot.
    pub async fn assess(&self, records: Vec<BatchRecord>) -> Vec<BatchRow> {
        let mut snapshots: HashMap<&str, MarketSnapshot> = HashMap::new();
        for record in records.iter().filter(|r| r.financials.is_ok()) {
            let industry = record.industry.as_str();
            if !snapshots.contains_key(industry) {
                let analysis = self.advisor.market_analysis(industry).await;
                snapshots.insert(industry, analysis.snapshot);
            }
        }

        let mut indices = Vec::new();
        let mut inputs = Vec::new();
        for (i, record) in records.iter().enumerate() {
            if let (Ok((inv, roi)), Some(snapshot)) =
                (&record.financials, snapshots.get(record.industry.as_str()))
            {
                indices.push(i);
                inputs.push((IdeaInput::new(record.idea.clone(), *inv, *roi), *snapshot));
            }
        }

        let scorer = self.advisor.scorer();
        let mut assessments: Vec<Option<Assessment>> = vec![None; records.len()];
        for (i, assessment) in indices.into_iter().zip(scorer.assess_with_snapshots(&inputs)) {
            assessments[i] = Some(assessment);
        }

        records
            .into_iter()
            .zip(assessments)
            .map(|(record, assessment)| {
                let assessment = match (assessment, record.financials) {
                    (Some(a), _) => a,
                    // ethics outranks unparseable numbers, as in the scorer
                    (None, Err(_)) if scorer.is_harmful(&record.idea) => {
                        Assessment::Scored(FeasibilityResult::harmful())
                    }
                    (None, Err(e)) => Assessment::degraded(e),
                    (None, Ok(_)) => Assessment::degraded(AssessmentError::Computation {
                        reason: "row was not scored".to_string(),
                    }),
                };
                BatchRow {
                    idea: record.idea,
                    initial_investment: record.initial_investment,
                    target_roi: record.target_roi,
                    industry: record.industry,
                    target_market: record.target_market,
                    assessment,
                }
            })
            .collect()
    }

    pub async fn run<R: Read, W: Write>(&self, input: R, output: W) -> Result<BatchSummary> {
        let records = read_records(input)?;
        let rows = self.assess(records).await;
        write_rows(&rows, output)?;

        let scored = rows.iter().filter(|r| r.assessment.is_scored()).count();
        let summary = BatchSummary {
            rows: rows.len(),
            scored,
            degraded: rows.len() - scored,
        };
        info!(
            "Batch complete: {} rows, {} scored, {} degraded",
            summary.rows, summary.scored, summary.degraded
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feasibility::{
        DegradedReason, FeasibilityScorer, FeatureWeights, KeywordRules, NormalizationMode,
    };
    use crate::infrastructure::mock::{StaticIdeaGenerator, StaticMarketAnalysis};
    use std::sync::Arc;

    fn advisor() -> BusinessAdvisor {
        BusinessAdvisor::new(
            Arc::new(StaticIdeaGenerator::offline()),
            Arc::new(StaticMarketAnalysis::new(MarketSnapshot::new(0.15, 0.25, 0.2))),
            FeasibilityScorer::default(),
        )
    }

    #[test]
    fn test_missing_idea_column_is_an_error() {
        let err = read_records("name,industry\nfoo,technology\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("idea"));
    }

    #[test]
    fn test_headers_are_case_insensitive_and_optional() {
        let records = read_records("IDEA\nA bakery\n".as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].idea, "A bakery");
        assert_eq!(records[0].industry, "");
        assert_eq!(records[0].financials.as_ref().ok(), Some(&(0.0, 0.0)));
    }

    #[tokio::test]
    async fn test_bad_number_degrades_only_its_row() {
        let csv = "idea,initial_investment,target_roi,industry\n\
                   A bakery,10000,0.1,consumer\n\
                   A florist,lots,0.1,consumer\n\
                   A scam,5000,0.2,consumer\n";
        let advisor = advisor();
        let batch = BatchAssessor::new(&advisor);
        let rows = batch.assess(read_records(csv.as_bytes()).unwrap()).await;

        assert_eq!(rows.len(), 3);
        assert!(rows[0].assessment.is_scored());
        assert!(matches!(
            rows[1].assessment,
            Assessment::Degraded {
                reason: DegradedReason::InvalidInput,
                ..
            }
        ));
        assert_eq!(rows[2].assessment.score(), 20.0);
    }

    #[tokio::test]
    async fn test_run_writes_output_columns_in_input_order() {
        let csv = "idea,target_roi\nA scam,0.1\nA bakery,0.1\n";
        let advisor = advisor();
        let mut out = Vec::new();
        let summary = BatchAssessor::new(&advisor)
            .run(csv.as_bytes(), &mut out)
            .await
            .unwrap();
        assert_eq!(
            summary,
            BatchSummary {
                rows: 2,
                scored: 2,
                degraded: 0
            }
        );

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], OUTPUT_HEADERS.join(","));
        assert!(lines[1].starts_with("A scam,,0.1,,,20.00,Very Negative,Very High,Very Negative,scored"));
        assert!(lines[2].starts_with("A bakery,"));
    }

    #[tokio::test]
    async fn test_batched_bounds_span_the_whole_file() {
        let scorer = FeasibilityScorer::new(
            KeywordRules::default(),
            FeatureWeights::default(),
            NormalizationMode::Batched,
        )
        .unwrap();
        let advisor = BusinessAdvisor::new(
            Arc::new(StaticIdeaGenerator::offline()),
            Arc::new(StaticMarketAnalysis::failing()),
            scorer,
        );
        let csv = "idea,initial_investment,target_roi,industry\n\
                   A bakery,1000,0.1,consumer\n\
                   A bakery,90000,0.9,finance\n";

        let rows = BatchAssessor::new(&advisor)
            .assess(read_records(csv.as_bytes()).unwrap())
            .await;
        let low = rows[0].assessment.score();
        let high = rows[1].assessment.score();
        // same fallback snapshot for both industries, so only the financials differ
        assert!((high - low - 10.0).abs() < 1e-6, "{} vs {}", high, low);
    }

    #[tokio::test]
    async fn test_harmful_row_with_bad_number_is_still_harmful() {
        let advisor = advisor();
        let rows = BatchAssessor::new(&advisor)
            .assess(read_records("idea,initial_investment\nAn illegal scam,lots\n".as_bytes()).unwrap())
            .await;
        assert_eq!(rows[0].assessment, Assessment::Scored(FeasibilityResult::harmful()));
    }
}
