//! ideaforge - business idea feasibility scoring
//!
//! # Usage
//! ```sh
//! ideaforge assess --idea "A sustainable mobile app" --industry technology
//! ideaforge --offline recommend --industry healthcare --target-market seniors
//! ideaforge batch --input ideas.csv --output scored.csv
//! ```
//!
//! Logs go to stderr (`RUST_LOG` to tune), results to stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ideaforge::application::batch::BatchAssessor;
use ideaforge::application::bootstrap::ServicesBootstrap;
use ideaforge::application::Recommendation;
use ideaforge::config::{Config, Mode};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Business idea feasibility scoring", long_about = None)]
struct Cli {
    /// Use static collaborators instead of OpenAI / Yahoo Finance / NewsAPI
    #[arg(long, global = true)]
    offline: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single idea
    Assess {
        #[arg(short, long)]
        idea: String,

        #[arg(long, default_value = "technology")]
        industry: String,

        /// Initial investment
        #[arg(long, default_value = "0")]
        investment: f64,

        /// Target return on investment, as a fraction
        #[arg(long, default_value = "0")]
        roi: f64,
    },
    /// Generate ideas for an industry and rank them
    Recommend {
        #[arg(long)]
        industry: String,

        #[arg(long)]
        target_market: String,

        #[arg(long, default_value = "0")]
        investment: f64,

        #[arg(long, default_value = "0")]
        roi: f64,
    },
    /// Score every row of a CSV file
    Batch {
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn print_recommendations(recs: &[Recommendation], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(recs)?);
        return Ok(());
    }
    for (rank, rec) in recs.iter().enumerate() {
        println!("{}. {}", rank + 1, rec.idea);
        println!(
            "   Score: {:.2} | Outlook: {} | Risk: {} | Sentiment: {} | Market data: {}",
            rec.assessment.score(),
            rec.assessment.market_outlook_label(),
            rec.assessment.risk_level_label(),
            rec.assessment.sentiment_label(),
            rec.snapshot_source
        );
        if !rec.assessment.is_scored() {
            println!("   Status: {}", rec.assessment.status());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stderr keeps stdout clean for JSON / CSV
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if cli.offline {
        config.mode = Mode::Offline;
    }
    info!("ideaforge {} ({:?} mode)", env!("CARGO_PKG_VERSION"), config.mode);

    let services = ServicesBootstrap::init(&config)?;
    let advisor = &services.advisor;

    match cli.command {
        Commands::Assess {
            idea,
            industry,
            investment,
            roi,
        } => {
            let rec = advisor
                .assess_user_idea(&idea, &industry, investment, roi)
                .await;
            print_recommendations(std::slice::from_ref(&rec), cli.json)?;
        }
        Commands::Recommend {
            industry,
            target_market,
            investment,
            roi,
        } => {
            let recs = advisor
                .recommend(&industry, &target_market, investment, roi)
                .await;
            if recs.is_empty() && !cli.json {
                println!("No ideas could be generated for {} / {}", industry, target_market);
            } else {
                print_recommendations(&recs, cli.json)?;
            }
        }
        Commands::Batch { input, output } => {
            let reader = BufReader::new(
                File::open(&input).with_context(|| format!("Failed to open {:?}", input))?,
            );
            let batch = BatchAssessor::new(advisor);
            let summary = match output {
                Some(path) => {
                    let writer = BufWriter::new(
                        File::create(&path)
                            .with_context(|| format!("Failed to create {:?}", path))?,
                    );
                    batch.run(reader, writer).await?
                }
                None => batch.run(reader, io::stdout().lock()).await?,
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "rows": summary.rows,
                        "scored": summary.scored,
                        "degraded": summary.degraded,
                    })
                );
            }
        }
    }

    Ok(())
}
