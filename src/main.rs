use anyhow::{Context, Result};
use clap::Parser;
use detect_sums::input_parser::token_count;
use detect_sums::report::{render_text, write_stats_json};
use detect_sums::{compare_detectors, format_input, AnalysisResult, Analyzer, CountingAllocator};
use std::path::PathBuf;
use tracing::{info, warn};

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator::new();

#[derive(Parser, Debug)]
#[command(name = "detect-sums")]
#[command(about = "Find every index triple where A[pA] + A[pB] = A[sum]")]
#[command(version)]
struct Args {
    /// Comma-separated integers, e.g. "1, 2, 3, 4"
    #[arg(required_unless_present = "file", conflicts_with = "file", allow_hyphen_values = true)]
    input: Option<String>,

    /// Analyze each non-blank line of this file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Detection strategy: time-efficient or memory-efficient (others fall back to time-efficient)
    #[arg(long, default_value = detect_sums::DEFAULT_ALGORITHM)]
    algorithm: String,

    /// Also run both detectors and check that they agree
    #[arg(long)]
    compare: bool,

    /// Tidy whitespace and drop empty values before parsing
    #[arg(long)]
    lenient: bool,

    /// Reject inputs with more values than this
    #[arg(long)]
    max_elements: Option<usize>,

    /// Print results as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Write all results to this JSON file
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let raw_inputs: Vec<String> = match (&args.input, &args.file) {
        (Some(input), None) => vec![input.clone()],
        (None, Some(path)) => {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read input file {}", path.display()))?;
            content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect()
        }
        _ => anyhow::bail!("Provide exactly one of INPUT or --file"),
    };

    if raw_inputs.is_empty() {
        anyhow::bail!("No input lines to analyze");
    }

    info!("Analyzing {} input(s) with algorithm {}", raw_inputs.len(), args.algorithm);

    let mut analyses = Vec::with_capacity(raw_inputs.len());
    let mut failures = 0usize;

    for raw in raw_inputs {
        let raw = if args.lenient { format_input(&raw) } else { raw };

        let analysis = match args.max_elements {
            Some(limit) if token_count(&raw) > limit => {
                let message = format!("Input has {} values, limit is {}", token_count(&raw), limit);
                warn!("{}", message);
                AnalysisResult::rejected(message, &args.algorithm)
            }
            _ => {
                let algorithm = args.algorithm.clone();
                // WHY: detection is CPU-bound and synchronous; keep it off the async workers
                tokio::task::spawn_blocking(move || {
                    Analyzer::with_probe(&GLOBAL).analyze(&raw, &algorithm)
                })
                .await
                .context("Analysis task failed")?
            }
        };

        if !analysis.is_success() {
            failures += 1;
        }

        if args.json {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else {
            print!("{}", render_text(&analysis));
        }

        if args.compare && analysis.is_success() {
            let input = analysis.input.clone();
            let comparison = tokio::task::spawn_blocking(move || compare_detectors(&input))
                .await
                .context("Comparison task failed")??;

            println!(
                "Detector agreement: memory-efficient={} time-efficient={} keys_match={}",
                comparison.memory_efficient_count, comparison.time_efficient_count, comparison.keys_match
            );
            if !comparison.keys_match {
                warn!(?comparison, "Detectors disagree");
                failures += 1;
            }
        }

        analyses.push(analysis);
    }

    if let Some(ref stats_out) = args.stats_out {
        write_stats_json(stats_out, &analyses).await?;
        info!("Wrote stats for {} analyses to {}", analyses.len(), stats_out.display());
    }

    if failures > 0 {
        anyhow::bail!("{} of {} analyses reported errors", failures, analyses.len());
    }

    Ok(())
}
