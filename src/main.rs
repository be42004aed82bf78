//! ChurnScope: Customer churn analytics CLI with retention recommendations
//!
//! This is the main entrypoint that renders the two views over one churn
//! forecast: the analytics view (summary metrics, histogram, top-risk
//! table) and the recommendations view (ranked retention actions).

use anyhow::Result;
use churnscope::{load_dataset, recommend_top, summarize, top_at_risk, viz, Args};
use clap::Parser;
use std::time::Instant;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    if args.verbose {
        println!("ChurnScope - Customer Churn Analytics");
        println!("=====================================\n");
    }

    let Some(input) = args.input.clone() else {
        // Not an error: no forecast has been supplied yet
        println!(
            "No input file given. Supply a churn forecast CSV with --input \
             (expected columns include 'churn_probability' and 'segment')."
        );
        return Ok(());
    };

    // The two views are independent projections of the same input file.
    // Each performs its own load and column check, and a failure in one
    // must not keep the other from rendering.
    let analytics = run_analytics_view(&args, &input);
    if let Err(err) = &analytics {
        eprintln!("Analytics view unavailable: {:#}", err);
    }

    let recommendations = run_recommendations_view(&args, &input);
    if let Err(err) = &recommendations {
        eprintln!("Recommendations view unavailable: {:#}", err);
    }

    if analytics.is_err() && recommendations.is_err() {
        anyhow::bail!("no view could be rendered from {}", input);
    }

    Ok(())
}

/// Render the analytics view: summary metrics, histogram, top-risk table
fn run_analytics_view(args: &Args, input: &str) -> Result<()> {
    println!("=== Churn Analytics ===");

    let start_time = Instant::now();

    if args.verbose {
        println!("Loading churn forecast from: {}", input);
    }
    let dataset = load_dataset(input)?;

    if args.verbose {
        println!("Loaded {} customers", dataset.len());
        println!("Filtering by segment: {}", args.segment);
    }
    let view = dataset.filter_segment(&args.segment);

    let summary = summarize(&view.records);
    viz::print_summary(summary.as_ref(), &args.segment);

    viz::render_histogram(&view.records, args.bins, &args.output)?;
    println!("Histogram saved to: {}", args.output);

    viz::print_top_risk_table(&top_at_risk(&view.records, args.top));

    if args.verbose {
        println!(
            "\n✓ Analytics view rendered in {:.2}s",
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

/// Render the recommendations view: ranked retention actions.
///
/// Works over the full forecast; the segment filter applies only to the
/// analytics view.
fn run_recommendations_view(args: &Args, input: &str) -> Result<()> {
    println!("\n=== Retention Recommendations ===");

    let start_time = Instant::now();

    if args.verbose {
        println!("Loading churn forecast from: {}", input);
    }
    let dataset = load_dataset(input)?;

    viz::print_recommendations_table(&recommend_top(&dataset.records, args.top));

    if args.verbose {
        println!(
            "\n✓ Recommendations view rendered in {:.2}s",
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(())
}
