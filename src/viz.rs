//! Visualization functions using Plotters plus console table rendering

use plotters::prelude::*;

use crate::data::CustomerRecord;
use crate::recommend::RankedRecommendation;
use crate::stats::{self, ChurnSummary, HIGH_RISK_THRESHOLD};

/// Bar color matching the upstream dashboard (coral)
const BAR_COLOR: RGBColor = RGBColor(255, 127, 80);

/// Render a churn probability histogram to a PNG file
///
/// # Arguments
/// * `records` - Records to bin (already filtered, if a segment was selected)
/// * `bins` - Number of equal-width bins over [0, 1]
/// * `output_path` - Path to save the PNG plot
pub fn render_histogram(
    records: &[CustomerRecord],
    bins: usize,
    output_path: &str,
) -> crate::Result<()> {
    let counts = stats::histogram(records, bins);
    let max_count = counts.iter().copied().max().unwrap_or(0).max(1) as f64;
    let bin_width = 1.0 / counts.len() as f64;

    let root = BitMapBackend::new(output_path, (700, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Churn Probability Distribution", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..1f64, 0f64..(max_count * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Churn probability")
        .y_desc("Customers")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    for (i, &count) in counts.iter().enumerate() {
        let x0 = i as f64 * bin_width;
        let x1 = x0 + bin_width;

        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, count as f64)],
            BAR_COLOR.filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, count as f64)],
            BLACK.stroke_width(1),
        )))?;
    }

    root.present()?;

    Ok(())
}

/// Print the summary metric pair, or the explicit no-data state
pub fn print_summary(summary: Option<&ChurnSummary>, segment: &str) {
    println!("\n=== Churn Summary ({}) ===", segment);
    match summary {
        Some(s) => {
            println!("Customers analyzed: {}", s.customers);
            println!("Average churn probability: {:.2}", s.avg_churn_probability);
            println!(
                "High-risk share (p > {}): {:.1}%",
                HIGH_RISK_THRESHOLD, s.high_risk_pct
            );
        }
        None => println!("No data for the selected segment."),
    }
}

/// Print the ranked table of highest-risk customers
pub fn print_top_risk_table(top: &[&CustomerRecord]) {
    println!("\n=== Top Customers at Risk of Churning ===");
    if top.is_empty() {
        println!("(no rows)");
        return;
    }

    println!("  Rank | Churn prob | Segment       | Avg order | Purchases");
    println!("  -----|------------|---------------|-----------|----------");
    for (rank, record) in top.iter().enumerate() {
        println!(
            "  {:4} | {:10.3} | {:13} | {:>9} | {:>9}",
            rank + 1,
            record.churn_probability,
            record.segment.as_deref().unwrap_or("-"),
            fmt_opt_f64(record.avg_order_value),
            fmt_opt_i64(record.purchase_count),
        );
    }
}

/// Print the ranked table of retention recommendations
pub fn print_recommendations_table(rows: &[RankedRecommendation<'_>]) {
    println!("\n=== Individual Retention Recommendations ===");
    if rows.is_empty() {
        println!("(no rows)");
        return;
    }

    println!("  Avg order | Purchases | Churn prob | Recommendation");
    println!("  ----------|-----------|------------|---------------");
    for row in rows {
        println!(
            "  {:>9} | {:>9} | {:10.3} | {}",
            fmt_opt_f64(row.record.avg_order_value),
            fmt_opt_i64(row.record.purchase_count),
            row.record.churn_probability,
            row.recommendation.action(),
        );
    }
}

fn fmt_opt_f64(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

fn fmt_opt_i64(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
