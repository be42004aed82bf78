//! Command-line interface definitions and argument parsing

use clap::Parser;

use crate::data::SEGMENT_ALL;

/// Customer churn analytics CLI with rule-based retention recommendations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the churn forecast CSV file
    #[arg(short, long)]
    pub input: Option<String>,

    /// Risk segment to filter the analytics view by ("All" disables the filter)
    #[arg(short, long, default_value = SEGMENT_ALL)]
    pub segment: String,

    /// Number of rows shown in the ranked tables
    #[arg(short = 'n', long, default_value = "15")]
    pub top: usize,

    /// Output path for the churn probability histogram
    #[arg(short, long, default_value = "churn_histogram.png")]
    pub output: String,

    /// Number of histogram bins
    #[arg(long, default_value = "10")]
    pub bins: usize,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arguments() {
        let args = Args::try_parse_from(["churnscope"]).unwrap();

        assert_eq!(args.input, None);
        assert_eq!(args.segment, SEGMENT_ALL);
        assert_eq!(args.top, 15);
        assert_eq!(args.output, "churn_histogram.png");
        assert_eq!(args.bins, 10);
        assert!(!args.verbose);
    }

    #[test]
    fn test_segment_and_top_overrides() {
        let args = Args::try_parse_from([
            "churnscope",
            "--input",
            "forecast.csv",
            "--segment",
            "High Risk",
            "-n",
            "5",
        ])
        .unwrap();

        assert_eq!(args.input.as_deref(), Some("forecast.csv"));
        assert_eq!(args.segment, "High Risk");
        assert_eq!(args.top, 5);
    }
}
