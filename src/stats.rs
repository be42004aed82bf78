//! Summary statistics and histogram binning over a churn dataset

use crate::data::CustomerRecord;

/// Churn probability above which a customer counts as high risk
pub const HIGH_RISK_THRESHOLD: f64 = 0.6;

/// Aggregate view of a (possibly filtered) dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChurnSummary {
    /// Number of records summarized
    pub customers: usize,
    /// Arithmetic mean of churn probability
    pub avg_churn_probability: f64,
    /// Share of records with churn probability above [`HIGH_RISK_THRESHOLD`], in percent
    pub high_risk_pct: f64,
}

/// Summarize a dataset, or `None` when it is empty.
///
/// The empty case is deliberate: the mean and the high-risk share are
/// undefined over zero records, and callers must render an explicit
/// "no data" state instead of a NaN.
pub fn summarize(records: &[CustomerRecord]) -> Option<ChurnSummary> {
    if records.is_empty() {
        return None;
    }

    let n = records.len() as f64;
    let avg = records.iter().map(|r| r.churn_probability).sum::<f64>() / n;
    let high_risk = records
        .iter()
        .filter(|r| r.churn_probability > HIGH_RISK_THRESHOLD)
        .count() as f64;

    Some(ChurnSummary {
        customers: records.len(),
        avg_churn_probability: avg,
        high_risk_pct: high_risk / n * 100.0,
    })
}

/// Count records into `bins` equal-width bins over the fixed [0, 1] domain.
///
/// Out-of-range probabilities clamp into the edge bins, so the counts
/// always sum to the number of records.
pub fn histogram(records: &[CustomerRecord], bins: usize) -> Vec<usize> {
    let mut counts = vec![0usize; bins.max(1)];
    let last = counts.len() - 1;
    let width = 1.0 / counts.len() as f64;

    for record in records {
        let idx = (record.churn_probability / width).floor() as isize;
        counts[idx.clamp(0, last as isize) as usize] += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(p: f64) -> CustomerRecord {
        CustomerRecord {
            churn_probability: p,
            segment: None,
            avg_order_value: None,
            purchase_count: None,
        }
    }

    #[test]
    fn test_summarize_known_scenario() {
        let records: Vec<_> = [0.9, 0.65, 0.5, 0.3].iter().map(|&p| record(p)).collect();

        let summary = summarize(&records).unwrap();
        assert_eq!(summary.customers, 4);
        assert!((summary.avg_churn_probability - 0.5875).abs() < 1e-12);
        assert!((summary.high_risk_pct - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_summarize_empty_is_none() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn test_high_risk_pct_stays_in_range() {
        let all_high: Vec<_> = [0.95, 0.99, 0.7].iter().map(|&p| record(p)).collect();
        let none_high: Vec<_> = [0.1, 0.2].iter().map(|&p| record(p)).collect();

        assert_eq!(summarize(&all_high).unwrap().high_risk_pct, 100.0);
        assert_eq!(summarize(&none_high).unwrap().high_risk_pct, 0.0);
    }

    #[test]
    fn test_boundary_probability_is_not_high_risk() {
        let records = vec![record(0.6)];
        assert_eq!(summarize(&records).unwrap().high_risk_pct, 0.0);
    }

    #[test]
    fn test_histogram_counts_sum_to_records() {
        let records: Vec<_> = [0.05, 0.15, 0.15, 0.55, 0.95, 1.0]
            .iter()
            .map(|&p| record(p))
            .collect();

        let counts = histogram(&records, 10);
        assert_eq!(counts.len(), 10);
        assert_eq!(counts.iter().sum::<usize>(), records.len());
        assert_eq!(counts[0], 1);
        assert_eq!(counts[1], 2);
        assert_eq!(counts[5], 1);
        // 1.0 lands in the top bin, not past it
        assert_eq!(counts[9], 2);
    }

    #[test]
    fn test_histogram_clamps_out_of_range() {
        let records: Vec<_> = [-0.2, 1.7].iter().map(|&p| record(p)).collect();

        let counts = histogram(&records, 10);
        assert_eq!(counts[0], 1);
        assert_eq!(counts[9], 1);
    }

    #[test]
    fn test_histogram_empty_dataset() {
        let counts = histogram(&[], 10);
        assert_eq!(counts.iter().sum::<usize>(), 0);
    }
}
