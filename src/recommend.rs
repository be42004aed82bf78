//! Rule-based retention recommendations and risk ranking

use std::fmt;

use crate::data::CustomerRecord;

/// Churn probability above which a personal call is warranted
pub const PERSONAL_CALL_THRESHOLD: f64 = 0.8;
/// Churn probability above which a promo code is sent
pub const PROMO_CODE_THRESHOLD: f64 = 0.6;
/// Churn probability above which a small discount is offered
pub const SMALL_DISCOUNT_THRESHOLD: f64 = 0.4;

/// Retention action derived from a customer's churn probability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    PersonalCallOffer,
    PromoCodeOffer,
    SmallDiscountOffer,
    LoyalMaintain,
}

impl Recommendation {
    /// Stable machine-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::PersonalCallOffer => "personal-call-offer",
            Recommendation::PromoCodeOffer => "promo-code-offer",
            Recommendation::SmallDiscountOffer => "small-discount-offer",
            Recommendation::LoyalMaintain => "loyal-maintain",
        }
    }

    /// Human-readable retention action
    pub fn action(&self) -> &'static str {
        match self {
            Recommendation::PersonalCallOffer => "Personal offer + a call from the account manager",
            Recommendation::PromoCodeOffer => "Send a promo code or a bonus email",
            Recommendation::SmallDiscountOffer => "Offer a 10% discount on the next order",
            Recommendation::LoyalMaintain => "Customer is loyal, keep up regular communication",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify one churn probability into a retention action.
///
/// Pure and total: every f64 maps to exactly one variant. Comparisons
/// are strict, so a probability sitting exactly on a threshold falls
/// to the lower tier, and NaN or out-of-range values take the final
/// arm. The boundary behavior is load-bearing and covered by tests;
/// do not relax the inequalities.
pub fn classify(churn_probability: f64) -> Recommendation {
    if churn_probability > PERSONAL_CALL_THRESHOLD {
        Recommendation::PersonalCallOffer
    } else if churn_probability > PROMO_CODE_THRESHOLD {
        Recommendation::PromoCodeOffer
    } else if churn_probability > SMALL_DISCOUNT_THRESHOLD {
        Recommendation::SmallDiscountOffer
    } else {
        Recommendation::LoyalMaintain
    }
}

/// Rank records by churn probability, highest first, and keep the top `n`.
///
/// The sort is stable: records with equal probability keep their input
/// order. Returns fewer than `n` rows when the dataset is smaller.
pub fn top_at_risk(records: &[CustomerRecord], n: usize) -> Vec<&CustomerRecord> {
    let mut ranked: Vec<&CustomerRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.churn_probability.total_cmp(&a.churn_probability));
    ranked.truncate(n);
    ranked
}

/// A ranked record together with its retention recommendation
#[derive(Debug, Clone, Copy)]
pub struct RankedRecommendation<'a> {
    pub record: &'a CustomerRecord,
    pub recommendation: Recommendation,
}

/// Classify every record, then rank by churn probability and keep the top `n`
pub fn recommend_top(records: &[CustomerRecord], n: usize) -> Vec<RankedRecommendation<'_>> {
    top_at_risk(records, n)
        .into_iter()
        .map(|record| RankedRecommendation {
            record,
            recommendation: classify(record.churn_probability),
        })
        .collect()
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
    fn test_classify_tiers() {
        assert_eq!(classify(0.95), Recommendation::PersonalCallOffer);
        assert_eq!(classify(0.81), Recommendation::PersonalCallOffer);
        assert_eq!(classify(0.7), Recommendation::PromoCodeOffer);
        assert_eq!(classify(0.5), Recommendation::SmallDiscountOffer);
        assert_eq!(classify(0.3), Recommendation::LoyalMaintain);
        assert_eq!(classify(0.0), Recommendation::LoyalMaintain);
    }

    #[test]
    fn test_classify_boundaries_fall_to_lower_tier() {
        assert_eq!(classify(0.8), Recommendation::PromoCodeOffer);
        assert_eq!(classify(0.6), Recommendation::SmallDiscountOffer);
        assert_eq!(classify(0.4), Recommendation::LoyalMaintain);
    }

    #[test]
    fn test_classify_is_total_over_odd_inputs() {
        assert_eq!(classify(f64::NAN), Recommendation::LoyalMaintain);
        assert_eq!(classify(-1.0), Recommendation::LoyalMaintain);
        assert_eq!(classify(2.0), Recommendation::PersonalCallOffer);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for &p in &[0.0, 0.4, 0.41, 0.6, 0.61, 0.8, 0.81, 1.0] {
            assert_eq!(classify(p), classify(p));
        }
    }

    #[test]
    fn test_top_at_risk_sorts_descending() {
        let records: Vec<_> = [0.3, 0.9, 0.65, 0.5].iter().map(|&p| record(p)).collect();

        let top = top_at_risk(&records, 15);
        let probs: Vec<f64> = top.iter().map(|r| r.churn_probability).collect();
        assert_eq!(probs, vec![0.9, 0.65, 0.5, 0.3]);
    }

    #[test]
    fn test_top_at_risk_truncates() {
        let records: Vec<_> = (0..20).map(|i| record(i as f64 / 20.0)).collect();

        assert_eq!(top_at_risk(&records, 15).len(), 15);
        assert_eq!(top_at_risk(&records, 50).len(), 20);
        assert!(top_at_risk(&[], 15).is_empty());
    }

    #[test]
    fn test_top_at_risk_ties_keep_input_order() {
        let mut records: Vec<_> = [0.5, 0.5, 0.5].iter().map(|&p| record(p)).collect();
        records[0].purchase_count = Some(1);
        records[1].purchase_count = Some(2);
        records[2].purchase_count = Some(3);

        let top = top_at_risk(&records, 15);
        let order: Vec<Option<i64>> = top.iter().map(|r| r.purchase_count).collect();
        assert_eq!(order, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_recommend_top_scenario() {
        let records: Vec<_> = [0.9, 0.65, 0.5, 0.3].iter().map(|&p| record(p)).collect();

        let ranked = recommend_top(&records, 15);
        let labels: Vec<&str> = ranked.iter().map(|r| r.recommendation.label()).collect();
        assert_eq!(
            labels,
            vec![
                "personal-call-offer",
                "promo-code-offer",
                "small-discount-offer",
                "loyal-maintain"
            ]
        );
    }
}
