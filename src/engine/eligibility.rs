//! Eligibility filter: drop negligible-contribution submissions before
//! allocation so a campaign is not diluted across near-zero-effort entries.

use serde::{Deserialize, Serialize};

use crate::domain::Decimal;

/// Floors a submission must reach to participate in allocation. Both
/// bounds are inclusive: landing exactly on a floor is eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRule {
    /// Minimum absolute score.
    pub min_score: Decimal,
    /// Minimum fraction of the campaign's total score (0.001 = 0.1%).
    pub min_share: Decimal,
}

impl Default for EligibilityRule {
    fn default() -> Self {
        EligibilityRule {
            min_score: Decimal::from(10u64),
            min_share: Decimal::from_parts(1, 3),
        }
    }
}

impl EligibilityRule {
    /// Pure predicate for one submission. Independent per submission and
    /// order-insensitive; does not mutate scores.
    ///
    /// A zero `total_score` makes every submission ineligible; the share
    /// test is skipped entirely so no division happens.
    pub fn is_eligible(&self, score: Decimal, total_score: Decimal) -> bool {
        if !total_score.is_positive() {
            return false;
        }
        score >= self.min_score && score / total_score >= self.min_share
    }
}
