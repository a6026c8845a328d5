//! Score converter: raw engagement counts -> one comparable score.

use serde::{Deserialize, Serialize};

use crate::domain::{Decimal, EngagementCounts, SubmissionInput};

/// Linear weights applied to each engagement dimension.
///
/// Defaults make a share worth 100 views or 2 likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub views: Decimal,
    pub likes: Decimal,
    pub shares: Decimal,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            views: Decimal::from_parts(1, 2),
            likes: Decimal::from_parts(5, 1),
            shares: Decimal::one(),
        }
    }
}

impl ScoreWeights {
    /// Weighted score for one submission's counts. Linear and
    /// order-independent; all-zero counts yield zero. Safe to recompute at
    /// any time, there are no side effects.
    pub fn score(&self, counts: &EngagementCounts) -> Decimal {
        Decimal::from(counts.views) * self.views
            + Decimal::from(counts.likes) * self.likes
            + Decimal::from(counts.shares) * self.shares
    }

    /// Sum of scores across a submission set.
    pub fn total_score(&self, submissions: &[SubmissionInput]) -> Decimal {
        submissions
            .iter()
            .fold(Decimal::zero(), |acc, s| acc + self.score(&s.counts))
    }
}

/// Sum of raw views across a submission set, for the gate's views dimension.
pub fn total_views(submissions: &[SubmissionInput]) -> u64 {
    submissions.iter().map(|s| s.counts.views).sum()
}
