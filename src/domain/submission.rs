//! Submission input and derived payout types.

use serde::{Deserialize, Serialize};

use super::decimal::Decimal;
use super::primitives::{EngagementCounts, SubmissionId};

/// One creator submission as supplied to the engine: identity plus the
/// freshest engagement snapshot the caller fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionInput {
    pub id: SubmissionId,
    pub counts: EngagementCounts,
}

impl SubmissionInput {
    pub fn new(id: SubmissionId, counts: EngagementCounts) -> Self {
        SubmissionInput { id, counts }
    }
}

/// Derived payout figures for one submission after a reconciliation pass.
///
/// `share` is a fraction in [0, 1]; `earnings` is in the campaign currency.
/// Ineligible submissions appear with their computed score and zero
/// share/earnings so the caller can persist the full picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayout {
    pub id: SubmissionId,
    pub score: Decimal,
    pub eligible: bool,
    pub share: Decimal,
    pub earnings: Decimal,
}

/// The last finalized earnings/share pair for a submission, persisted by
/// the caller after the previous reconciliation. The estimate tracker
/// returns it untouched next to the live approximation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedFigures {
    pub share: Decimal,
    pub earnings: Decimal,
}

impl ConfirmedFigures {
    pub fn new(share: Decimal, earnings: Decimal) -> Self {
        ConfirmedFigures { share, earnings }
    }
}
