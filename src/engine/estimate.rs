//! Estimate tracker: live, explicitly-approximate earnings between
//! reconciliation runs, shown alongside the untouched confirmed figure.

use serde::{Deserialize, Serialize};

use crate::domain::{ConfirmedFigures, Decimal};

use super::budget::BudgetSplit;

/// Provisional earnings view for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub approx_share: Decimal,
    pub approx_earnings: Decimal,
    /// Last finalized figures, returned unmodified.
    pub confirmed: ConfirmedFigures,
    /// True when the approximation has drifted from the confirmed pair,
    /// i.e. the caller should show "may still change" messaging.
    pub changed: bool,
}

/// Compute a provisional share/earnings pair from current metrics.
///
/// Uses the same proportional formula as the final allocator but with a
/// single clip at the cap instead of the iterative redistribution; a
/// provisional number does not need redistribution exactness. Zero total
/// score yields zero approximate figures, never a division.
pub fn estimate(
    score: Decimal,
    total_score: Decimal,
    split: &BudgetSplit,
    cap: Decimal,
    confirmed: ConfirmedFigures,
) -> Estimate {
    let approx_share = if total_score.is_positive() {
        let raw = score / total_score;
        if raw > cap {
            cap
        } else {
            raw
        }
    } else {
        Decimal::zero()
    };
    let approx_earnings = approx_share * split.net_pool;

    Estimate {
        approx_share,
        approx_earnings,
        confirmed,
        changed: approx_share != confirmed.share || approx_earnings != confirmed.earnings,
    }
}
