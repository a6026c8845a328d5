//! Capped proportional allocator: distributes the net pool by score with a
//! per-participant ceiling, redistributing the excess to everyone else.

use serde::{Deserialize, Serialize};

use crate::domain::{Decimal, SubmissionId};

/// Default per-participant ceiling on the share of the net pool.
pub fn default_cap() -> Decimal {
    Decimal::from_parts(40, 2)
}

/// Final allocation for one eligible submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub id: SubmissionId,
    pub share: Decimal,
    pub earnings: Decimal,
}

/// Distribute `net_pool` across `entries` (id, score) proportionally to
/// score, holding every final share at or under `cap`.
///
/// Fixed-point cap-and-redistribute: each round pins every over-cap
/// participant at exactly the cap and re-splits the remaining share across
/// the still-active scores, so three or more near-dominant participants
/// converge in as many rounds as it takes, never via a hard-coded pass
/// count. Each round pins at least one participant, so the loop runs at
/// most `entries.len()` times.
///
/// When the share left to distribute exceeds `cap` times the number of
/// still-active participants, no cap-respecting allocation exists; the cap
/// is waived for that remainder and the remaining share splits
/// proportionally among them, so the pool is never left partly
/// undistributed. The single-eligible-participant case is the smallest
/// instance of this waiver.
///
/// Zero-score entries receive a zero share and never join the active set,
/// so they cannot absorb redistribution or strand part of the pool.
///
/// Shares always sum to exactly 1 (up to decimal division precision) and
/// earnings to `net_pool`. Empty input or a non-positive total score
/// yields an empty result; no division is attempted.
pub fn allocate(
    entries: &[(SubmissionId, Decimal)],
    net_pool: Decimal,
    cap: Decimal,
) -> Vec<Allocation> {
    let total: Decimal = entries
        .iter()
        .fold(Decimal::zero(), |acc, (_, score)| acc + *score);
    if entries.is_empty() || !total.is_positive() {
        return Vec::new();
    }

    let mut shares = vec![Decimal::zero(); entries.len()];
    let mut active: Vec<usize> = (0..entries.len())
        .filter(|&i| entries[i].1.is_positive())
        .collect();
    let mut remaining_share = Decimal::one();

    loop {
        let active_total = active
            .iter()
            .fold(Decimal::zero(), |acc, &i| acc + entries[i].1);
        if !active_total.is_positive() {
            break;
        }

        for &i in &active {
            shares[i] = entries[i].1 / active_total * remaining_share;
        }

        // Infeasible cap for this remainder (average share alone would
        // breach it): waive rather than strand part of the pool.
        if remaining_share > cap * Decimal::from(active.len() as u64) {
            break;
        }

        let over: Vec<usize> = active
            .iter()
            .copied()
            .filter(|&i| shares[i] > cap)
            .collect();
        if over.is_empty() {
            break;
        }

        for &i in &over {
            shares[i] = cap;
            remaining_share = remaining_share - cap;
        }
        active.retain(|i| !over.contains(i));
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, (id, _))| Allocation {
            id: id.clone(),
            share: shares[i],
            earnings: shares[i] * net_pool,
        })
        .collect()
}
