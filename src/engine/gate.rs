//! Performance gate: the "insurance check" deciding whether a campaign's
//! aggregate results earn a creator payout at all.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Decimal, PerformanceTier};

/// Minimum aggregate results a campaign must reach at its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateThresholds {
    pub min_submissions: u64,
    pub min_total_score: Decimal,
    pub min_total_views: u64,
}

/// Tier -> thresholds lookup. An explicit table rather than inline
/// branching so thresholds can be retuned without touching the allocator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdTable {
    tiers: BTreeMap<PerformanceTier, GateThresholds>,
}

impl Default for ThresholdTable {
    fn default() -> Self {
        let mut tiers = BTreeMap::new();
        tiers.insert(
            PerformanceTier::C,
            GateThresholds {
                min_submissions: 5,
                min_total_score: Decimal::from(1_000u64),
                min_total_views: 10_000,
            },
        );
        tiers.insert(
            PerformanceTier::B,
            GateThresholds {
                min_submissions: 10,
                min_total_score: Decimal::from(5_000u64),
                min_total_views: 100_000,
            },
        );
        tiers.insert(
            PerformanceTier::A,
            GateThresholds {
                min_submissions: 20,
                min_total_score: Decimal::from(20_000u64),
                min_total_views: 500_000,
            },
        );
        tiers.insert(
            PerformanceTier::S,
            GateThresholds {
                min_submissions: 40,
                min_total_score: Decimal::from(100_000u64),
                min_total_views: 2_000_000,
            },
        );
        ThresholdTable { tiers }
    }
}

impl ThresholdTable {
    pub fn get(&self, tier: PerformanceTier) -> Option<&GateThresholds> {
        self.tiers.get(&tier)
    }

    pub fn set(&mut self, tier: PerformanceTier, thresholds: GateThresholds) {
        self.tiers.insert(tier, thresholds);
    }
}

/// One failing gate dimension. Every failing dimension is reported, not
/// just the first, so sponsors see the full shortfall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateFailure {
    UnknownTier { label: String },
    SubmissionCount { required: u64, actual: u64 },
    TotalScore { required: Decimal, actual: Decimal },
    TotalViews { required: u64, actual: u64 },
}

impl std::fmt::Display for GateFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateFailure::UnknownTier { label } => {
                write!(f, "unknown performance tier {:?}", label)
            }
            GateFailure::SubmissionCount { required, actual } => {
                write!(f, "submission count {} below minimum {}", actual, required)
            }
            GateFailure::TotalScore { required, actual } => {
                write!(f, "total score {} below minimum {}", actual, required)
            }
            GateFailure::TotalViews { required, actual } => {
                write!(f, "total views {} below minimum {}", actual, required)
            }
        }
    }
}

/// Outcome of the insurance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateOutcome {
    pub passed: bool,
    pub failures: Vec<GateFailure>,
}

impl GateOutcome {
    fn passed() -> Self {
        GateOutcome {
            passed: true,
            failures: Vec::new(),
        }
    }

    fn failed(failures: Vec<GateFailure>) -> Self {
        GateOutcome {
            passed: false,
            failures,
        }
    }
}

/// Check a campaign's aggregates against its tier thresholds.
///
/// An unrecognized tier label (or a tier missing from the table) is itself
/// a failure, reported as the single distinguished `UnknownTier` reason
/// rather than silently passing. Never panics; callers branch on `passed`.
pub fn check(
    tier_label: &str,
    submission_count: u64,
    total_score: Decimal,
    total_views: u64,
    table: &ThresholdTable,
) -> GateOutcome {
    let thresholds = match PerformanceTier::parse(tier_label).and_then(|t| table.get(t)) {
        Some(t) => t,
        None => {
            return GateOutcome::failed(vec![GateFailure::UnknownTier {
                label: tier_label.to_string(),
            }])
        }
    };

    let mut failures = Vec::new();
    if submission_count < thresholds.min_submissions {
        failures.push(GateFailure::SubmissionCount {
            required: thresholds.min_submissions,
            actual: submission_count,
        });
    }
    if total_score < thresholds.min_total_score {
        failures.push(GateFailure::TotalScore {
            required: thresholds.min_total_score,
            actual: total_score,
        });
    }
    if total_views < thresholds.min_total_views {
        failures.push(GateFailure::TotalViews {
            required: thresholds.min_total_views,
            actual: total_views,
        });
    }

    if failures.is_empty() {
        GateOutcome::passed()
    } else {
        GateOutcome::failed(failures)
    }
}
