//! payfluence: deterministic payout allocation engine for sponsor-funded
//! creator campaigns.
//!
//! Pure, replayable computation only: metric fetching, persistence,
//! wallet crediting, and scheduling all belong to the caller.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;

pub use config::{ConfigError, EngineConfig};
pub use domain::{
    CampaignId, CampaignInput, CampaignPayout, ConfirmedFigures, Decimal, EngagementCounts,
    PerformanceTier, SubmissionId, SubmissionInput, SubmissionPayout,
};
pub use engine::{
    Allocation, BudgetSplit, EligibilityRule, Estimate, GateFailure, GateOutcome, GateThresholds,
    InsuranceRefund, PayoutEngine, RefundReason, ScoreWeights, ThresholdTable,
    INSURANCE_REFUND_PERCENT, MAX_SUBMISSIONS_PER_PARTICIPANT,
};
pub use error::EngineError;
