//! Pure computation engine for deterministic payout allocation.
//!
//! Control flow for one reconciliation pass: score every submission,
//! aggregate, split the budget, run the insurance gate, then (if it
//! passes) filter for eligibility and run the capped proportional
//! allocation. Every step is synchronous, CPU-only, and a pure function
//! of its inputs: identical inputs always produce identical outputs.

use tracing::debug;

use crate::config::EngineConfig;
use crate::domain::{CampaignInput, CampaignPayout, Decimal, SubmissionPayout};
use crate::error::EngineError;

pub mod allocator;
pub mod budget;
pub mod eligibility;
pub mod estimate;
pub mod gate;
pub mod score;

pub use allocator::Allocation;
pub use budget::{BudgetSplit, InsuranceRefund, RefundReason, INSURANCE_REFUND_PERCENT};
pub use eligibility::EligibilityRule;
pub use estimate::Estimate;
pub use gate::{GateFailure, GateOutcome, GateThresholds, ThresholdTable};
pub use score::ScoreWeights;

/// Maximum submissions a single participant may enter per campaign.
/// Enforced by the caller before submissions reach the engine; recorded
/// here so both sides agree on the number.
pub const MAX_SUBMISSIONS_PER_PARTICIPANT: usize = 10;

/// The payout allocation engine. Holds only configuration; all state
/// lives in the per-call inputs, so one engine is safe to share across
/// threads and reconciliation runs.
#[derive(Debug, Clone, Default)]
pub struct PayoutEngine {
    config: EngineConfig,
}

impl PayoutEngine {
    pub fn new(config: EngineConfig) -> Self {
        PayoutEngine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one full reconciliation pass over a campaign.
    ///
    /// A failed gate yields empty payouts plus the 95% insurance refund
    /// split for the caller to execute; a passing gate yields one payout
    /// entry per submission, ineligible ones carrying zero share and
    /// earnings. The engine neither persists nor mutates anything; the
    /// caller owns idempotent finalization (at most one concurrent
    /// finalization per campaign, guarded on its side).
    ///
    /// # Errors
    /// Only caller-validation bugs error: negative gross budget or a
    /// commission percent outside [0, 100].
    pub fn reconcile(&self, campaign: &CampaignInput) -> Result<CampaignPayout, EngineError> {
        let split = budget::split(campaign.gross_budget, campaign.commission_percent)?;

        let scores: Vec<Decimal> = campaign
            .submissions
            .iter()
            .map(|s| self.config.weights.score(&s.counts))
            .collect();
        let total_score = scores.iter().fold(Decimal::zero(), |acc, s| acc + *s);
        let total_views = score::total_views(&campaign.submissions);

        debug!(
            campaign = %campaign.id,
            submissions = campaign.submissions.len(),
            %total_score,
            total_views,
            "reconciling campaign"
        );

        let gate_outcome = gate::check(
            &campaign.tier,
            campaign.submissions.len() as u64,
            total_score,
            total_views,
            &self.config.thresholds,
        );

        if !gate_outcome.passed {
            debug!(
                campaign = %campaign.id,
                failures = gate_outcome.failures.len(),
                "gate failed, campaign goes to insurance refund"
            );
            return Ok(CampaignPayout {
                campaign_id: campaign.id.clone(),
                commission: split.commission,
                net_pool: split.net_pool,
                gate: gate_outcome,
                insurance_refund: Some(budget::refund_split(
                    campaign.gross_budget,
                    RefundReason::GateFailed,
                    self.config.insurance_refund_percent,
                )),
                payouts: Vec::new(),
            });
        }

        let eligible: Vec<bool> = scores
            .iter()
            .map(|&s| self.config.eligibility.is_eligible(s, total_score))
            .collect();

        let entries: Vec<_> = campaign
            .submissions
            .iter()
            .zip(&scores)
            .zip(&eligible)
            .filter(|(_, &is_eligible)| is_eligible)
            .map(|((submission, &score), _)| (submission.id.clone(), score))
            .collect();
        let allocations = allocator::allocate(&entries, split.net_pool, self.config.cap);

        let payouts = campaign
            .submissions
            .iter()
            .zip(&scores)
            .zip(&eligible)
            .map(|((submission, &score), &is_eligible)| {
                let allocation = allocations.iter().find(|a| a.id == submission.id);
                SubmissionPayout {
                    id: submission.id.clone(),
                    score,
                    eligible: is_eligible,
                    share: allocation.map_or(Decimal::zero(), |a| a.share),
                    earnings: allocation.map_or(Decimal::zero(), |a| a.earnings),
                }
            })
            .collect();

        Ok(CampaignPayout {
            campaign_id: campaign.id.clone(),
            commission: split.commission,
            net_pool: split.net_pool,
            gate: gate_outcome,
            insurance_refund: None,
            payouts,
        })
    }

    /// Provisional earnings view for a single submission between
    /// reconciliation runs; see [`estimate::estimate`].
    ///
    /// # Errors
    /// Same caller-validation rules as [`Self::reconcile`].
    pub fn estimate(
        &self,
        score: Decimal,
        total_score: Decimal,
        gross_budget: Decimal,
        commission_percent: Decimal,
        confirmed: crate::domain::ConfirmedFigures,
    ) -> Result<Estimate, EngineError> {
        let split = budget::split(gross_budget, commission_percent)?;
        Ok(estimate::estimate(
            score,
            total_score,
            &split,
            self.config.cap,
            confirmed,
        ))
    }
}
