//! Campaign input aggregate and reconciliation output.

use serde::{Deserialize, Serialize};

use super::decimal::Decimal;
use super::primitives::CampaignId;
use super::submission::{SubmissionInput, SubmissionPayout};
use crate::engine::budget::InsuranceRefund;
use crate::engine::gate::GateOutcome;

/// A campaign as assembled by the caller for one reconciliation pass.
///
/// The engine never persists or mutates this; it is rebuilt from current
/// metrics on every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignInput {
    pub id: CampaignId,
    /// Gross sponsor budget, in the campaign currency. Must be >= 0.
    pub gross_budget: Decimal,
    /// Platform commission, percent in [0, 100].
    pub commission_percent: Decimal,
    /// Declared performance tier label (C/B/A/S). Kept as the raw string
    /// from the caller's store; an unrecognized label fails the gate.
    pub tier: String,
    pub submissions: Vec<SubmissionInput>,
}

/// Campaign-level result of a reconciliation pass.
///
/// When the gate fails, `payouts` is empty and `insurance_refund` carries
/// the sponsor-refund split the caller must execute. When it passes,
/// `insurance_refund` is `None` and every submission appears in `payouts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignPayout {
    pub campaign_id: CampaignId,
    pub commission: Decimal,
    pub net_pool: Decimal,
    pub gate: GateOutcome,
    pub insurance_refund: Option<InsuranceRefund>,
    pub payouts: Vec<SubmissionPayout>,
}
