//! Budget splitter: gross budget -> platform commission + net creator pool,
//! plus the refund splits applied when a campaign is not paid out.

use serde::{Deserialize, Serialize};

use crate::domain::Decimal;
use crate::error::EngineError;

/// Default percent of gross budget refunded to the sponsor when the
/// performance gate fails. The platform keeps the remainder as an
/// insurance fee. Deployments can override it via `INSURANCE_REFUND_PERCENT`.
pub const INSURANCE_REFUND_PERCENT: i64 = 95;

/// Result of splitting a gross budget at a commission rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSplit {
    pub gross: Decimal,
    pub commission: Decimal,
    pub net_pool: Decimal,
    /// `1 - commission/100`, kept for estimate recomputation.
    pub multiplier: Decimal,
}

/// Split a gross budget into commission and net creator pool.
///
/// `commission` is derived as `gross - net_pool` so the identity
/// `commission + net_pool == gross` holds exactly in decimal arithmetic.
///
/// # Errors
/// A negative budget or a commission percent outside [0, 100] is a caller
/// validation bug and is rejected rather than absorbed.
pub fn split(gross: Decimal, commission_percent: Decimal) -> Result<BudgetSplit, EngineError> {
    if gross.is_negative() {
        return Err(EngineError::NegativeBudget(gross));
    }
    if commission_percent.is_negative() || commission_percent > Decimal::hundred() {
        return Err(EngineError::CommissionOutOfRange(commission_percent));
    }

    let multiplier = Decimal::one() - commission_percent / Decimal::hundred();
    let net_pool = gross * multiplier;
    Ok(BudgetSplit {
        gross,
        commission: gross - net_pool,
        net_pool,
        multiplier,
    })
}

/// Why a campaign's budget is going back to the sponsor.
///
/// Only a failed performance gate costs the sponsor the insurance fee;
/// cancellations and administrative rejections refund in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefundReason {
    GateFailed,
    SponsorCancelled,
    AdminRejected,
}

impl RefundReason {
    /// Refund percent under the default insurance configuration.
    pub fn refund_percent(&self) -> Decimal {
        match self {
            RefundReason::GateFailed => Decimal::from_parts(INSURANCE_REFUND_PERCENT, 0),
            RefundReason::SponsorCancelled | RefundReason::AdminRejected => Decimal::hundred(),
        }
    }
}

/// Sponsor refund / platform retention split for a campaign that will not
/// be distributed. The engine computes the figures; moving the money is
/// the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceRefund {
    pub reason: RefundReason,
    pub refund: Decimal,
    pub retained: Decimal,
}

/// Compute the refund split for `gross` under the given reason.
///
/// `gate_refund_percent` (the configured insurance percent) applies only
/// to [`RefundReason::GateFailed`]; cancellations and administrative
/// rejections always refund in full.
pub fn refund_split(
    gross: Decimal,
    reason: RefundReason,
    gate_refund_percent: Decimal,
) -> InsuranceRefund {
    let percent = match reason {
        RefundReason::GateFailed => gate_refund_percent,
        RefundReason::SponsorCancelled | RefundReason::AdminRejected => Decimal::hundred(),
    };
    let refund = gross * percent / Decimal::hundred();
    InsuranceRefund {
        reason,
        refund,
        retained: gross - refund,
    }
}
