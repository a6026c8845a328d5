use thiserror::Error;

use crate::domain::Decimal;

/// Caller-validation failures that indicate a bug upstream of the engine.
///
/// Degenerate-but-legal inputs (zero budget, zero total score, unknown
/// tier) never produce these; they yield structured zero/empty results so
/// a reconciliation batch can keep going.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Gross budget must be non-negative, got {0}")]
    NegativeBudget(Decimal),
    #[error("Commission percent must be within [0, 100], got {0}")]
    CommissionOutOfRange(Decimal),
}
