//! Domain types and determinism layer for the payout allocation engine.
//!
//! This module provides:
//! - Lossless numeric handling via Decimal wrapper
//! - Domain primitives: CampaignId, SubmissionId, EngagementCounts, PerformanceTier
//! - Campaign and submission input/output aggregates with canonical JSON serialization

pub mod campaign;
pub mod decimal;
pub mod primitives;
pub mod submission;

pub use campaign::{CampaignInput, CampaignPayout};
pub use decimal::Decimal;
pub use primitives::{CampaignId, EngagementCounts, PerformanceTier, SubmissionId};
pub use submission::{ConfirmedFigures, SubmissionInput, SubmissionPayout};
