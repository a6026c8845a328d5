//! Domain primitives: CampaignId, SubmissionId, EngagementCounts, PerformanceTier.

use serde::{Deserialize, Serialize};

/// Opaque campaign identifier, supplied by the caller's store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CampaignId(pub String);

impl CampaignId {
    pub fn new(id: impl Into<String>) -> Self {
        CampaignId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque submission identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    pub fn new(id: impl Into<String>) -> Self {
        SubmissionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw engagement counts for one submission, as fetched by the caller.
///
/// Unsigned by construction: a negative count upstream is a caller bug and
/// cannot reach the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngagementCounts {
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
}

impl EngagementCounts {
    pub fn new(views: u64, likes: u64, shares: u64) -> Self {
        EngagementCounts {
            views,
            likes,
            shares,
        }
    }
}

/// Declared performance tier of a campaign, worst to best.
///
/// The tier selects the insurance thresholds a campaign must clear before
/// its creator pool is distributed. Campaign records carry the tier as a
/// free-form string; parsing failures surface as a gate failure, not an
/// error, so a corrupt tier never panics a reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    C,
    B,
    A,
    S,
}

impl PerformanceTier {
    /// Parse a caller-supplied tier label. Case-insensitive.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "C" => Some(PerformanceTier::C),
            "B" => Some(PerformanceTier::B),
            "A" => Some(PerformanceTier::A),
            "S" => Some(PerformanceTier::S),
            _ => None,
        }
    }

    pub fn all() -> [PerformanceTier; 4] {
        [
            PerformanceTier::C,
            PerformanceTier::B,
            PerformanceTier::A,
            PerformanceTier::S,
        ]
    }
}

impl std::fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PerformanceTier::C => "C",
            PerformanceTier::B => "B",
            PerformanceTier::A => "A",
            PerformanceTier::S => "S",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parse_accepts_lowercase_and_whitespace() {
        assert_eq!(PerformanceTier::parse("s"), Some(PerformanceTier::S));
        assert_eq!(PerformanceTier::parse(" b "), Some(PerformanceTier::B));
    }

    #[test]
    fn test_tier_parse_rejects_unknown() {
        assert_eq!(PerformanceTier::parse("platinum"), None);
        assert_eq!(PerformanceTier::parse(""), None);
    }

    #[test]
    fn test_tier_ordering_worst_to_best() {
        assert!(PerformanceTier::C < PerformanceTier::B);
        assert!(PerformanceTier::A < PerformanceTier::S);
    }
}
