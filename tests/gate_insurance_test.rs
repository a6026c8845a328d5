use payfluence::{
    CampaignId, CampaignInput, Decimal, EngagementCounts, EngineConfig, GateFailure, PayoutEngine,
    RefundReason, SubmissionId, SubmissionInput,
};

fn d(s: &str) -> Decimal {
    Decimal::from_str_canonical(s).unwrap()
}

fn campaign(tier: &str, submissions: Vec<SubmissionInput>) -> CampaignInput {
    CampaignInput {
        id: CampaignId::new("camp-gate"),
        gross_budget: d("10000"),
        commission_percent: d("20"),
        tier: tier.to_string(),
        submissions,
    }
}

fn quiet_submission(id: &str) -> SubmissionInput {
    SubmissionInput::new(SubmissionId::new(id), EngagementCounts::new(100, 1, 0))
}

#[test]
fn test_every_failing_dimension_reported() {
    // Two near-silent submissions against tier C: all three dimensions short.
    let engine = PayoutEngine::default();
    let payout = engine
        .reconcile(&campaign(
            "C",
            vec![quiet_submission("s1"), quiet_submission("s2")],
        ))
        .unwrap();

    assert!(!payout.gate.passed);
    let kinds: Vec<&str> = payout
        .gate
        .failures
        .iter()
        .map(|f| match f {
            GateFailure::UnknownTier { .. } => "tier",
            GateFailure::SubmissionCount { .. } => "count",
            GateFailure::TotalScore { .. } => "score",
            GateFailure::TotalViews { .. } => "views",
        })
        .collect();
    assert_eq!(kinds, vec!["count", "score", "views"]);
}

#[test]
fn test_unknown_tier_fails_without_payout() {
    let engine = PayoutEngine::default();
    let submissions = (0..50)
        .map(|i| {
            SubmissionInput::new(
                SubmissionId::new(format!("s{}", i)),
                EngagementCounts::new(100_000, 500, 200),
            )
        })
        .collect();
    let payout = engine.reconcile(&campaign("platinum", submissions)).unwrap();

    // Metrics that would clear any real tier still fail on the bad label.
    assert!(!payout.gate.passed);
    assert_eq!(
        payout.gate.failures,
        vec![GateFailure::UnknownTier {
            label: "platinum".to_string()
        }]
    );
    assert!(payout.payouts.is_empty());
    assert!(payout.insurance_refund.is_some());
}

#[test]
fn test_insurance_refund_is_95_percent_of_gross() {
    let engine = PayoutEngine::default();
    let payout = engine
        .reconcile(&campaign("C", vec![quiet_submission("s1")]))
        .unwrap();

    let refund = payout.insurance_refund.unwrap();
    assert_eq!(refund.reason, RefundReason::GateFailed);
    assert_eq!(refund.refund, d("9500"));
    assert_eq!(refund.retained, d("500"));
    assert_eq!(refund.refund + refund.retained, d("10000"));
}

#[test]
fn test_configured_refund_percent_reaches_the_split() {
    let mut config = EngineConfig::default();
    config.insurance_refund_percent = d("90");
    let engine = PayoutEngine::new(config);

    let payout = engine
        .reconcile(&campaign("C", vec![quiet_submission("s1")]))
        .unwrap();

    let refund = payout.insurance_refund.unwrap();
    assert_eq!(refund.refund, d("9000"));
    assert_eq!(refund.retained, d("1000"));
}

#[test]
fn test_gate_refund_less_generous_than_cancellation() {
    // Cancellation and rejection refund in full; only the failed gate
    // costs the sponsor the 5% insurance fee.
    assert_eq!(RefundReason::GateFailed.refund_percent(), d("95"));
    assert_eq!(RefundReason::SponsorCancelled.refund_percent(), d("100"));
    assert_eq!(RefundReason::AdminRejected.refund_percent(), d("100"));
}
