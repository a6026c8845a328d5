use std::collections::HashMap;
use thiserror::Error;

use crate::domain::Decimal;
use crate::engine::allocator;
use crate::engine::budget::INSURANCE_REFUND_PERCENT;
use crate::engine::eligibility::EligibilityRule;
use crate::engine::gate::ThresholdTable;
use crate::engine::score::ScoreWeights;

/// Tunable constants of the allocation engine.
///
/// `Default` carries the canonical production values; `from_env_map` lets
/// deployments override any of them. The gate threshold table is part of
/// the config so tiers can be retuned without touching the algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub weights: ScoreWeights,
    /// Per-participant ceiling on the share of the net pool.
    pub cap: Decimal,
    pub eligibility: EligibilityRule,
    pub thresholds: ThresholdTable,
    /// Percent of gross budget refunded to the sponsor on a failed gate.
    pub insurance_refund_percent: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            weights: ScoreWeights::default(),
            cap: allocator::default_cap(),
            eligibility: EligibilityRule::default(),
            thresholds: ThresholdTable::default(),
            insurance_refund_percent: Decimal::from_parts(INSURANCE_REFUND_PERCENT, 0),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    /// Build a config from an env map. Every key is optional; unset keys
    /// keep their compiled defaults.
    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = EngineConfig::default();

        if let Some(v) = parse_decimal(&env_map, "SCORE_WEIGHT_VIEWS")? {
            config.weights.views = v;
        }
        if let Some(v) = parse_decimal(&env_map, "SCORE_WEIGHT_LIKES")? {
            config.weights.likes = v;
        }
        if let Some(v) = parse_decimal(&env_map, "SCORE_WEIGHT_SHARES")? {
            config.weights.shares = v;
        }

        if let Some(v) = parse_decimal(&env_map, "PAYOUT_CAP")? {
            if !v.is_positive() || v > Decimal::one() {
                return Err(ConfigError::InvalidValue(
                    "PAYOUT_CAP".to_string(),
                    "must be within (0, 1]".to_string(),
                ));
            }
            config.cap = v;
        }

        if let Some(v) = parse_decimal(&env_map, "MIN_ELIGIBLE_SCORE")? {
            config.eligibility.min_score = v;
        }
        if let Some(v) = parse_decimal(&env_map, "MIN_ELIGIBLE_SHARE")? {
            if v.is_negative() || v > Decimal::one() {
                return Err(ConfigError::InvalidValue(
                    "MIN_ELIGIBLE_SHARE".to_string(),
                    "must be within [0, 1]".to_string(),
                ));
            }
            config.eligibility.min_share = v;
        }

        if let Some(v) = parse_decimal(&env_map, "INSURANCE_REFUND_PERCENT")? {
            if v.is_negative() || v > Decimal::hundred() {
                return Err(ConfigError::InvalidValue(
                    "INSURANCE_REFUND_PERCENT".to_string(),
                    "must be within [0, 100]".to_string(),
                ));
            }
            config.insurance_refund_percent = v;
        }

        Ok(config)
    }
}

fn parse_decimal(
    env_map: &HashMap<String, String>,
    key: &str,
) -> Result<Option<Decimal>, ConfigError> {
    match env_map.get(key) {
        None => Ok(None),
        Some(raw) => Decimal::from_str_canonical(raw).map(Some).map_err(|_| {
            ConfigError::InvalidValue(key.to_string(), "must be a valid decimal".to_string())
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_empty_env_gives_defaults() {
        let config = EngineConfig::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.cap, d("0.4"));
        assert_eq!(config.weights.views, d("0.01"));
        assert_eq!(config.eligibility.min_share, d("0.001"));
        assert_eq!(config.insurance_refund_percent, d("95"));
    }

    #[test]
    fn test_overrides_apply() {
        let mut env_map = HashMap::new();
        env_map.insert("PAYOUT_CAP".to_string(), "0.5".to_string());
        env_map.insert("SCORE_WEIGHT_VIEWS".to_string(), "0.02".to_string());
        env_map.insert("MIN_ELIGIBLE_SCORE".to_string(), "25".to_string());
        let config = EngineConfig::from_env_map(env_map).unwrap();
        assert_eq!(config.cap, d("0.5"));
        assert_eq!(config.weights.views, d("0.02"));
        assert_eq!(config.eligibility.min_score, d("25"));
        // Untouched keys keep their defaults.
        assert_eq!(config.weights.shares, Decimal::one());
    }

    #[test]
    fn test_invalid_decimal_rejected() {
        let mut env_map = HashMap::new();
        env_map.insert("PAYOUT_CAP".to_string(), "lots".to_string());
        match EngineConfig::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PAYOUT_CAP"),
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_cap_out_of_range_rejected() {
        for bad in ["0", "-0.1", "1.5"] {
            let mut env_map = HashMap::new();
            env_map.insert("PAYOUT_CAP".to_string(), bad.to_string());
            match EngineConfig::from_env_map(env_map) {
                Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PAYOUT_CAP"),
                other => panic!("Expected InvalidValue for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_insurance_refund_percent_override() {
        let mut env_map = HashMap::new();
        env_map.insert("INSURANCE_REFUND_PERCENT".to_string(), "90".to_string());
        let config = EngineConfig::from_env_map(env_map).unwrap();
        assert_eq!(config.insurance_refund_percent, d("90"));
    }

    #[test]
    fn test_insurance_refund_percent_out_of_range_rejected() {
        for bad in ["-1", "100.5"] {
            let mut env_map = HashMap::new();
            env_map.insert("INSURANCE_REFUND_PERCENT".to_string(), bad.to_string());
            match EngineConfig::from_env_map(env_map) {
                Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "INSURANCE_REFUND_PERCENT"),
                other => panic!("Expected InvalidValue for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_min_share_out_of_range_rejected() {
        let mut env_map = HashMap::new();
        env_map.insert("MIN_ELIGIBLE_SHARE".to_string(), "1.01".to_string());
        match EngineConfig::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "MIN_ELIGIBLE_SHARE"),
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }
}
