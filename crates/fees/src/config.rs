//! Fee configuration: static rate tables plus two environment-tunable
//! platform-fee parameters.
//!
//! Resolution never fails: a missing or malformed environment value falls
//! back to the documented default. The engine must never see a NaN.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_PLATFORM_FEE_CAP, DEFAULT_PLATFORM_FEE_PERCENTAGE, DOMESTIC_RATE_PERCENTAGE,
    INTERNATIONAL_RATE_PERCENTAGE, PLATFORM_FEE_CAP_ENV, PLATFORM_FEE_PERCENTAGE_ENV,
    PROCESSING_FIXED_FEE,
};
use crate::types::FeeRates;

/// Resolved fee parameters for a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Platform fee as a fraction of the subtotal (0.02 = 2%).
    pub platform_fee_percentage: f64,
    /// Absolute ceiling for the platform fee, in dollars.
    pub platform_fee_cap: f64,
    /// Processing rates for domestic (AU) cards.
    pub domestic: FeeRates,
    /// Processing rates for all other cards.
    pub international: FeeRates,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            platform_fee_percentage: DEFAULT_PLATFORM_FEE_PERCENTAGE,
            platform_fee_cap: DEFAULT_PLATFORM_FEE_CAP,
            domestic: FeeRates {
                percentage: DOMESTIC_RATE_PERCENTAGE,
                fixed: PROCESSING_FIXED_FEE,
            },
            international: FeeRates {
                percentage: INTERNATIONAL_RATE_PERCENTAGE,
                fixed: PROCESSING_FIXED_FEE,
            },
        }
    }
}

impl FeeConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            platform_fee_percentage: resolve_value(
                PLATFORM_FEE_PERCENTAGE_ENV,
                std::env::var(PLATFORM_FEE_PERCENTAGE_ENV).ok().as_deref(),
                DEFAULT_PLATFORM_FEE_PERCENTAGE,
            ),
            platform_fee_cap: resolve_value(
                PLATFORM_FEE_CAP_ENV,
                std::env::var(PLATFORM_FEE_CAP_ENV).ok().as_deref(),
                DEFAULT_PLATFORM_FEE_CAP,
            ),
            ..Self::default()
        }
    }

    /// Select the processing rate table for a card region.
    pub fn rates(&self, is_domestic: bool) -> &FeeRates {
        if is_domestic {
            &self.domestic
        } else {
            &self.international
        }
    }
}

/// Parse a raw configuration value, falling back to `default` when the
/// value is absent, unparsable, non-finite, or negative.
fn resolve_value(key: &str, raw: Option<&str>, default: f64) -> f64 {
    match raw {
        None => default,
        Some(s) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => v,
            _ => {
                tracing::warn!("ignoring malformed {key}={s:?}, using default {default}");
                default
            }
        },
    }
}

/// Platform fee percentage resolved from the environment.
pub fn platform_fee_percentage() -> f64 {
    FeeConfig::from_env().platform_fee_percentage
}

/// Platform fee cap resolved from the environment.
pub fn platform_fee_cap() -> f64 {
    FeeConfig::from_env().platform_fee_cap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FeeConfig::default();
        assert_eq!(config.platform_fee_percentage, 0.02);
        assert_eq!(config.platform_fee_cap, 20.0);
        assert_eq!(config.domestic.percentage, 0.017);
        assert_eq!(config.international.percentage, 0.035);
        // Fixed fee is identical for both card regions
        assert_eq!(config.domestic.fixed, config.international.fixed);
    }

    #[test]
    fn test_rates_selection() {
        let config = FeeConfig::default();
        assert_eq!(config.rates(true).percentage, 0.017);
        assert_eq!(config.rates(false).percentage, 0.035);
    }

    #[test]
    fn test_resolve_value_absent() {
        assert_eq!(resolve_value("X", None, 0.02), 0.02);
    }

    #[test]
    fn test_resolve_value_parses() {
        assert_eq!(resolve_value("X", Some("0.025"), 0.02), 0.025);
        assert_eq!(resolve_value("X", Some("  25 "), 20.0), 25.0);
        assert_eq!(resolve_value("X", Some("0"), 20.0), 0.0);
    }

    #[test]
    fn test_resolve_value_garbage_falls_back() {
        assert_eq!(resolve_value("X", Some("two percent"), 0.02), 0.02);
        assert_eq!(resolve_value("X", Some(""), 0.02), 0.02);
        assert_eq!(resolve_value("X", Some("1.2.3"), 20.0), 20.0);
    }

    #[test]
    fn test_resolve_value_nonfinite_falls_back() {
        assert_eq!(resolve_value("X", Some("NaN"), 0.02), 0.02);
        assert_eq!(resolve_value("X", Some("inf"), 20.0), 20.0);
    }

    #[test]
    fn test_resolve_value_negative_falls_back() {
        assert_eq!(resolve_value("X", Some("-0.02"), 0.02), 0.02);
        assert_eq!(resolve_value("X", Some("-20"), 20.0), 20.0);
    }

    #[test]
    fn test_getters_match_from_env() {
        // Env is untouched in tests, so both resolve to the defaults.
        assert_eq!(platform_fee_percentage(), 0.02);
        assert_eq!(platform_fee_cap(), 20.0);
    }
}
