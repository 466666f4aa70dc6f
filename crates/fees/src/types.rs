//! Value objects shared across the fee engine.
//!
//! Every calculation produces a fresh `FeeCalculation`; callers build
//! payment-gateway requests and checkout display strings from it and never
//! mutate it afterwards.

use serde::{Deserialize, Serialize};

/// Card processing rate table: a percentage of the charged total plus a
/// fixed fee per charge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeRates {
    /// Percentage of the total charged amount (0.017 = 1.7%).
    pub percentage: f64,
    /// Fixed fee per charge, in dollars.
    pub fixed: f64,
}

/// Resolved parameters used for one calculation, echoed for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Platform fee fraction applied to the subtotal.
    pub platform_fee_percentage: f64,
    /// Ceiling the platform fee was clamped to, in dollars.
    pub platform_fee_cap: f64,
    /// Processing percentage actually applied (domestic or international).
    pub processing_percentage: f64,
    /// Fixed processing fee applied, in dollars.
    pub processing_fixed: f64,
}

/// The four-way split of money for a single charge.
///
/// All currency fields are rounded to whole cents; rounding happens only
/// when this record is built, never mid-calculation. Two invariants hold
/// for every value the engine produces:
///
///   1. `connected_amount + platform_fee + stripe_fee` is within one cent
///      of `customer_payment` (each field is rounded independently);
///   2. `platform_fee` never exceeds `breakdown.platform_fee_cap`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeCalculation {
    /// Amount the event organizer nets: the ticket subtotal, unchanged.
    pub connected_amount: f64,
    /// Platform fee, clamped at `breakdown.platform_fee_cap`.
    pub platform_fee: f64,
    /// Stripe processing fee: percentage of the total plus the fixed fee.
    pub stripe_fee: f64,
    /// Total charged to the paying customer.
    pub customer_payment: f64,
    /// Total overhead visible to the customer: platform + processing fees.
    pub processing_fees_display: f64,
    /// Whether the card was charged at the domestic rate.
    pub is_domestic: bool,
    /// Parameters the engine resolved for this calculation.
    pub breakdown: FeeBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeeCalculation {
        FeeCalculation {
            connected_amount: 500.0,
            platform_fee: 10.0,
            stripe_fee: 9.13,
            customer_payment: 519.13,
            processing_fees_display: 19.13,
            is_domestic: true,
            breakdown: FeeBreakdown {
                platform_fee_percentage: 0.02,
                platform_fee_cap: 20.0,
                processing_percentage: 0.017,
                processing_fixed: 0.30,
            },
        }
    }

    #[test]
    fn test_calculation_roundtrip_json() {
        let calc = sample();
        let json = serde_json::to_string(&calc).unwrap();
        let parsed: FeeCalculation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, calc);
    }

    #[test]
    fn test_calculation_json_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("connected_amount").is_some());
        assert!(json.get("customer_payment").is_some());
        assert!(json.get("processing_fees_display").is_some());
        assert!(json["breakdown"].get("platform_fee_cap").is_some());
    }

    #[test]
    fn test_rates_roundtrip_json() {
        let rates = FeeRates {
            percentage: 0.035,
            fixed: 0.30,
        };
        let json = serde_json::to_string(&rates).unwrap();
        let parsed: FeeRates = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rates);
    }
}
