//! Post-hoc consistency checks for computed fee splits.
//!
//! API routes run this on every calculation before the amounts are sent to
//! the payment gateway. It reports; it never panics and never errors.

use crate::types::FeeCalculation;

/// One cent, with slack for float representation.
const CENT_TOLERANCE: f64 = 0.011;

/// Result of validating a fee calculation.
#[derive(Debug, Clone)]
pub struct FeeValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Independently re-derive every consistency check on a computed split.
///
/// Each violated check contributes one message. The four currency fields
/// are rounded independently, so the sum-of-parts check allows a one-cent
/// tolerance.
pub fn validate_fee_calculation(calc: &FeeCalculation) -> FeeValidation {
    let mut errors = Vec::new();

    let parts = calc.connected_amount + calc.platform_fee + calc.stripe_fee;
    if (parts - calc.customer_payment).abs() > CENT_TOLERANCE {
        errors.push(format!(
            "Sum of parts ${parts:.2} (connected ${:.2} + platform ${:.2} + stripe ${:.2}) \
             does not match customer payment ${:.2}",
            calc.connected_amount, calc.platform_fee, calc.stripe_fee, calc.customer_payment
        ));
    }

    if calc.platform_fee > calc.breakdown.platform_fee_cap + CENT_TOLERANCE {
        errors.push(format!(
            "Platform fee ${:.2} exceeds cap ${:.2}",
            calc.platform_fee, calc.breakdown.platform_fee_cap
        ));
    }

    let overhead = calc.customer_payment - calc.connected_amount;
    if (calc.processing_fees_display - overhead).abs() > CENT_TOLERANCE {
        errors.push(format!(
            "Displayed fees ${:.2} do not match customer payment minus connected amount ${overhead:.2}",
            calc.processing_fees_display
        ));
    }

    FeeValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}
