//! Formatting helpers for checkout display.
//!
//! Presentation only, no business logic. Everything here reads a computed
//! [`FeeCalculation`] and produces strings.

use serde::Serialize;

use crate::types::FeeCalculation;

/// Format a dollar amount as "$123.45".
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Label for the processing-fee line item on the checkout summary.
pub fn processing_fee_label(is_domestic: bool) -> &'static str {
    if is_domestic {
        "Card processing fees"
    } else {
        "International card processing fees"
    }
}

/// Currency-formatted breakdown for the checkout summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeBreakdownDisplay {
    pub subtotal: String,
    pub total: String,
    pub processing_fees: String,
    pub fee_type: String,
}

/// Build display strings for a computed split.
pub fn format_fee_breakdown(calc: &FeeCalculation) -> FeeBreakdownDisplay {
    FeeBreakdownDisplay {
        subtotal: format_money(calc.connected_amount),
        total: format_money(calc.customer_payment),
        processing_fees: format_money(calc.processing_fees_display),
        fee_type: processing_fee_label(calc.is_domestic).to_string(),
    }
}

/// One-sentence explanation of the fees for the confirmation screen.
pub fn fee_explanation(calc: &FeeCalculation) -> String {
    let region = if calc.is_domestic {
        "domestic"
    } else {
        "international"
    };
    format!(
        "A {} platform fee and {} Stripe processing fees were added so \
         the event organizer receives the full ticket price of {}; this card \
         was treated as {region}.",
        format_money(calc.platform_fee),
        format_money(calc.stripe_fee),
        format_money(calc.connected_amount),
    )
}
