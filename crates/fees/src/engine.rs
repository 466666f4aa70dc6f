//! Core fee split computation.
//!
//! The engine guarantees the event organizer nets the full ticket subtotal:
//! a capped platform fee and the Stripe processing fee are layered on top,
//! and the paying customer absorbs both in a grossed-up total.

use crate::config::FeeConfig;
use crate::constants::DOMESTIC_COUNTRY_CODE;
use crate::error::{FeeError, FeeResult};
use crate::types::{FeeBreakdown, FeeCalculation};

/// Per-call options for [`calculate_fees`].
#[derive(Debug, Clone)]
pub struct FeeOptions {
    /// Charge domestic (AU) rates instead of international.
    pub is_domestic: bool,
    /// Override the configured platform fee percentage.
    pub platform_fee_percentage: Option<f64>,
    /// Override the configured platform fee cap.
    pub platform_fee_cap: Option<f64>,
}

impl FeeOptions {
    /// Options for a domestic card with configured fee parameters.
    pub fn domestic() -> Self {
        Self {
            is_domestic: true,
            platform_fee_percentage: None,
            platform_fee_cap: None,
        }
    }

    /// Options for an international card with configured fee parameters.
    pub fn international() -> Self {
        Self {
            is_domestic: false,
            platform_fee_percentage: None,
            platform_fee_cap: None,
        }
    }
}

/// Calculate the fee split for a ticket subtotal, in dollars.
///
/// Configuration comes from the environment; `options` may override the
/// platform-fee parameters per call. Overrides must be finite and
/// non-negative.
pub fn calculate_fees(subtotal: f64, options: &FeeOptions) -> FeeResult<FeeCalculation> {
    let mut config = FeeConfig::from_env();

    if let Some(pct) = options.platform_fee_percentage {
        if !pct.is_finite() || pct < 0.0 {
            return Err(FeeError::Config(format!(
                "platform fee percentage override {pct} is not a finite, non-negative fraction"
            )));
        }
        config.platform_fee_percentage = pct;
    }
    if let Some(cap) = options.platform_fee_cap {
        if !cap.is_finite() || cap < 0.0 {
            return Err(FeeError::Config(format!(
                "platform fee cap override {cap} is not a finite, non-negative amount"
            )));
        }
        config.platform_fee_cap = cap;
    }

    calculate_fees_with_config(subtotal, options.is_domestic, &config)
}

/// Calculate the fee split against an explicit configuration snapshot.
///
/// The core formula:
/// ```text
///   platform_fee = min(subtotal × platform_fee_percentage, platform_fee_cap)
///   base         = subtotal + platform_fee
///   total        = (base + fixed) / (1 − percentage)
///   stripe_fee   = total − base
/// ```
///
/// Charging the customer `total` and remitting `base` to the organizer
/// leaves Stripe exactly `total × percentage + fixed`. Intermediates keep
/// full precision; only the output record is rounded to cents.
pub fn calculate_fees_with_config(
    subtotal: f64,
    is_domestic: bool,
    config: &FeeConfig,
) -> FeeResult<FeeCalculation> {
    if !subtotal.is_finite() || subtotal < 0.0 {
        return Err(FeeError::InvalidSubtotal(subtotal));
    }

    let rates = config.rates(is_domestic);
    let platform_fee = (subtotal * config.platform_fee_percentage).min(config.platform_fee_cap);
    let base = subtotal + platform_fee;
    let total = (base + rates.fixed) / (1.0 - rates.percentage);

    Ok(FeeCalculation {
        connected_amount: round_cents(subtotal),
        platform_fee: round_cents(platform_fee),
        stripe_fee: round_cents(total - base),
        customer_payment: round_cents(total),
        processing_fees_display: round_cents(total - subtotal),
        is_domestic,
        breakdown: FeeBreakdown {
            platform_fee_percentage: config.platform_fee_percentage,
            platform_fee_cap: config.platform_fee_cap,
            processing_percentage: rates.percentage,
            processing_fixed: rates.fixed,
        },
    })
}

/// Calculate fees resolving the card region from a two-letter country code.
///
/// An unknown, absent, or empty code is treated as international, the
/// conservative (higher-fee) assumption when the location is unknown.
pub fn calculate_fees_with_geolocation(
    subtotal: f64,
    country_code: Option<&str>,
) -> FeeResult<FeeCalculation> {
    let options = if is_domestic_card(country_code) {
        FeeOptions::domestic()
    } else {
        FeeOptions::international()
    };
    calculate_fees(subtotal, &options)
}

/// Is this card issued in the domestic (AU) region? Case-insensitive;
/// absent or empty codes resolve to international.
pub fn is_domestic_card(country_code: Option<&str>) -> bool {
    country_code
        .map(|code| code.trim().eq_ignore_ascii_case(DOMESTIC_COUNTRY_CODE))
        .unwrap_or(false)
}

/// Round a dollar amount to whole cents.
fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
