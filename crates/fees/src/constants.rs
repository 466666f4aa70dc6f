//! Universal constants for the LodgeTix fee engine.

/// Country code whose cards are charged at the domestic rate.
pub const DOMESTIC_COUNTRY_CODE: &str = "AU";

/// Stripe percentage rate for domestic (AU) cards (0.017 = 1.7%).
pub const DOMESTIC_RATE_PERCENTAGE: f64 = 0.017;

/// Stripe percentage rate for international cards (0.035 = 3.5%).
pub const INTERNATIONAL_RATE_PERCENTAGE: f64 = 0.035;

/// Fixed Stripe fee per charge, in dollars. Same for both card regions.
pub const PROCESSING_FIXED_FEE: f64 = 0.30;

/// Default platform fee taken as a fraction of the subtotal (0.02 = 2%).
pub const DEFAULT_PLATFORM_FEE_PERCENTAGE: f64 = 0.02;

/// Default ceiling for the platform fee, in dollars.
pub const DEFAULT_PLATFORM_FEE_CAP: f64 = 20.0;

/// Environment variable overriding the platform fee percentage.
pub const PLATFORM_FEE_PERCENTAGE_ENV: &str = "PLATFORM_FEE_PERCENTAGE";

/// Environment variable overriding the platform fee cap.
pub const PLATFORM_FEE_CAP_ENV: &str = "PLATFORM_FEE_CAP";
