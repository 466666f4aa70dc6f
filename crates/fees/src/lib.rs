//! LodgeTix payment fee engine.
//!
//! Computes the four-way split of money for an event ticket charge: the
//! amount the event organizer nets (the full subtotal), a capped platform
//! fee, the Stripe processing fee, and the grossed-up total the customer
//! pays. Pure, synchronous computation with no I/O or shared state; safe to
//! call concurrently from any number of request handlers.

// ── Value objects ──
pub mod constants;
pub mod error;
pub mod types;

// ── Configuration ──
pub mod config;

// ── Engine ──
pub mod engine;
pub mod validate;

// ── Presentation ──
pub mod fmt;

pub use config::FeeConfig;
pub use engine::{
    calculate_fees, calculate_fees_with_config, calculate_fees_with_geolocation,
    is_domestic_card, FeeOptions,
};
pub use error::{FeeError, FeeResult};
pub use fmt::{fee_explanation, format_fee_breakdown, processing_fee_label, FeeBreakdownDisplay};
pub use types::{FeeBreakdown, FeeCalculation, FeeRates};
pub use validate::{validate_fee_calculation, FeeValidation};
