//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary math in the engine is done in `Decimal`. Rounding is never
//! applied inside aggregation — only the explicit display helpers round, so
//! repeated computation cannot drift by accumulated cents.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Round a decimal for display, 2 decimal places half-up
#[inline]
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Tax-inclusive display price: `base + base * tax_rate / 100`
///
/// The result is intentionally NOT rounded — this is the exact financial
/// display value; callers round via [`round_display`] at the last moment.
/// `tax_inclusive_price(33.33, 7.5)` is exactly `35.82975`.
#[inline]
pub fn tax_inclusive_price(base: Decimal, tax_rate_percent: Decimal) -> Decimal {
    base + base * tax_rate_percent / Decimal::ONE_HUNDRED
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < MONEY_TOLERANCE
}
