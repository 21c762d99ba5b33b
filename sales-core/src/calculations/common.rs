//! Common utility functions shared by the pricing and commission
//! calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding (midpoint away from zero), the standard financial convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use sales_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(408.333)), dec!(408.33));
/// assert_eq!(round_half_up(dec!(408.335)), dec!(408.34));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds `value` up to the nearest multiple of `increment`.
///
/// Values already on a multiple are unchanged. `increment` must be positive;
/// a zero or negative increment returns `value` unchanged.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use sales_core::calculations::common::round_up_to_multiple;
///
/// assert_eq!(round_up_to_multiple(dec!(408.33), dec!(50)), dec!(450));
/// assert_eq!(round_up_to_multiple(dec!(450), dec!(50)), dec!(450));
/// ```
pub fn round_up_to_multiple(
    value: Decimal,
    increment: Decimal,
) -> Decimal {
    if increment <= Decimal::ZERO {
        return value;
    }
    (value / increment).ceil() * increment
}
