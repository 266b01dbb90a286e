use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary amount to two decimals, half away from zero.
///
/// Applied to every amount at the point it is computed (line amount, line
/// tax, subtotal sums, grand totals), never only at the end.
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
