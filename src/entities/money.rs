use rust_decimal::{Decimal, RoundingStrategy};

// Half-up to 2 decimal places, applied at each money-producing step rather
// than once at the end.
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
