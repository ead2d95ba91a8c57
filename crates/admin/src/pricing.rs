//! Price derivation for product writes.
//!
//! Admins enter INR prices; USD and EUR are derived with fixed divisors and
//! rounded to two decimal places, half away from zero. The divisors are
//! deliberately static, so derived prices drift from market rates until a
//! product is re-saved.

use rust_decimal::{Decimal, RoundingStrategy};
use wavecrest_core::PriceSet;

/// Fixed INR per USD divisor.
const INR_PER_USD: i64 = 83;
/// Fixed INR per EUR divisor.
const INR_PER_EUR: i64 = 90;

/// Derive the full price set from an INR price.
#[must_use]
pub fn derive_from_inr(price_inr: Decimal) -> PriceSet {
    PriceSet::new(
        price_inr,
        round(price_inr / Decimal::from(INR_PER_USD)),
        round(price_inr / Decimal::from(INR_PER_EUR)),
    )
}

fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
