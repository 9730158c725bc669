// cafe-core/src/money.rs

//! Prices and totals.
//!
//! Amounts are `rust_decimal::Decimal` in the shop's single currency. On the
//! wire they travel as JSON numbers (`rust_decimal::serde::float`); numeric
//! strings are accepted when reading.

use rust_decimal::{Decimal, RoundingStrategy};

/// Symbol the menu prints in front of prices.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Price times quantity, `None` when it does not fit in a `Decimal`.
pub fn line_total(unit_price: Decimal, quantity: u32) -> Option<Decimal> {
  unit_price.checked_mul(Decimal::from(quantity))
}

/// Sum of amounts, `None` on overflow.
pub fn checked_sum<I>(amounts: I) -> Option<Decimal>
where
  I: IntoIterator<Item = Option<Decimal>>,
{
  amounts
    .into_iter()
    .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount?))
}

/// Formats an amount with two decimals, e.g. `₹12.50`.
pub fn format_amount(amount: Decimal) -> String {
  let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
  format!("{}{:.2}", CURRENCY_SYMBOL, rounded)
}

/// At most two fractional digits once trailing zeros are dropped.
pub fn has_cent_precision(amount: Decimal) -> bool {
  amount.normalize().scale() <= 2
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn line_total_multiplies() {
    assert_eq!(line_total(Decimal::new(250, 2), 3), Some(Decimal::new(750, 2)));
    assert_eq!(line_total(Decimal::new(250, 2), 0), Some(Decimal::ZERO));
    assert_eq!(line_total(Decimal::MAX, 2), None);
  }

  #[test]
  fn checked_sum_stops_at_overflow() {
    let small = [Some(Decimal::ONE), Some(Decimal::new(250, 2))];
    assert_eq!(checked_sum(small), Some(Decimal::new(350, 2)));
    assert_eq!(checked_sum([Some(Decimal::MAX), Some(Decimal::ONE)]), None);
    assert_eq!(checked_sum([Some(Decimal::ONE), None]), None);
    assert_eq!(checked_sum(Vec::new()), Some(Decimal::ZERO));
  }

  #[test]
  fn format_pads_to_two_places() {
    assert_eq!(format_amount(Decimal::new(5, 0)), "₹5.00");
    assert_eq!(format_amount(Decimal::new(12345, 3)), "₹12.35");
  }

  #[test]
  fn cent_precision() {
    assert!(has_cent_precision(Decimal::new(1999, 2)));
    assert!(has_cent_precision(Decimal::new(19900, 3)));
    assert!(!has_cent_precision(Decimal::new(19999, 3)));
  }
}
