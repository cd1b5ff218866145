use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A decimal amount held at a fixed number of places.
///
/// The amount is truncated toward negative infinity when the value is read,
/// so `2.4999` at three places is `2.499` and `-1.2349` at two places is
/// `-1.24`. Formatting for display is always two places for currency and
/// three for distance, whatever the truncation precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecimalValue {
    amount: Decimal,
    decimal_places: u32,
}

impl DecimalValue {
    pub fn new(amount: Decimal, decimal_places: u32) -> Self {
        Self {
            amount,
            decimal_places,
        }
    }

    pub fn value(&self) -> Decimal {
        truncate(self.amount, self.decimal_places)
    }

    pub fn to_currency(&self, prefix: &str) -> String {
        format!("{}{}", prefix, fixed(self.value(), 2))
    }

    pub fn to_distance(&self, suffix: &str) -> String {
        format!("{}{}", fixed(self.value(), 3), suffix)
    }
}

/// Floors `amount` at `decimal_places`.
pub fn truncate(amount: Decimal, decimal_places: u32) -> Decimal {
    amount.round_dp_with_strategy(decimal_places, RoundingStrategy::ToNegativeInfinity)
}

fn fixed(value: Decimal, places: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded.to_string()
}
