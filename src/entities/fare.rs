use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::{truncate, DecimalValue, ResolvedRoute};
use crate::error::{invalid_config_error, route_unavailable_error, Error};

/// Tiered linear rate: `base_rate` covers the first `distance_unit` km and
/// every further started `distance_unit` costs `rate_per_distance_unit`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FareConfig {
    base_rate: Decimal,
    distance_unit: Decimal,
    rate_per_distance_unit: Decimal,
}

impl FareConfig {
    pub fn new(
        base_rate: Decimal,
        distance_unit: Decimal,
        rate_per_distance_unit: Decimal,
    ) -> Result<Self, Error> {
        if base_rate.is_sign_negative() {
            return Err(invalid_config_error("base_rate"));
        }
        if distance_unit <= Decimal::ZERO {
            return Err(invalid_config_error("distance_unit"));
        }
        if rate_per_distance_unit.is_sign_negative() {
            return Err(invalid_config_error("rate_per_distance_unit"));
        }

        Ok(Self {
            base_rate,
            distance_unit,
            rate_per_distance_unit,
        })
    }

    pub fn base_rate(&self) -> Decimal {
        self.base_rate
    }

    pub fn distance_unit(&self) -> Decimal {
        self.distance_unit
    }

    pub fn rate_per_distance_unit(&self) -> Decimal {
        self.rate_per_distance_unit
    }

    /// Applies the fare formula to a resolved route.
    ///
    /// Trips shorter than one `distance_unit` produce a non-positive tier
    /// count, which lowers the fare below `base_rate`. The formula is kept
    /// as is; callers that want a floor must clamp the result themselves.
    /// A fare that does not fit in a `Decimal` is reported as an unavailable
    /// route.
    #[tracing::instrument(level = "debug")]
    pub fn calculate(&self, route: &ResolvedRoute) -> Result<FareResult, Error> {
        let total_distance = truncate(route.distance_km(), 3);
        let distance_over_base = total_distance
            .checked_sub(self.distance_unit)
            .map(|over| truncate(over, 3))
            .ok_or_else(route_unavailable_error)?;
        let tier_count = distance_over_base
            .checked_div(self.distance_unit)
            .ok_or_else(route_unavailable_error)?
            .ceil();
        let distance_fare = self
            .rate_per_distance_unit
            .checked_mul(tier_count)
            .map(|fare| truncate(fare, 2))
            .ok_or_else(route_unavailable_error)?;
        let total_fare = self
            .base_rate
            .checked_add(distance_fare)
            .map(|fare| truncate(fare, 2))
            .ok_or_else(route_unavailable_error)?;

        Ok(FareResult {
            total_fare: DecimalValue::new(total_fare, 2),
            total_distance: DecimalValue::new(total_distance, 3),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareResult {
    pub total_fare: DecimalValue,
    pub total_distance: DecimalValue,
}
