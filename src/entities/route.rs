use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Free-text origin and destination as typed by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
}

impl RouteRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// The distance of the first leg of the first route returned for a request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRoute {
    pub distance_meters: u64,
}

impl ResolvedRoute {
    pub fn new(distance_meters: u64) -> Self {
        Self { distance_meters }
    }

    pub fn distance_km(&self) -> Decimal {
        Decimal::from(self.distance_meters) / Decimal::from(1000)
    }
}

/// Travel modes the Directions client can request. Fare estimates always
/// ask for `Driving`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }
}
