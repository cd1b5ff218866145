mod decimal;
mod fare;
mod location;
mod route;

pub use decimal::{truncate, DecimalValue};
pub use fare::{FareConfig, FareResult};
pub use location::{Coordinates, Endpoints};
pub use route::{ResolvedRoute, RouteRequest, TravelMode};
