pub mod google_maps;

use async_trait::async_trait;

use crate::entities::{Coordinates, TravelMode};
use crate::error::Error;

pub use google_maps::{Directions, GoogleMaps};

/// The mapping service the fare pipeline depends on.
#[async_trait]
pub trait MapsAPI {
    async fn geocode(&self, address: String) -> Result<Coordinates, Error>;

    async fn directions(
        &self,
        origin: String,
        destination: String,
        mode: TravelMode,
    ) -> Result<Directions, Error>;
}
