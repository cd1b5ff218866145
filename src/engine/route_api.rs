use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RouteAPI,
    entities::{Endpoints, ResolvedRoute, RouteRequest, TravelMode},
    error::{route_unavailable_error, Error},
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn resolve_route(&self, request: RouteRequest) -> Result<ResolvedRoute, Error> {
        let directions = self
            .maps
            .directions(request.origin, request.destination, TravelMode::Driving)
            .await
            .map_err(|_| route_unavailable_error())?;

        let distance_meters = directions
            .first_leg_distance()
            .ok_or_else(route_unavailable_error)?;

        Ok(ResolvedRoute::new(distance_meters))
    }

    #[tracing::instrument(skip(self))]
    async fn locate_endpoints(&self, request: RouteRequest) -> Result<Endpoints, Error> {
        let origin = self.maps.geocode(request.origin).await.ok();
        let destination = self.maps.geocode(request.destination).await.ok();

        Ok(Endpoints {
            origin,
            destination,
        })
    }
}
