use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{FareAPI, RouteAPI},
    entities::{FareResult, RouteRequest},
    error::Error,
};

#[async_trait]
impl FareAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn estimate_fare(&self, request: RouteRequest) -> Result<FareResult, Error> {
        let route = self.resolve_route(request).await?;

        self.fare_config.calculate(&route)
    }
}
