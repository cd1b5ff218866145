use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::{Endpoints, FareResult, ResolvedRoute, RouteRequest};
use crate::error::Error;

#[async_trait]
pub trait RouteAPI {
    /// Fails with a single route-unavailable error whatever went wrong.
    async fn resolve_route(&self, request: RouteRequest) -> Result<ResolvedRoute, Error>;

    /// Geocodes origin then destination. An end that cannot be placed is
    /// left empty instead of failing the whole lookup.
    async fn locate_endpoints(&self, request: RouteRequest) -> Result<Endpoints, Error>;
}

#[async_trait]
pub trait FareAPI {
    async fn estimate_fare(&self, request: RouteRequest) -> Result<FareResult, Error>;
}

pub trait API: RouteAPI + FareAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
