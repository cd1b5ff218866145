use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::{Endpoints, RouteRequest};
use crate::error::Error;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<Endpoints>, Error> {
    let endpoints = api.locate_endpoints(request).await?;

    Ok(endpoints.into())
}
