use axum::extract::{Extension, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::config::Labels;
use crate::entities::RouteRequest;
use crate::error::Error;
use crate::widget::render;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    origin: String,
    destination: String,
}

#[derive(Serialize, Deserialize)]
pub struct FareView {
    fare: String,
    distance: String,
    total_fare: Decimal,
    total_distance: Decimal,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Extension(labels): Extension<Labels>,
    Json(params): Json<CreateParams>,
) -> Result<Json<FareView>, Error> {
    let request = RouteRequest::new(params.origin, params.destination);

    let estimate = api.estimate_fare(request).await.map_err(|err| {
        if err.is_route_unavailable() {
            Error {
                code: err.code,
                message: labels.route_error.clone(),
            }
        } else {
            err
        }
    })?;

    let (fare, distance) = render(&estimate, &labels);

    Ok(FareView {
        fare,
        distance,
        total_fare: estimate.total_fare.value(),
        total_distance: estimate.total_distance.value(),
    }
    .into())
}
