mod handlers;

use std::net::SocketAddr;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::DynAPI;
use crate::config::Labels;
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{fares, locations};

pub fn router(api: DynAPI, labels: Labels) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/fares", post(fares::create))
        .route("/locations", post(locations::create))
        .layer(Extension(api))
        .layer(Extension(labels))
}

pub async fn serve(api: DynAPI, labels: Labels, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api, labels);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|_| unexpected_error())
}

async fn root() -> &'static str {
    "ok"
}
