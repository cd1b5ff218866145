use std::sync::Arc;

use taxifare::api::DynAPI;
use taxifare::config::Settings;
use taxifare::engine::Engine;
use taxifare::error::Error;
use taxifare::external::GoogleMaps;
use taxifare::server::serve;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taxifare=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(fare = ?settings.fare, "loaded fare configuration");

    let maps = Arc::new(GoogleMaps::new(&settings.maps));
    let engine = Arc::new(Engine::new(maps, settings.fare)) as DynAPI;

    serve(engine, settings.labels, settings.bind_addr).await
}
