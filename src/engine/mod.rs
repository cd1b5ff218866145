mod fare_api;
mod route_api;

use std::sync::Arc;

use crate::{api::API, entities::FareConfig, external::MapsAPI};

pub type DynMaps = Arc<dyn MapsAPI + Send + Sync>;

pub struct Engine {
    maps: DynMaps,
    fare_config: FareConfig,
}

impl Engine {
    pub fn new(maps: DynMaps, fare_config: FareConfig) -> Self {
        Self { maps, fare_config }
    }
}

impl API for Engine {}
