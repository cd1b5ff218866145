#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal_macros::dec;
use tokio::sync::Notify;

use taxifare::api::DynAPI;
use taxifare::engine::Engine;
use taxifare::entities::{Coordinates, FareConfig, TravelMode};
use taxifare::error::{invalid_input_error, upstream_error, Error};
use taxifare::external::google_maps::{DirectionsRoute, Distance, Leg};
use taxifare::external::{Directions, MapsAPI};

/// In-memory stand-in for the mapping service.
#[derive(Default)]
pub struct FakeMaps {
    distances: HashMap<(String, String), u64>,
    no_route: HashSet<(String, String)>,
    places: HashMap<String, Coordinates>,
    outage: bool,
    gates: HashMap<String, Arc<Notify>>,
    pub directions_calls: Mutex<Vec<(String, String, TravelMode)>>,
    pub geocode_calls: Mutex<Vec<String>>,
}

impl FakeMaps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, origin: &str, destination: &str, meters: u64) -> Self {
        self.distances
            .insert((origin.into(), destination.into()), meters);
        self
    }

    /// The service answers OK but returns no routes.
    pub fn with_empty_route(mut self, origin: &str, destination: &str) -> Self {
        self.no_route.insert((origin.into(), destination.into()));
        self
    }

    pub fn with_place(mut self, address: &str, latitude: f64, longitude: f64) -> Self {
        self.places.insert(
            address.into(),
            Coordinates {
                latitude,
                longitude,
            },
        );
        self
    }

    pub fn with_outage(mut self) -> Self {
        self.outage = true;
        self
    }

    /// Directions from `origin` wait until `gate` is notified.
    pub fn gated(mut self, origin: &str, gate: Arc<Notify>) -> Self {
        self.gates.insert(origin.into(), gate);
        self
    }
}

#[async_trait]
impl MapsAPI for FakeMaps {
    async fn geocode(&self, address: String) -> Result<Coordinates, Error> {
        self.geocode_calls.lock().unwrap().push(address.clone());

        if self.outage {
            return Err(upstream_error());
        }

        self.places
            .get(&address)
            .copied()
            .ok_or_else(invalid_input_error)
    }

    async fn directions(
        &self,
        origin: String,
        destination: String,
        mode: TravelMode,
    ) -> Result<Directions, Error> {
        self.directions_calls
            .lock()
            .unwrap()
            .push((origin.clone(), destination.clone(), mode));

        if let Some(gate) = self.gates.get(&origin) {
            gate.notified().await;
        }

        if self.outage {
            return Err(upstream_error());
        }

        let key = (origin, destination);

        if self.no_route.contains(&key) {
            return Ok(Directions::default());
        }

        let meters = self.distances.get(&key).ok_or_else(invalid_input_error)?;

        Ok(Directions {
            routes: vec![DirectionsRoute {
                legs: vec![Leg {
                    distance: Distance {
                        value: *meters,
                        text: format!("{} m", meters),
                    },
                }],
            }],
        })
    }
}

pub fn fare_config() -> FareConfig {
    FareConfig::new(dec!(4.25), dec!(0.5), dec!(1.75)).unwrap()
}

pub fn engine(maps: FakeMaps) -> DynAPI {
    shared_engine(Arc::new(maps))
}

pub fn shared_engine(maps: Arc<FakeMaps>) -> DynAPI {
    Arc::new(Engine::new(maps, fare_config()))
}

pub fn city_maps() -> FakeMaps {
    FakeMaps::new()
        .with_route("Union Square", "Ferry Building", 1300)
        .with_route("Union Square", "Coit Tower", 500)
        .with_route("Union Square", "Chinatown Gate", 200)
        .with_empty_route("Union Square", "Alcatraz")
        .with_place("Union Square", 37.788, -122.4075)
        .with_place("Ferry Building", 37.7955, -122.3937)
}
