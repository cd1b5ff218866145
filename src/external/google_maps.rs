use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    config::MapsSettings,
    entities::{Coordinates, TravelMode},
    error::{invalid_input_error, upstream_error, Error},
    external::MapsAPI,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Directions {
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub distance: Distance,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    /// Meters.
    pub value: u64,
    #[serde(default)]
    pub text: String,
}

impl Directions {
    /// Only the first leg of the first route is meaningful to the fare.
    pub fn first_leg_distance(&self) -> Option<u64> {
        let route = self.routes.first()?;
        let leg = route.legs.first()?;
        Some(leg.distance.value)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    results: Option<T>,
    routes: Option<T>,
}

#[derive(Clone, Debug)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl GoogleMaps {
    pub fn new(settings: &MapsSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: settings.api_base.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    async fn get<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<Response<T>, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("https://{}/maps/api/{}/json", self.api_base, path);

        let res = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        check_status_code(res.status().as_u16())?;

        Ok(res.json().await?)
    }
}

#[async_trait]
impl MapsAPI for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, address: String) -> Result<Coordinates, Error> {
        let data = self
            .get("geocode", &[("address", address.as_str())])
            .await?;

        first_location(data)
    }

    #[tracing::instrument(skip(self))]
    async fn directions(
        &self,
        origin: String,
        destination: String,
        mode: TravelMode,
    ) -> Result<Directions, Error> {
        let data = self
            .get(
                "directions",
                &[
                    ("origin", origin.as_str()),
                    ("destination", destination.as_str()),
                    ("mode", mode.name()),
                ],
            )
            .await?;

        into_directions(data)
    }
}

fn check_status_code(status_code: u16) -> Result<(), Error> {
    if (400..500).contains(&status_code) {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    Ok(())
}

fn check_status(status: &str) -> Result<(), Error> {
    match status {
        "OK" => Ok(()),
        "ZERO_RESULTS" | "NOT_FOUND" | "INVALID_REQUEST" => Err(invalid_input_error()),
        _ => Err(upstream_error()),
    }
}

fn first_location(data: Response<Vec<GeocodeResult>>) -> Result<Coordinates, Error> {
    check_status(&data.status)?;

    data.results
        .and_then(|results| results.into_iter().next())
        .map(|result| result.geometry.location)
        .ok_or_else(invalid_input_error)
}

fn into_directions(data: Response<Vec<DirectionsRoute>>) -> Result<Directions, Error> {
    check_status(&data.status)?;

    let routes = data.routes.ok_or_else(upstream_error)?;

    Ok(Directions { routes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> Result<Directions, Error> {
        into_directions(serde_json::from_value(body).unwrap())
    }

    #[test]
    fn reads_the_first_leg_of_the_first_route() {
        let directions = parse(json!({
            "status": "OK",
            "routes": [
                { "legs": [
                    { "distance": { "value": 1300, "text": "1.3 km" } },
                    { "distance": { "value": 9999, "text": "10 km" } }
                ] },
                { "legs": [ { "distance": { "value": 42, "text": "42 m" } } ] }
            ]
        }))
        .unwrap();

        assert_eq!(directions.first_leg_distance(), Some(1300));
    }

    #[test]
    fn empty_routes_have_no_distance() {
        let directions = parse(json!({ "status": "OK", "routes": [] })).unwrap();
        assert_eq!(directions.first_leg_distance(), None);

        let directions = parse(json!({ "status": "OK", "routes": [ {} ] })).unwrap();
        assert_eq!(directions.first_leg_distance(), None);
    }

    #[test]
    fn non_ok_directions_status_is_an_error() {
        let err = parse(json!({ "status": "ZERO_RESULTS", "routes": [] })).unwrap_err();
        assert_eq!(err, invalid_input_error());

        let err = parse(json!({ "status": "OVER_QUERY_LIMIT" })).unwrap_err();
        assert_eq!(err, upstream_error());
    }

    #[test]
    fn geocode_reads_lat_lng() {
        let data = serde_json::from_value(json!({
            "status": "OK",
            "results": [{
                "formatted_address": "Pier 39, San Francisco, CA",
                "geometry": { "location": { "lat": 37.8087, "lng": -122.4098 } }
            }]
        }))
        .unwrap();

        let coordinates = first_location(data).unwrap();
        assert_eq!(coordinates.latitude, 37.8087);
        assert_eq!(coordinates.longitude, -122.4098);
    }

    #[test]
    fn geocode_without_results_is_not_found() {
        let data = serde_json::from_value(json!({ "status": "ZERO_RESULTS", "results": [] }))
            .unwrap();

        assert_eq!(first_location(data).unwrap_err(), invalid_input_error());
    }

    #[test]
    fn http_status_codes() {
        assert!(check_status_code(200).is_ok());
        assert_eq!(check_status_code(403).unwrap_err(), invalid_input_error());
        assert_eq!(check_status_code(503).unwrap_err(), upstream_error());
    }
}
