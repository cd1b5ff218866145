use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::entities::FareConfig;
use crate::error::{env_var_error, invalid_config_error, Error};

/// Display strings used when rendering an estimate or a failure.
#[derive(Clone, Debug, PartialEq)]
pub struct Labels {
    pub currency_prefix: String,
    pub distance_suffix: String,
    pub route_error: String,
    pub error_style: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            currency_prefix: "$".into(),
            distance_suffix: " km".into(),
            route_error: "No route could be found between the given locations.".into(),
            error_style: "error".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapsSettings {
    pub api_base: String,
    pub api_key: String,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub fare: FareConfig,
    pub labels: Labels,
    pub maps: MapsSettings,
    pub bind_addr: SocketAddr,
}

impl Settings {
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings from any flat key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fare = FareConfig::new(
            decimal(&lookup, "FARE_BASE_RATE")?,
            decimal(&lookup, "FARE_DISTANCE_UNIT")?,
            decimal(&lookup, "FARE_RATE_PER_DISTANCE_UNIT")?,
        )?;

        let defaults = Labels::default();
        let labels = Labels {
            currency_prefix: lookup("FARE_CURRENCY_PREFIX").unwrap_or(defaults.currency_prefix),
            distance_suffix: lookup("FARE_DISTANCE_SUFFIX").unwrap_or(defaults.distance_suffix),
            route_error: lookup("FARE_ROUTE_ERROR_TEXT").unwrap_or(defaults.route_error),
            error_style: lookup("FARE_ERROR_STYLE").unwrap_or(defaults.error_style),
        };

        let maps = MapsSettings {
            api_base: lookup("GOOGLE_MAPS_API_BASE").unwrap_or_else(|| "maps.googleapis.com".into()),
            api_key: lookup("GOOGLE_MAPS_API_KEY")
                .ok_or_else(|| env_var_error(env::VarError::NotPresent))?,
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:3000".into())
            .parse()
            .map_err(|_| invalid_config_error("BIND_ADDR"))?;

        Ok(Self {
            fare,
            labels,
            maps,
            bind_addr,
        })
    }
}

fn decimal<F>(lookup: &F, key: &str) -> Result<Decimal, Error>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).ok_or_else(|| invalid_config_error(key))?;

    Decimal::from_str(raw.trim()).map_err(|_| invalid_config_error(key))
}
