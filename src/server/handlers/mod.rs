pub mod fares;
pub mod locations;
