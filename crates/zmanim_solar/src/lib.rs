//! Solar crossing times for halachic day boundaries.
//!
//! This crate provides:
//! - `GeoContext`: the resolved observer location and timezone
//! - Sunrise/sunset with refraction, solar radius and horizon dip
//! - Crossing times for arbitrary solar depression angles (dawn/dusk)
//! - A named fallback policy for polar days where a crossing never happens
//!
//! The solar position model is the NOAA / Almanac for Computers
//! approximation: accurate to about a minute at non-polar latitudes, with no
//! ephemeris files or iteration.

pub mod error;
pub mod geo;
pub mod noaa;
pub mod solar_types;
pub(crate) mod util;

pub use error::SolarError;
pub use geo::GeoContext;
pub use noaa::{
    crossing_time, dawn_at_depression, dusk_at_depression, sea_level_sunrise, sea_level_sunset,
    solar_event, solar_noon, sunrise, sunset, utc_crossing_hours,
};
pub use solar_types::{
    CIVIL_ZENITH_DEG, GEOMETRIC_ZENITH_DEG, PolarPolicy, SolarConfig, SolarDirection, SolarEvent,
    SolarEventKind,
};
