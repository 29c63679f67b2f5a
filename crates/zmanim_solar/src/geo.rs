//! Observer location with its civil timezone.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use zmanim_time::parse_time_zone;

use crate::error::SolarError;

/// A resolved observer location, immutable for one calculation.
///
/// Elevation matters only for visible sunrise/sunset. Opinions defined at
/// sea level use [`GeoContext::at_sea_level`] on the same context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoContext {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Height above mean sea level in meters. Places below sea level are
    /// negative and see the same horizon as sea level.
    pub elevation_m: f64,
    /// Civil timezone used for local dates and displayed times.
    pub time_zone: Tz,
    /// Human-readable place name supplied by the location collaborator.
    #[serde(default)]
    pub display_name: String,
}

impl GeoContext {
    /// Build a validated location from an IANA timezone id.
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
        time_zone: &str,
        display_name: impl Into<String>,
    ) -> Result<Self, SolarError> {
        let geo = Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
            time_zone: parse_time_zone(time_zone)?,
            display_name: display_name.into(),
        };
        geo.validate()?;
        Ok(geo)
    }

    /// Jerusalem, the default location when none has been resolved.
    pub fn jerusalem() -> Self {
        Self {
            latitude_deg: 31.778,
            longitude_deg: 35.235,
            elevation_m: 800.0,
            time_zone: chrono_tz::Asia::Jerusalem,
            display_name: "ירושלים".to_string(),
        }
    }

    /// Check coordinate ranges. Deserialized contexts are not validated
    /// until this is called.
    pub fn validate(&self) -> Result<(), SolarError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(SolarError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(SolarError::InvalidLocation("longitude outside [-180, 180]"));
        }
        if !self.elevation_m.is_finite() {
            return Err(SolarError::InvalidLocation("elevation must be finite"));
        }
        Ok(())
    }

    /// The same place with elevation forced to 0.
    pub fn at_sea_level(&self) -> Self {
        Self {
            elevation_m: 0.0,
            ..self.clone()
        }
    }
}
