//! Engine configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use zmanim_solar::{GeoContext, PolarPolicy, SolarConfig};

use crate::error::HalachaError;
use crate::rollover::DayRollover;
use crate::special_times::{ALLOWED_CANDLE_OFFSETS, DEFAULT_CANDLE_OFFSET, HavdalahRule};

/// Settings shared by every daily query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZmanimConfig {
    /// Treatment of crossings that do not occur. Default: propagate.
    pub polar_policy: PolarPolicy,
    /// Evening rule for instant-based Hebrew dates. Default: fixed shift.
    pub rollover: DayRollover,
    /// End of Sabbath/festival. Default: 40 minutes after sunset.
    pub havdalah: HavdalahRule,
    /// Candle-lighting offset when none is stored. Default: 18.
    pub candle_offset_minutes: u32,
    /// Used when no location has been resolved. Default: Jerusalem.
    pub fallback_location: GeoContext,
    pub solar: SolarConfig,
}

impl Default for ZmanimConfig {
    fn default() -> Self {
        Self {
            polar_policy: PolarPolicy::default(),
            rollover: DayRollover::default(),
            havdalah: HavdalahRule::default(),
            candle_offset_minutes: DEFAULT_CANDLE_OFFSET,
            fallback_location: GeoContext::jerusalem(),
            solar: SolarConfig::default(),
        }
    }
}

impl ZmanimConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HalachaError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| HalachaError::io(path, e))?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HalachaError> {
        self.fallback_location.validate()?;
        if !ALLOWED_CANDLE_OFFSETS.contains(&self.candle_offset_minutes) {
            return Err(HalachaError::InvalidConfig(format!(
                "candle_offset_minutes must be one of {ALLOWED_CANDLE_OFFSETS:?}, got {}",
                self.candle_offset_minutes
            )));
        }
        if !HavdalahRule::OPTIONS.contains(&self.havdalah) {
            let options: Vec<String> =
                HavdalahRule::OPTIONS.iter().map(|r| r.to_string()).collect();
            return Err(HalachaError::InvalidConfig(format!(
                "havdalah must be one of [{}], got {}",
                options.join(", "),
                self.havdalah
            )));
        }
        let solar = &self.solar;
        if !(solar.refraction_arcmin.is_finite() && solar.semidiameter_arcmin.is_finite()) {
            return Err(HalachaError::InvalidConfig(
                "solar refraction and semidiameter must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
