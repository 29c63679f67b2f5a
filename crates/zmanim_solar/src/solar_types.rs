//! Types for sunrise/sunset and depression-angle crossings.
//!
//! Provides zenith constants, the refraction/elevation configuration,
//! event and direction types, and the polar fallback policy.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use zmanim_time::local_clock;

/// Sun center exactly on the geometric horizon.
pub const GEOMETRIC_ZENITH_DEG: f64 = 90.0;

/// Upper limb on the horizon with standard refraction: 90° 50'.
pub const CIVIL_ZENITH_DEG: f64 = GEOMETRIC_ZENITH_DEG + 50.0 / 60.0;

/// Horizon dip per square root of elevation in meters, in degrees.
///
/// `dip ≈ 0.0347 · √h` (geometric dip plus terrestrial refraction).
pub const DIP_DEG_PER_SQRT_M: f64 = 0.0347;

/// Local clock hour substituted for a missing morning crossing.
pub const FALLBACK_MORNING_HOUR: u32 = 6;

/// Local clock hour substituted for a missing evening crossing.
pub const FALLBACK_EVENING_HOUR: u32 = 18;

/// Which half of the day a crossing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolarDirection {
    /// Sun rising through the zenith (dawn, sunrise).
    Morning,
    /// Sun setting through the zenith (sunset, dusk).
    Evening,
}

/// Horizon event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolarEventKind {
    Sunrise,
    Sunset,
}

impl SolarEventKind {
    /// Morning for sunrise, evening for sunset.
    pub fn direction(self) -> SolarDirection {
        match self {
            Self::Sunrise => SolarDirection::Morning,
            Self::Sunset => SolarDirection::Evening,
        }
    }
}

/// Refraction and elevation parameters for horizon events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Whether visible sunrise/sunset includes the horizon dip for the
    /// observer's elevation. Default: true.
    pub elevation_correction: bool,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            elevation_correction: true,
        }
    }
}

impl SolarConfig {
    /// Zenith of the visible horizon event at sea level.
    pub fn civil_zenith_deg(&self) -> f64 {
        GEOMETRIC_ZENITH_DEG + (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0
    }

    /// Zenith of the visible horizon event for an observer at `elevation_m`.
    ///
    /// `z = 90 + (refraction + semidiameter) / 60 + 0.0347·√h`
    pub fn horizon_zenith_deg(&self, elevation_m: f64) -> f64 {
        let base = self.civil_zenith_deg();
        if self.elevation_correction && elevation_m > 0.0 {
            base + DIP_DEG_PER_SQRT_M * elevation_m.sqrt()
        } else {
            base
        }
    }
}

/// A horizon event and the zenith it was computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarEvent {
    pub kind: SolarEventKind,
    pub zenith_deg: f64,
    /// `None` when the sun does not reach the zenith on that date.
    pub instant: Option<DateTime<Tz>>,
}

impl SolarEvent {
    /// Whether the crossing happens on that date.
    pub fn occurs(&self) -> bool {
        self.instant.is_some()
    }

    /// Apply a polar policy to a missing instant.
    pub fn with_policy(self, policy: PolarPolicy, date: NaiveDate, tz: Tz) -> Self {
        let instant = policy.resolve(self.instant, date, tz, self.kind.direction());
        Self { instant, ..self }
    }
}

/// What to do when the sun never crosses a zenith on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolarPolicy {
    /// Keep the absence; displayed as the unavailable sentinel.
    #[default]
    Propagate,
    /// Substitute 06:00 local for morning and 18:00 local for evening.
    FixedLocalClock,
}

impl PolarPolicy {
    /// Resolve a possibly missing crossing under this policy.
    pub fn resolve(
        self,
        computed: Option<DateTime<Tz>>,
        date: NaiveDate,
        tz: Tz,
        direction: SolarDirection,
    ) -> Option<DateTime<Tz>> {
        if computed.is_some() {
            return computed;
        }
        match self {
            Self::Propagate => None,
            Self::FixedLocalClock => {
                let hour = match direction {
                    SolarDirection::Morning => FALLBACK_MORNING_HOUR,
                    SolarDirection::Evening => FALLBACK_EVENING_HOUR,
                };
                tracing::debug!(%date, ?direction, hour, "polar day, substituting fixed local clock");
                local_clock(date, tz, hour, 0)
            }
        }
    }
}
