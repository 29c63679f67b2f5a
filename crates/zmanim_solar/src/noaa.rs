//! Sunrise/sunset and depression-angle crossings.
//!
//! NOAA / Almanac for Computers (1990) approximation. For a given day of
//! year the Sun's mean anomaly, true longitude, right ascension and
//! declination are derived from low-order series, then the hour angle at
//! the target zenith follows from
//!
//! `cos H = (cos z − sin δ · sin φ) / (cos δ · cos φ)`
//!
//! `|cos H| > 1` means the Sun never reaches that zenith on that date
//! (polar day or night) and the crossing is absent.

use chrono::{DateTime, Datelike, NaiveDate};
use chrono_tz::Tz;
use zmanim_time::{add_minutes, materialize_ut_hours};

use crate::geo::GeoContext;
use crate::solar_types::{
    GEOMETRIC_ZENITH_DEG, SolarConfig, SolarDirection, SolarEvent, SolarEventKind,
};
use crate::util::{acos_deg, asin_deg, atan_deg, cos_deg, normalize_360, sin_deg, tan_deg};

/// Degrees of rotation per hour.
const DEG_PER_HOUR: f64 = 15.0;

/// Local-time guess used to seed the approximate time of a morning event.
const MORNING_GUESS_HOUR: f64 = 6.0;

/// Local-time guess used to seed the approximate time of an evening event.
const EVENING_GUESS_HOUR: f64 = 18.0;

/// Local mean time of solar noon.
const MEAN_NOON_HOUR: f64 = 12.0;

/// UT hour-of-day at which the Sun's center crosses `zenith_deg`.
///
/// Returns `None` when the crossing does not occur on that day of year at
/// that latitude. The result is normalized to [0, 24).
pub fn utc_crossing_hours(
    day_of_year: u32,
    latitude_deg: f64,
    longitude_deg: f64,
    zenith_deg: f64,
    direction: SolarDirection,
) -> Option<f64> {
    let lng_hour = longitude_deg / DEG_PER_HOUR;
    let guess = match direction {
        SolarDirection::Morning => MORNING_GUESS_HOUR,
        SolarDirection::Evening => EVENING_GUESS_HOUR,
    };
    let t = f64::from(day_of_year) + (guess - lng_hour) / 24.0;

    // Mean anomaly and true longitude (equation of center)
    let m = 0.9856 * t - 3.289;
    let l = normalize_360(m + 1.916 * sin_deg(m) + 0.020 * sin_deg(2.0 * m) + 282.634);

    // Right ascension, moved into the same quadrant as L
    let ra = normalize_360(atan_deg(0.91764 * tan_deg(l)));
    let l_quadrant = (l / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    let ra_hours = (ra + l_quadrant - ra_quadrant) / DEG_PER_HOUR;

    let sin_dec = 0.39782 * sin_deg(l);
    let cos_dec = cos_deg(asin_deg(sin_dec));

    let cos_h = (cos_deg(zenith_deg) - sin_dec * sin_deg(latitude_deg))
        / (cos_dec * cos_deg(latitude_deg));

    // Polar check (also rejects NaN from a pole where cos φ = 0)
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }

    let h = match direction {
        SolarDirection::Morning => 360.0 - acos_deg(cos_h),
        SolarDirection::Evening => acos_deg(cos_h),
    } / DEG_PER_HOUR;

    let local_mean_time = h + ra_hours - 0.06571 * t - 6.622;
    Some((local_mean_time - lng_hour).rem_euclid(24.0))
}

/// Instant of the solar day of `date` (local calendar day in
/// `geo.time_zone`) when the Sun's center crosses `zenith_deg`.
///
/// Crossings are placed relative to that day's mean solar noon: a morning
/// crossing is the last one before noon and an evening crossing the first
/// one after it. Far from the zone meridian a deep evening crossing can
/// therefore fall after local midnight, on the following civil date.
///
/// The zenith is used exactly as given; elevation only enters through
/// [`SolarConfig::horizon_zenith_deg`], so callers choose between `geo` and
/// `geo.at_sea_level()` per use case.
pub fn crossing_time(
    date: NaiveDate,
    geo: &GeoContext,
    zenith_deg: f64,
    direction: SolarDirection,
) -> Option<DateTime<Tz>> {
    let ut = utc_crossing_hours(
        date.ordinal(),
        geo.latitude_deg,
        geo.longitude_deg,
        zenith_deg,
        direction,
    )?;
    let noon_ut = MEAN_NOON_HOUR - geo.longitude_deg / DEG_PER_HOUR;
    let noon = materialize_ut_hours(date, geo.time_zone, noon_ut)?;
    let offset_hours = match direction {
        SolarDirection::Morning => -(noon_ut - ut).rem_euclid(24.0),
        SolarDirection::Evening => (ut - noon_ut).rem_euclid(24.0),
    };
    add_minutes(&noon, offset_hours * 60.0)
}

/// Visible horizon event at the observer's elevation.
pub fn solar_event(
    date: NaiveDate,
    geo: &GeoContext,
    kind: SolarEventKind,
    config: &SolarConfig,
) -> SolarEvent {
    let zenith_deg = config.horizon_zenith_deg(geo.elevation_m);
    SolarEvent {
        kind,
        zenith_deg,
        instant: crossing_time(date, geo, zenith_deg, kind.direction()),
    }
}

/// Visible sunrise, including the horizon dip for `geo.elevation_m`.
pub fn sunrise(date: NaiveDate, geo: &GeoContext, config: &SolarConfig) -> Option<DateTime<Tz>> {
    solar_event(date, geo, SolarEventKind::Sunrise, config).instant
}

/// Visible sunset, including the horizon dip for `geo.elevation_m`.
pub fn sunset(date: NaiveDate, geo: &GeoContext, config: &SolarConfig) -> Option<DateTime<Tz>> {
    solar_event(date, geo, SolarEventKind::Sunset, config).instant
}

/// Sunrise on a flat sea-level horizon, whatever the true elevation.
pub fn sea_level_sunrise(
    date: NaiveDate,
    geo: &GeoContext,
    config: &SolarConfig,
) -> Option<DateTime<Tz>> {
    sunrise(date, &geo.at_sea_level(), config)
}

/// Sunset on a flat sea-level horizon, whatever the true elevation.
pub fn sea_level_sunset(
    date: NaiveDate,
    geo: &GeoContext,
    config: &SolarConfig,
) -> Option<DateTime<Tz>> {
    sunset(date, &geo.at_sea_level(), config)
}

/// Morning crossing of a depression angle below the geometric horizon,
/// e.g. 16.1° for dawn. Always evaluated at sea level.
pub fn dawn_at_depression(
    date: NaiveDate,
    geo: &GeoContext,
    depression_deg: f64,
) -> Option<DateTime<Tz>> {
    crossing_time(
        date,
        &geo.at_sea_level(),
        GEOMETRIC_ZENITH_DEG + depression_deg,
        SolarDirection::Morning,
    )
}

/// Evening crossing of a depression angle below the geometric horizon.
/// Always evaluated at sea level.
pub fn dusk_at_depression(
    date: NaiveDate,
    geo: &GeoContext,
    depression_deg: f64,
) -> Option<DateTime<Tz>> {
    crossing_time(
        date,
        &geo.at_sea_level(),
        GEOMETRIC_ZENITH_DEG + depression_deg,
        SolarDirection::Evening,
    )
}

/// Midpoint of visible sunrise and sunset.
pub fn solar_noon(date: NaiveDate, geo: &GeoContext, config: &SolarConfig) -> Option<DateTime<Tz>> {
    let rise = sunrise(date, geo, config)?;
    let set = sunset(date, geo, config)?;
    let half = (set - rise) / 2;
    rise.checked_add_signed(half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar_types::CIVIL_ZENITH_DEG;

    #[test]
    fn equator_equinox_day_is_about_twelve_hours() {
        // Day 80 ≈ March 20
        let rise = utc_crossing_hours(80, 0.0, 0.0, CIVIL_ZENITH_DEG, SolarDirection::Morning)
            .unwrap();
        let set = utc_crossing_hours(80, 0.0, 0.0, CIVIL_ZENITH_DEG, SolarDirection::Evening)
            .unwrap();
        let len = set - rise;
        assert!((len - 12.1).abs() < 0.15, "day length = {len}");
        assert!((rise - 6.0).abs() < 0.25, "sunrise = {rise}");
    }

    #[test]
    fn polar_night_no_crossing() {
        // Tromso, winter solstice
        let r = utc_crossing_hours(356, 69.65, 18.96, CIVIL_ZENITH_DEG, SolarDirection::Morning);
        assert!(r.is_none());
    }

    #[test]
    fn midnight_sun_no_crossing() {
        // Tromso, summer solstice
        let r = utc_crossing_hours(173, 69.65, 18.96, CIVIL_ZENITH_DEG, SolarDirection::Evening);
        assert!(r.is_none());
    }

    #[test]
    fn pole_is_absent_not_nan() {
        let r = utc_crossing_hours(80, 90.0, 0.0, CIVIL_ZENITH_DEG, SolarDirection::Morning);
        assert!(r.is_none());
    }

    #[test]
    fn longitude_shifts_ut() {
        // 15 deg east: event one hour earlier in UT
        let z = CIVIL_ZENITH_DEG;
        let g = utc_crossing_hours(172, 30.0, 0.0, z, SolarDirection::Morning).unwrap();
        let e = utc_crossing_hours(172, 30.0, 15.0, z, SolarDirection::Morning).unwrap();
        assert!(((g - e) - 1.0).abs() < 0.01, "g = {g}, e = {e}");
    }

    #[test]
    fn deeper_zenith_is_earlier_in_morning() {
        let a = utc_crossing_hours(172, 31.78, 35.23, 90.0 + 16.1, SolarDirection::Morning)
            .unwrap();
        let b = utc_crossing_hours(172, 31.78, 35.23, 90.0 + 19.75, SolarDirection::Morning)
            .unwrap();
        assert!(b < a);
    }

    #[test]
    fn evening_crossing_after_midnight_moves_to_next_date() {
        // Vigo sits far west of the CEST meridian; the 16.1° dusk of the
        // June solstice comes after local midnight.
        let geo = GeoContext::new(42.24, -8.72, 0.0, "Europe/Madrid", "Vigo").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let zenith = GEOMETRIC_ZENITH_DEG + 16.1;
        let dawn = crossing_time(date, &geo, zenith, SolarDirection::Morning).unwrap();
        let dusk = crossing_time(date, &geo, zenith, SolarDirection::Evening).unwrap();
        assert_eq!(dawn.date_naive(), date);
        assert_eq!(dusk.date_naive(), date.succ_opt().unwrap());
        assert!(dusk > dawn);
    }
}
