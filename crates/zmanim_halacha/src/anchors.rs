//! Per-date solar anchors shared by every opinion of a day.

use chrono::{DateTime, NaiveDate, TimeDelta};
use chrono_tz::Tz;
use zmanim_solar::{
    GEOMETRIC_ZENITH_DEG, GeoContext, PolarPolicy, SolarConfig, SolarDirection, SolarEventKind,
    crossing_time, solar_event,
};

use crate::opinion::{Anchor, DayBoundary, DaySpan};

/// Sunrise and sunset (visible and sea-level) for one date and place, with
/// the polar policy already applied.
#[derive(Debug, Clone)]
pub struct SolarDay {
    pub date: NaiveDate,
    pub geo: GeoContext,
    pub policy: PolarPolicy,
    pub sunrise: Option<DateTime<Tz>>,
    pub sunset: Option<DateTime<Tz>>,
    pub sea_level_sunrise: Option<DateTime<Tz>>,
    pub sea_level_sunset: Option<DateTime<Tz>>,
    /// Visible sunrise of the following date, for night hours.
    pub next_sunrise: Option<DateTime<Tz>>,
}

impl SolarDay {
    pub fn compute(
        date: NaiveDate,
        geo: &GeoContext,
        solar: &SolarConfig,
        policy: PolarPolicy,
    ) -> Self {
        let sea = geo.at_sea_level();
        let event = |d: NaiveDate, g: &GeoContext, kind| {
            solar_event(d, g, kind, solar)
                .with_policy(policy, d, g.time_zone)
                .instant
        };
        let next_sunrise = date
            .succ_opt()
            .and_then(|next| event(next, geo, SolarEventKind::Sunrise));

        Self {
            date,
            geo: geo.clone(),
            policy,
            sunrise: event(date, geo, SolarEventKind::Sunrise),
            sunset: event(date, geo, SolarEventKind::Sunset),
            sea_level_sunrise: event(date, &sea, SolarEventKind::Sunrise),
            sea_level_sunset: event(date, &sea, SolarEventKind::Sunset),
            next_sunrise,
        }
    }

    /// Visible sunrise→sunset length.
    pub fn day_length(&self) -> Option<TimeDelta> {
        Some(self.sunset? - self.sunrise?)
    }

    /// Gra proportional hour.
    pub fn shaah_zmanit(&self) -> Option<TimeDelta> {
        Some(self.day_length()? / 12)
    }

    /// Midpoint of visible sunrise and sunset.
    pub fn chatzot(&self) -> Option<DateTime<Tz>> {
        let rise = self.sunrise?;
        rise.checked_add_signed(self.day_length()? / 2)
    }

    pub fn anchor(&self, anchor: Anchor) -> Option<DateTime<Tz>> {
        match anchor {
            Anchor::Sunrise => self.sunrise,
            Anchor::Sunset => self.sunset,
            Anchor::SeaLevelSunrise => self.sea_level_sunrise,
            Anchor::SeaLevelSunset => self.sea_level_sunset,
            Anchor::Chatzot => self.chatzot(),
        }
    }

    /// Sea-level crossing of a depression angle, policy applied.
    pub fn depression_crossing(
        &self,
        depression_deg: f64,
        direction: SolarDirection,
    ) -> Option<DateTime<Tz>> {
        let computed = crossing_time(
            self.date,
            &self.geo.at_sea_level(),
            GEOMETRIC_ZENITH_DEG + depression_deg,
            direction,
        );
        self.policy
            .resolve(computed, self.date, self.geo.time_zone, direction)
    }

    /// Start and end of a day span.
    pub fn span(&self, span: DaySpan) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
        match span {
            DaySpan::SunriseToSunset => Some((self.sunrise?, self.sunset?)),
            DaySpan::SunsetToNextSunrise => Some((self.sunset?, self.next_sunrise?)),
            DaySpan::DawnToDusk(DayBoundary::Degrees(deg)) => Some((
                self.depression_crossing(deg, SolarDirection::Morning)?,
                self.depression_crossing(deg, SolarDirection::Evening)?,
            )),
            DaySpan::DawnToDusk(boundary) => {
                let delta = match boundary {
                    DayBoundary::FixedMinutes(m) => minutes(m)?,
                    DayBoundary::ZmaniyotMinutes(m) => scale(self.shaah_zmanit()?, m / 60.0)?,
                    DayBoundary::Degrees(_) => return None,
                };
                Some((
                    self.sunrise?.checked_sub_signed(delta)?,
                    self.sunset?.checked_add_signed(delta)?,
                ))
            }
        }
    }
}

fn minutes(m: f64) -> Option<TimeDelta> {
    if !m.is_finite() {
        return None;
    }
    TimeDelta::try_milliseconds((m * 60_000.0).round() as i64)
}

/// `d · factor`, rounded to the millisecond.
pub(crate) fn scale(d: TimeDelta, factor: f64) -> Option<TimeDelta> {
    let ms = d.num_milliseconds() as f64 * factor;
    if !ms.is_finite() {
        return None;
    }
    TimeDelta::try_milliseconds(ms.round() as i64)
}
