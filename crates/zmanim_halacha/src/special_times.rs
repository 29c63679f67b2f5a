//! Candle lighting and Havdalah for Sabbath and festival eves.

use std::fmt;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use zmanim_hebrew::HebrewDateInfo;
use zmanim_solar::{GeoContext, PolarPolicy, SolarConfig, SolarDirection};
use zmanim_time::{add_minutes, format_hhmm};

use crate::anchors::SolarDay;

/// Candle-lighting offsets (minutes before sunset) that may be selected.
pub const ALLOWED_CANDLE_OFFSETS: [u32; 4] = [18, 24, 30, 40];

pub const DEFAULT_CANDLE_OFFSET: u32 = 18;

/// Map an offset outside [`ALLOWED_CANDLE_OFFSETS`] to the default.
pub fn normalize_candle_offset(minutes: u32) -> u32 {
    if ALLOWED_CANDLE_OFFSETS.contains(&minutes) {
        minutes
    } else {
        DEFAULT_CANDLE_OFFSET
    }
}

/// When the day after the eve ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum HavdalahRule {
    /// Minutes after the next day's visible sunset.
    FixedMinutes(f64),
    /// Sun this many degrees below the horizon after the next day's sunset.
    Degrees(f64),
}

impl HavdalahRule {
    pub const RABBEINU_TAM: Self = Self::FixedMinutes(72.0);

    /// Rules a configuration may select, default first.
    pub const OPTIONS: [Self; 4] = [
        Self::FixedMinutes(40.0),
        Self::FixedMinutes(36.0),
        Self::RABBEINU_TAM,
        Self::Degrees(8.5),
    ];
}

impl Default for HavdalahRule {
    fn default() -> Self {
        Self::FixedMinutes(40.0)
    }
}

impl fmt::Display for HavdalahRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedMinutes(m) => write!(f, "sunset +{m} min"),
            Self::Degrees(d) => write!(f, "{d}° below horizon"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialDayKind {
    Shabbat,
    YomTov,
}

impl SpecialDayKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shabbat => "שבת",
            Self::YomTov => "יום טוב",
        }
    }
}

/// Candle lighting on the eve and Havdalah at the end of the following day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialTimes {
    pub kind: SpecialDayKind,
    pub candle_offset_minutes: u32,
    pub havdalah_rule: HavdalahRule,
    #[serde(skip)]
    pub candle_lighting: Option<DateTime<Tz>>,
    #[serde(skip)]
    pub havdalah: Option<DateTime<Tz>>,
    pub candle_lighting_text: String,
    pub havdalah_text: String,
}

/// Special times for `date`, or `None` unless it is an eve.
pub fn special_times(
    date: NaiveDate,
    geo: &GeoContext,
    hebrew: &HebrewDateInfo,
    candle_offset: u32,
    havdalah: HavdalahRule,
    solar: &SolarConfig,
    policy: PolarPolicy,
) -> Option<SpecialTimes> {
    if !(hebrew.is_erev_shabbat() || hebrew.is_erev_yom_tov()) {
        return None;
    }
    let today = SolarDay::compute(date, geo, solar, policy);
    special_times_on(&today, hebrew, candle_offset, havdalah, solar)
}

/// As [`special_times`], reusing an already computed solar day.
pub(crate) fn special_times_on(
    today: &SolarDay,
    hebrew: &HebrewDateInfo,
    candle_offset: u32,
    havdalah: HavdalahRule,
    solar: &SolarConfig,
) -> Option<SpecialTimes> {
    let kind = if hebrew.is_erev_shabbat() {
        SpecialDayKind::Shabbat
    } else if hebrew.is_erev_yom_tov() {
        SpecialDayKind::YomTov
    } else {
        return None;
    };

    let candle_offset = normalize_candle_offset(candle_offset);
    let candle_lighting = today
        .sunset
        .and_then(|s| add_minutes(&s, -f64::from(candle_offset)));

    let havdalah_time = today.date.succ_opt().and_then(|next| {
        let next_day = SolarDay::compute(next, &today.geo, solar, today.policy);
        match havdalah {
            HavdalahRule::FixedMinutes(m) => add_minutes(&next_day.sunset?, m),
            HavdalahRule::Degrees(d) => next_day.depression_crossing(d, SolarDirection::Evening),
        }
    });

    Some(SpecialTimes {
        kind,
        candle_offset_minutes: candle_offset,
        havdalah_rule: havdalah,
        candle_lighting,
        havdalah: havdalah_time,
        candle_lighting_text: format_hhmm(candle_lighting.as_ref()),
        havdalah_text: format_hhmm(havdalah_time.as_ref()),
    })
}
