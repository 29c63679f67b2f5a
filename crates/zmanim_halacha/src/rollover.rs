//! Which civil date's Hebrew date an instant belongs to.

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use zmanim_hebrew::{HebrewDateInfo, evening_shifted_date};
use zmanim_solar::{GeoContext, SolarConfig, sunset};

use crate::config::ZmanimConfig;

/// Rule for advancing the Hebrew date in the evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayRollover {
    /// Shift the instant forward six hours before taking its local date.
    #[default]
    FixedShift,
    /// Advance at the local visible sunset; falls back to the fixed shift
    /// when the sun does not set.
    AfterSunset,
}

impl DayRollover {
    /// Civil date whose Hebrew date applies at `instant`.
    pub fn civil_date<T: TimeZone>(
        self,
        instant: &DateTime<T>,
        geo: &GeoContext,
        solar: &SolarConfig,
    ) -> Option<NaiveDate> {
        match self {
            Self::FixedShift => evening_shifted_date(instant, &geo.time_zone),
            Self::AfterSunset => {
                let local = instant.with_timezone(&geo.time_zone);
                let date = local.date_naive();
                match sunset(date, geo, solar) {
                    Some(set) if local >= set => date.succ_opt(),
                    Some(_) => Some(date),
                    None => {
                        tracing::debug!(%date, "no sunset, using fixed evening shift");
                        evening_shifted_date(instant, &geo.time_zone)
                    }
                }
            }
        }
    }
}

/// Hebrew date information at an instant, under the configured rollover.
pub fn hebrew_info_at<T: TimeZone>(
    instant: &DateTime<T>,
    geo: &GeoContext,
    config: &ZmanimConfig,
) -> HebrewDateInfo {
    let local_date = instant.with_timezone(&geo.time_zone).date_naive();
    let date = config
        .rollover
        .civil_date(instant, geo, &config.solar)
        .unwrap_or_else(|| {
            tracing::warn!(%local_date, "evening rollover overflowed, using local date");
            local_date
        });
    HebrewDateInfo::for_civil_date(date)
}
