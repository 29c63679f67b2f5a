//! Local-clock helpers: timezone lookup, day materialization, formatting.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use chrono_tz::Tz;

use crate::error::TimeError;

/// Sentinel shown in place of a time that does not exist for the query.
pub const UNAVAILABLE: &str = "—";

/// Resolve an IANA timezone identifier such as `Asia/Jerusalem`.
pub fn parse_time_zone(id: &str) -> Result<Tz, TimeError> {
    id.parse::<Tz>()
        .map_err(|_| TimeError::UnknownTimeZone(id.to_string()))
}

/// Place a UT hour-of-day onto the local calendar day `date` in `tz`.
///
/// `ut_hours` is taken relative to 00:00 UT of `date`. The resulting instant
/// is shifted by whole days until its local date equals `date`, so an event
/// that falls on the previous/next UT day (far east or west of Greenwich)
/// still lands on the requested local day.
pub fn materialize_ut_hours(date: NaiveDate, tz: Tz, ut_hours: f64) -> Option<DateTime<Tz>> {
    if !ut_hours.is_finite() {
        return None;
    }
    let millis = (ut_hours * 3_600_000.0).round() as i64;
    let utc = date
        .and_time(NaiveTime::MIN)
        .and_utc()
        .checked_add_signed(TimeDelta::try_milliseconds(millis)?)?;
    let mut local = utc.with_timezone(&tz);

    for _ in 0..2 {
        let step = match local.date_naive().cmp(&date) {
            std::cmp::Ordering::Less => TimeDelta::try_days(1)?,
            std::cmp::Ordering::Greater => TimeDelta::try_days(-1)?,
            std::cmp::Ordering::Equal => break,
        };
        local = local.checked_add_signed(step)?;
    }
    Some(local)
}

/// A fixed local wall-clock time on `date`, e.g. 06:00.
///
/// On a DST gap the earliest valid mapping wins; if none exists the time is
/// absent.
pub fn local_clock(date: NaiveDate, tz: Tz, hour: u32, minute: u32) -> Option<DateTime<Tz>> {
    let naive = date.and_hms_opt(hour, minute, 0)?;
    tz.from_local_datetime(&naive).earliest()
}

/// Offset an instant by fractional minutes (negative = earlier).
pub fn add_minutes(t: &DateTime<Tz>, minutes: f64) -> Option<DateTime<Tz>> {
    if !minutes.is_finite() {
        return None;
    }
    let millis = (minutes * 60_000.0).round() as i64;
    t.checked_add_signed(TimeDelta::try_milliseconds(millis)?)
}

/// Format as local `HH:mm`, or [`UNAVAILABLE`] when absent.
pub fn format_hhmm(t: Option<&DateTime<Tz>>) -> String {
    match t {
        Some(t) => t.format("%H:%M").to_string(),
        None => UNAVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn jerusalem() -> Tz {
        parse_time_zone("Asia/Jerusalem").unwrap()
    }

    #[test]
    fn parse_known_zone() {
        assert_eq!(jerusalem(), chrono_tz::Asia::Jerusalem);
    }

    #[test]
    fn parse_unknown_zone() {
        let err = parse_time_zone("Mars/Olympus").unwrap_err();
        assert_eq!(err, TimeError::UnknownTimeZone("Mars/Olympus".into()));
    }

    #[test]
    fn materialize_summer_offset() {
        // 16:45 UT in June is 19:45 IDT (UTC+3)
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let t = materialize_ut_hours(date, jerusalem(), 16.75).unwrap();
        assert_eq!(t.date_naive(), date);
        assert_eq!((t.hour(), t.minute()), (19, 45));
    }

    #[test]
    fn materialize_wraps_to_requested_day() {
        // 22:00 UT on the date is 01:00 next day locally; must wrap back
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let t = materialize_ut_hours(date, jerusalem(), 22.0).unwrap();
        assert_eq!(t.date_naive(), date);
        assert_eq!(t.hour(), 1);
    }

    #[test]
    fn materialize_rejects_nan() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        assert!(materialize_ut_hours(date, jerusalem(), f64::NAN).is_none());
    }

    #[test]
    fn local_clock_six() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        let t = local_clock(date, chrono_tz::Europe::Oslo, 6, 0).unwrap();
        assert_eq!(format_hhmm(Some(&t)), "06:00");
    }

    #[test]
    fn add_minutes_fractional() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let t = local_clock(date, jerusalem(), 18, 0).unwrap();
        let later = add_minutes(&t, 13.5).unwrap();
        assert_eq!((later - t).num_seconds(), 810);
        let earlier = add_minutes(&t, -72.0).unwrap();
        assert_eq!(format_hhmm(Some(&earlier)), "16:48");
    }

    #[test]
    fn format_absent_is_sentinel() {
        assert_eq!(format_hhmm(None), UNAVAILABLE);
    }
}
