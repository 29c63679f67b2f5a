//! Civil ↔ Hebrew date conversion.
//!
//! The calendar arithmetic (molad, postponements, year lengths) is ICU's
//! `Hebrew` calendar. This module maps ICU month codes onto the fixed month
//! numbering and adds the evening shift used for instants.

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeDelta, TimeZone};
use chrono_tz::Tz;
use icu_calendar::hebrew::Hebrew;
use icu_calendar::Date;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::month::HebrewMonth;

/// Hours added to an instant before taking its civil date, approximating
/// the Hebrew day starting in the evening.
pub const EVENING_SHIFT_HOURS: i64 = 6;

/// Civil years accepted for conversion.
pub const CIVIL_YEARS: RangeInclusive<i32> = 1..=9999;

/// 1 January of civil year `y` always falls in Hebrew year `y + 3760`.
const CIVIL_TO_HEBREW_YEAR: i32 = 3760;

fn icu_error(e: icu_calendar::Error) -> CalendarError {
    CalendarError::Conversion(e.to_string())
}

fn to_icu(date: NaiveDate) -> Result<Date<Hebrew>, CalendarError> {
    if !CIVIL_YEARS.contains(&date.year()) {
        return Err(CalendarError::OutOfRange(date));
    }
    let iso = Date::try_new_iso_date(date.year(), date.month() as u8, date.day() as u8)
        .map_err(icu_error)?;
    Ok(iso.to_calendar(Hebrew::new()))
}

/// 1 January inside Hebrew `year`, as an ICU date.
fn january_of(year: i32) -> Result<(NaiveDate, Date<Hebrew>), CalendarError> {
    let civil = year
        .checked_sub(CIVIL_TO_HEBREW_YEAR)
        .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
        .ok_or(CalendarError::YearOutOfRange(year))?;
    let hebrew = to_icu(civil).map_err(|_| CalendarError::YearOutOfRange(year))?;
    Ok((civil, hebrew))
}

/// 12 or 13.
pub fn months_in_year(year: i32) -> Result<u8, CalendarError> {
    Ok(january_of(year)?.1.months_in_year())
}

/// Years with Adar I and Adar II.
pub fn is_leap_year(year: i32) -> Result<bool, CalendarError> {
    Ok(months_in_year(year)? == 13)
}

/// 353, 354, 355, 383, 384 or 385.
pub fn days_in_year(year: i32) -> Result<u16, CalendarError> {
    Ok(january_of(year)?.1.days_in_year())
}

/// Civil date of 1 Tishrei of `year`.
pub fn rosh_hashana(year: i32) -> Result<NaiveDate, CalendarError> {
    let (civil, hebrew) = january_of(year)?;
    let elapsed = u64::from(hebrew.day_of_year_info().day_of_year) - 1;
    civil
        .checked_sub_days(Days::new(elapsed))
        .ok_or(CalendarError::YearOutOfRange(year))
}

/// Length of `month` in `year`. Months that do not occur in that year have
/// length 0.
pub fn days_in_month(year: i32, month: HebrewMonth) -> Result<u8, CalendarError> {
    if !month.occurs_in(is_leap_year(year)?) {
        return Ok(0);
    }
    let first = HebrewDate { year, month, day: 1 }.to_civil()?;
    Ok(to_icu(first)?.days_in_month())
}

/// A date in the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HebrewDate {
    /// Anno Mundi year.
    pub year: i32,
    pub month: HebrewMonth,
    /// 1-based day of month.
    pub day: u8,
}

impl HebrewDate {
    /// Build a validated date.
    pub fn new(year: i32, month: HebrewMonth, day: u8) -> Result<Self, CalendarError> {
        if year < 1 || !month.occurs_in(is_leap_year(year)?) {
            return Err(CalendarError::InvalidMonth {
                year,
                month: month.number(),
            });
        }
        if day == 0 || day > days_in_month(year, month)? {
            return Err(CalendarError::InvalidDay {
                year,
                month: month.number(),
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Build from the fixed month numbering (Nisan = 8).
    pub fn from_numbers(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let m = HebrewMonth::from_number(month, is_leap_year(year)?)
            .ok_or(CalendarError::InvalidMonth { year, month })?;
        Self::new(year, m, day)
    }

    /// Fixed month number 1..=13.
    pub fn month_number(&self) -> u8 {
        self.month.number()
    }

    /// Convert a proleptic Gregorian civil date.
    pub fn from_civil(date: NaiveDate) -> Result<Self, CalendarError> {
        let hebrew = to_icu(date)?;
        let leap = hebrew.months_in_year() == 13;
        let code = hebrew.month().code.0;
        let month = HebrewMonth::from_month_code(code.as_str(), leap)
            .ok_or_else(|| CalendarError::UnknownMonthCode(code.as_str().to_string()))?;
        Ok(Self {
            year: hebrew.year().number,
            month,
            day: hebrew.day_of_month().0 as u8,
        })
    }

    /// Gregorian civil date on which this Hebrew day's daytime falls.
    pub fn to_civil(&self) -> Result<NaiveDate, CalendarError> {
        let invalid_day = CalendarError::InvalidDay {
            year: self.year,
            month: self.month.number(),
            day: self.day,
        };
        if self.day == 0 {
            return Err(invalid_day);
        }
        let months = HebrewMonth::months_of_year(is_leap_year(self.year)?);
        let index = months
            .iter()
            .position(|&m| m == self.month)
            .ok_or(CalendarError::InvalidMonth {
                year: self.year,
                month: self.month.number(),
            })?;

        // Counting every month as 29 days lands at or before the target;
        // each 30-day month before it adds one step.
        let estimate = index as u64 * 29 + u64::from(self.day) - 1;
        let mut civil = rosh_hashana(self.year)?
            .checked_add_days(Days::new(estimate))
            .ok_or(CalendarError::YearOutOfRange(self.year))?;
        for _ in 0..=months.len() {
            if Self::from_civil(civil)? == *self {
                return Ok(civil);
            }
            civil = civil.succ_opt().ok_or(CalendarError::YearOutOfRange(self.year))?;
        }
        Err(invalid_day)
    }

    /// The following Hebrew day, crossing month and year boundaries.
    pub fn succ(&self) -> Result<Self, CalendarError> {
        let next = self
            .to_civil()?
            .succ_opt()
            .ok_or(CalendarError::YearOutOfRange(self.year))?;
        Self::from_civil(next)
    }
}

/// Civil date of `instant` in `tz` after the evening shift.
pub fn evening_shifted_date<T: TimeZone>(instant: &DateTime<T>, tz: &Tz) -> Option<NaiveDate> {
    let shifted = instant
        .clone()
        .checked_add_signed(TimeDelta::try_hours(EVENING_SHIFT_HOURS)?)?;
    Some(shifted.with_timezone(tz).date_naive())
}

/// Hebrew date of an instant, treating the six hours before local midnight
/// as already belonging to the next Hebrew day.
pub fn hebrew_date<T: TimeZone>(
    instant: &DateTime<T>,
    tz: &Tz,
) -> Result<HebrewDate, CalendarError> {
    let date = evening_shifted_date(instant, tz).ok_or(CalendarError::InstantOutOfRange)?;
    HebrewDate::from_civil(date)
}
