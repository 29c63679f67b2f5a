//! Hebrew calendar for daily-times annotation.
//!
//! This crate provides:
//! - Conversion between civil dates and Hebrew dates (ICU `Hebrew` calendar)
//! - The evening shift that assigns late-evening instants to the next day
//! - Month names, day and year numerals
//! - Special-day tags and Sabbath/festival eve detection

pub mod calendar;
pub mod error;
pub mod info;
pub mod month;
pub mod numeral;
pub mod special_day;

pub use calendar::{
    CIVIL_YEARS, EVENING_SHIFT_HOURS, HebrewDate, days_in_month, days_in_year,
    evening_shifted_date, hebrew_date, is_leap_year, months_in_year, rosh_hashana,
};
pub use error::CalendarError;
pub use info::{HebrewDateInfo, weekday_name};
pub use month::HebrewMonth;
pub use numeral::{day_numeral, hebrew_numeral, year_numeral};
pub use special_day::{
    DayClassification, SpecialDay, TAG_SEPARATOR, classify, is_yom_tov, special_days,
};
