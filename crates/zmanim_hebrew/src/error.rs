//! Error types for Hebrew calendar conversion.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from Hebrew calendar conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Civil date outside the supported years.
    #[error("civil date {0} is outside the supported range")]
    OutOfRange(NaiveDate),
    /// Hebrew year outside the supported range.
    #[error("hebrew year {0} is outside the supported range")]
    YearOutOfRange(i32),
    /// Month number does not exist in the given year.
    #[error("month {month} does not exist in year {year}")]
    InvalidMonth { year: i32, month: u8 },
    /// Day number outside the month's length.
    #[error("day {day} outside month {month} of year {year}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    /// Month code the calendar does not define.
    #[error("unknown month code {0}")]
    UnknownMonthCode(String),
    /// Instant too far from the epoch to shift or convert.
    #[error("instant outside the supported range")]
    InstantOutOfRange,
    /// Error from the underlying calendar library.
    #[error("calendar conversion failed: {0}")]
    Conversion(String),
}
