//! Display-ready Hebrew date information for a civil day.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::calendar::HebrewDate;
use crate::numeral::{day_numeral, year_numeral};
use crate::special_day::{DayClassification, TAG_SEPARATOR, classify};

/// Hebrew weekday name as printed on a calendar page.
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "יום ראשון",
        Weekday::Mon => "יום שני",
        Weekday::Tue => "יום שלישי",
        Weekday::Wed => "יום רביעי",
        Weekday::Thu => "יום חמישי",
        Weekday::Fri => "יום שישי",
        Weekday::Sat => "שבת",
    }
}

/// Hebrew date, numerals and classification for one civil day.
///
/// When conversion fails `date` is `None`, the numerals are empty and no
/// flags are set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HebrewDateInfo {
    /// Civil date the information was derived from.
    pub civil_date: NaiveDate,
    pub date: Option<HebrewDate>,
    pub day_numeral: String,
    pub month_name: String,
    pub year_numeral: String,
    pub weekday: Weekday,
    pub weekday_name: &'static str,
    #[serde(flatten)]
    pub classification: DayClassification,
}

impl HebrewDateInfo {
    /// Information for a civil date (already shifted for the evening rule).
    pub fn for_civil_date(civil_date: NaiveDate) -> Self {
        let weekday = civil_date.weekday();
        match HebrewDate::from_civil(civil_date) {
            Ok(date) => Self {
                civil_date,
                date: Some(date),
                day_numeral: day_numeral(date.day),
                month_name: date.month.name().to_string(),
                year_numeral: year_numeral(date.year),
                weekday,
                weekday_name: weekday_name(weekday),
                classification: classify(&date, weekday),
            },
            Err(e) => {
                tracing::warn!(%civil_date, error = %e, "hebrew date unavailable");
                Self {
                    civil_date,
                    date: None,
                    day_numeral: String::new(),
                    month_name: String::new(),
                    year_numeral: String::new(),
                    weekday,
                    weekday_name: weekday_name(weekday),
                    classification: DayClassification::default(),
                }
            }
        }
    }

    /// `"י״ד אדר"`.
    pub fn date_text(&self) -> String {
        if self.day_numeral.is_empty() {
            return self.month_name.clone();
        }
        format!("{} {}", self.day_numeral, self.month_name)
    }

    /// Date line with tags, e.g. `"י״ד אדר · פורים"`.
    pub fn formatted(&self) -> String {
        let date = self.date_text();
        match self.classification.tags_text() {
            Some(tags) if date.is_empty() => tags,
            Some(tags) => format!("{date}{TAG_SEPARATOR}{tags}"),
            None => date,
        }
    }

    pub fn is_erev_shabbat(&self) -> bool {
        self.classification.is_erev_shabbat
    }

    pub fn is_erev_yom_tov(&self) -> bool {
        self.classification.is_erev_yom_tov
    }

    pub fn is_shabbat(&self) -> bool {
        self.classification.is_shabbat
    }
}
