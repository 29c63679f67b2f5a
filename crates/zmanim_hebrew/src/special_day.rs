//! Special-day tags and Sabbath/festival eve detection.
//!
//! Festival days follow the Land of Israel (one-day Yom Tov).

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::calendar::HebrewDate;
use crate::month::HebrewMonth;

/// Separator between joined tags and after the date line.
pub const TAG_SEPARATOR: &str = " · ";

/// Days tagged on a Hebrew date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialDay {
    RoshChodesh,
    CholHamoedSukkot,
    CholHamoedPesach,
    Chanukah,
    Purim,
    ShushanPurim,
    PurimKatan,
    ShushanPurimKatan,
}

impl SpecialDay {
    /// Hebrew display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RoshChodesh => "ראש חודש",
            Self::CholHamoedSukkot => "חול המועד סוכות",
            Self::CholHamoedPesach => "חול המועד פסח",
            Self::Chanukah => "חנוכה",
            Self::Purim => "פורים",
            Self::ShushanPurim => "שושן פורים",
            Self::PurimKatan => "פורים קטן",
            Self::ShushanPurimKatan => "שושן פורים קטן",
        }
    }
}

/// Classification of one civil day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    /// Tags in fixed order: Rosh Chodesh, Chol HaMoed, Chanukah, Purim.
    pub tags: Vec<SpecialDay>,
    pub is_erev_shabbat: bool,
    pub is_erev_yom_tov: bool,
    pub is_shabbat: bool,
}

impl DayClassification {
    /// Tags joined for display, or `None` when there are none.
    pub fn tags_text(&self) -> Option<String> {
        if self.tags.is_empty() {
            return None;
        }
        let names: Vec<&str> = self.tags.iter().map(|t| t.name()).collect();
        Some(names.join(TAG_SEPARATOR))
    }
}

/// Tags for a Hebrew date.
pub fn special_days(date: &HebrewDate) -> Vec<SpecialDay> {
    let (month, day) = (date.month, date.day);
    let mut tags = Vec::new();

    if day == 1 || day == 30 {
        tags.push(SpecialDay::RoshChodesh);
    }
    if month == HebrewMonth::Tishrei && (16..=21).contains(&day) {
        tags.push(SpecialDay::CholHamoedSukkot);
    }
    if month == HebrewMonth::Nisan && (16..=20).contains(&day) {
        tags.push(SpecialDay::CholHamoedPesach);
    }
    if (month == HebrewMonth::Kislev && day >= 25) || (month == HebrewMonth::Tevet && day <= 2) {
        tags.push(SpecialDay::Chanukah);
    }

    // Purim is in Adar of a common year and Adar II of a leap year
    let purim_month = matches!(month, HebrewMonth::Adar | HebrewMonth::AdarII);
    let katan_month = month == HebrewMonth::AdarI;
    match day {
        14 if purim_month => tags.push(SpecialDay::Purim),
        15 if purim_month => tags.push(SpecialDay::ShushanPurim),
        14 if katan_month => tags.push(SpecialDay::PurimKatan),
        15 if katan_month => tags.push(SpecialDay::ShushanPurimKatan),
        _ => {}
    }
    tags
}

/// Rosh HaShana (both days), Yom Kippur, Sukkot, Shemini Atzeret, first
/// and seventh day of Pesach, Shavuot.
pub fn is_yom_tov(date: &HebrewDate) -> bool {
    matches!(
        (date.month, date.day),
        (HebrewMonth::Tishrei, 1 | 2 | 10 | 15 | 22)
            | (HebrewMonth::Nisan, 15 | 21)
            | (HebrewMonth::Sivan, 6)
    )
}

/// Classify a Hebrew date falling on `weekday`.
pub fn classify(date: &HebrewDate, weekday: Weekday) -> DayClassification {
    DayClassification {
        tags: special_days(date),
        is_erev_shabbat: weekday == Weekday::Fri,
        is_erev_yom_tov: date.succ().is_ok_and(|next| is_yom_tov(&next)),
        is_shabbat: weekday == Weekday::Sat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(y: i32, m: u8, d: u8) -> HebrewDate {
        HebrewDate::from_numbers(y, m, d).unwrap()
    }

    #[test]
    fn rosh_chodesh_day_one_and_thirty() {
        assert_eq!(special_days(&h(5784, 1, 1)), vec![SpecialDay::RoshChodesh]);
        assert_eq!(special_days(&h(5784, 1, 30)), vec![SpecialDay::RoshChodesh]);
        assert!(special_days(&h(5784, 1, 29)).is_empty());
    }

    #[test]
    fn purim_leap_year_is_adar_two() {
        assert_eq!(special_days(&h(5784, 7, 14)), vec![SpecialDay::Purim]);
        assert_eq!(special_days(&h(5784, 7, 15)), vec![SpecialDay::ShushanPurim]);
        assert_eq!(special_days(&h(5784, 6, 14)), vec![SpecialDay::PurimKatan]);
        assert_eq!(
            special_days(&h(5784, 6, 15)),
            vec![SpecialDay::ShushanPurimKatan]
        );
    }

    #[test]
    fn purim_common_year_is_month_six() {
        assert_eq!(special_days(&h(5785, 6, 14)), vec![SpecialDay::Purim]);
        assert_eq!(special_days(&h(5785, 6, 15)), vec![SpecialDay::ShushanPurim]);
    }

    #[test]
    fn chol_hamoed_ranges() {
        assert_eq!(special_days(&h(5784, 8, 18)), vec![SpecialDay::CholHamoedPesach]);
        assert!(special_days(&h(5784, 8, 21)).is_empty());
        assert_eq!(special_days(&h(5785, 1, 16)), vec![SpecialDay::CholHamoedSukkot]);
        assert!(special_days(&h(5785, 1, 22)).is_empty());
    }

    #[test]
    fn chanukah_spans_month_boundary() {
        assert_eq!(special_days(&h(5784, 3, 25)), vec![SpecialDay::Chanukah]);
        assert_eq!(special_days(&h(5784, 4, 2)), vec![SpecialDay::Chanukah]);
        assert!(special_days(&h(5784, 4, 3)).is_empty());
    }

    #[test]
    fn rosh_chodesh_tevet_during_chanukah() {
        let tags = special_days(&h(5784, 4, 1));
        assert_eq!(tags, vec![SpecialDay::RoshChodesh, SpecialDay::Chanukah]);
        let c = DayClassification {
            tags,
            ..Default::default()
        };
        assert_eq!(c.tags_text().unwrap(), "ראש חודש · חנוכה");
    }

    #[test]
    fn yom_tov_list() {
        assert!(is_yom_tov(&h(5785, 1, 1)));
        assert!(is_yom_tov(&h(5785, 1, 2)));
        assert!(is_yom_tov(&h(5785, 1, 10)));
        assert!(is_yom_tov(&h(5785, 8, 21)));
        assert!(is_yom_tov(&h(5785, 10, 6)));
        assert!(!is_yom_tov(&h(5785, 1, 16)));
        assert!(!is_yom_tov(&h(5785, 10, 7)));
    }

    #[test]
    fn erev_yom_tov_crosses_year() {
        let c = classify(&h(5784, 13, 29), Weekday::Wed);
        assert!(c.is_erev_yom_tov);
        assert!(!c.is_erev_shabbat);
    }

    #[test]
    fn weekday_flags() {
        let fri = classify(&h(5785, 2, 10), Weekday::Fri);
        assert!(fri.is_erev_shabbat && !fri.is_shabbat);
        let sat = classify(&h(5785, 2, 11), Weekday::Sat);
        assert!(sat.is_shabbat && !sat.is_erev_shabbat);
    }
}
