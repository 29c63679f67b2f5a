//! Hebrew months and their fixed numbering.
//!
//! Numbering is anchored so that Nisan is always 8: Tishrei 1 .. Shevat 5,
//! then Adar 6 in a common year or Adar I 6 / Adar II 7 in a leap year,
//! then Nisan 8 .. Elul 13. Month 7 exists only in leap years.

use serde::{Deserialize, Serialize};

/// The Hebrew months, in civil-year order starting at Tishrei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HebrewMonth {
    Tishrei,
    Cheshvan,
    Kislev,
    Tevet,
    Shevat,
    /// First Adar of a leap year.
    AdarI,
    /// The single Adar of a common year.
    Adar,
    /// Second Adar of a leap year.
    AdarII,
    Nisan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
}

/// Months of a common year, Tishrei first.
pub const COMMON_YEAR_MONTHS: [HebrewMonth; 12] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shevat,
    HebrewMonth::Adar,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

/// Months of a leap year, Tishrei first.
pub const LEAP_YEAR_MONTHS: [HebrewMonth; 13] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shevat,
    HebrewMonth::AdarI,
    HebrewMonth::AdarII,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

impl HebrewMonth {
    /// Hebrew name as printed in a date line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tishrei => "תשרי",
            Self::Cheshvan => "חשון",
            Self::Kislev => "כסלו",
            Self::Tevet => "טבת",
            Self::Shevat => "שבט",
            Self::AdarI => "אדר א׳",
            Self::Adar => "אדר",
            Self::AdarII => "אדר ב׳",
            Self::Nisan => "ניסן",
            Self::Iyar => "אייר",
            Self::Sivan => "סיון",
            Self::Tammuz => "תמוז",
            Self::Av => "אב",
            Self::Elul => "אלול",
        }
    }

    /// Transliterated name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Tishrei => "Tishrei",
            Self::Cheshvan => "Cheshvan",
            Self::Kislev => "Kislev",
            Self::Tevet => "Tevet",
            Self::Shevat => "Shevat",
            Self::AdarI => "Adar I",
            Self::Adar => "Adar",
            Self::AdarII => "Adar II",
            Self::Nisan => "Nisan",
            Self::Iyar => "Iyar",
            Self::Sivan => "Sivan",
            Self::Tammuz => "Tammuz",
            Self::Av => "Av",
            Self::Elul => "Elul",
        }
    }

    /// Fixed month number 1..=13 (Nisan is always 8).
    pub const fn number(self) -> u8 {
        match self {
            Self::Tishrei => 1,
            Self::Cheshvan => 2,
            Self::Kislev => 3,
            Self::Tevet => 4,
            Self::Shevat => 5,
            Self::AdarI | Self::Adar => 6,
            Self::AdarII => 7,
            Self::Nisan => 8,
            Self::Iyar => 9,
            Self::Sivan => 10,
            Self::Tammuz => 11,
            Self::Av => 12,
            Self::Elul => 13,
        }
    }

    /// Month for a fixed number in a leap or common year.
    ///
    /// 6 is Adar I in a leap year and Adar otherwise; 7 is `None` in a
    /// common year.
    pub const fn from_number(number: u8, leap: bool) -> Option<Self> {
        match (number, leap) {
            (1, _) => Some(Self::Tishrei),
            (2, _) => Some(Self::Cheshvan),
            (3, _) => Some(Self::Kislev),
            (4, _) => Some(Self::Tevet),
            (5, _) => Some(Self::Shevat),
            (6, true) => Some(Self::AdarI),
            (6, false) => Some(Self::Adar),
            (7, true) => Some(Self::AdarII),
            (8, _) => Some(Self::Nisan),
            (9, _) => Some(Self::Iyar),
            (10, _) => Some(Self::Sivan),
            (11, _) => Some(Self::Tammuz),
            (12, _) => Some(Self::Av),
            (13, _) => Some(Self::Elul),
            _ => None,
        }
    }

    /// Month for a CLDR month code (`M01` Tishrei .. `M12` Elul, `M05L`
    /// Adar I). `M06` is Adar II in a leap year.
    pub fn from_month_code(code: &str, leap: bool) -> Option<Self> {
        match (code, leap) {
            ("M05L", true) => Some(Self::AdarI),
            ("M06", true) => Some(Self::AdarII),
            ("M06", false) => Some(Self::Adar),
            ("M05L", false) => None,
            _ => {
                let n: u8 = code.strip_prefix('M')?.parse().ok()?;
                match n {
                    1..=5 => Self::from_number(n, leap),
                    7..=12 => Self::from_number(n + 1, leap),
                    _ => None,
                }
            }
        }
    }

    /// Whether this month can occur in a year of the given kind.
    pub const fn occurs_in(self, leap: bool) -> bool {
        match self {
            Self::AdarI | Self::AdarII => leap,
            Self::Adar => !leap,
            _ => true,
        }
    }

    /// Months of a year in order, Tishrei first.
    pub fn months_of_year(leap: bool) -> &'static [HebrewMonth] {
        if leap {
            &LEAP_YEAR_MONTHS
        } else {
            &COMMON_YEAR_MONTHS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nisan_is_always_eight() {
        assert_eq!(HebrewMonth::from_number(8, true), Some(HebrewMonth::Nisan));
        assert_eq!(HebrewMonth::from_number(8, false), Some(HebrewMonth::Nisan));
        assert_eq!(HebrewMonth::Nisan.number(), 8);
    }

    #[test]
    fn adar_numbering() {
        assert_eq!(HebrewMonth::from_number(6, false), Some(HebrewMonth::Adar));
        assert_eq!(HebrewMonth::from_number(6, true), Some(HebrewMonth::AdarI));
        assert_eq!(HebrewMonth::from_number(7, true), Some(HebrewMonth::AdarII));
        assert_eq!(HebrewMonth::from_number(7, false), None);
    }

    #[test]
    fn out_of_range_numbers() {
        assert_eq!(HebrewMonth::from_number(0, true), None);
        assert_eq!(HebrewMonth::from_number(14, false), None);
    }

    #[test]
    fn numbers_round_trip_through_year_lists() {
        for leap in [false, true] {
            for &m in HebrewMonth::months_of_year(leap) {
                assert!(m.occurs_in(leap));
                assert_eq!(HebrewMonth::from_number(m.number(), leap), Some(m));
            }
        }
    }

    #[test]
    fn year_lists_are_sorted_by_number() {
        for leap in [false, true] {
            let nums: Vec<u8> = HebrewMonth::months_of_year(leap)
                .iter()
                .map(|m| m.number())
                .collect();
            assert!(nums.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn month_codes() {
        assert_eq!(HebrewMonth::from_month_code("M01", false), Some(HebrewMonth::Tishrei));
        assert_eq!(HebrewMonth::from_month_code("M05L", true), Some(HebrewMonth::AdarI));
        assert_eq!(HebrewMonth::from_month_code("M06", true), Some(HebrewMonth::AdarII));
        assert_eq!(HebrewMonth::from_month_code("M06", false), Some(HebrewMonth::Adar));
        assert_eq!(HebrewMonth::from_month_code("M07", true), Some(HebrewMonth::Nisan));
        assert_eq!(HebrewMonth::from_month_code("M12", false), Some(HebrewMonth::Elul));
        assert_eq!(HebrewMonth::from_month_code("M05L", false), None);
        assert_eq!(HebrewMonth::from_month_code("M13", true), None);
        assert_eq!(HebrewMonth::from_month_code("X01", true), None);
    }

    #[test]
    fn hebrew_names() {
        assert_eq!(HebrewMonth::Adar.name(), "אדר");
        assert_eq!(HebrewMonth::AdarII.name(), "אדר ב׳");
        assert_eq!(HebrewMonth::Tishrei.english_name(), "Tishrei");
    }
}
