//! Golden-value tests for civil → Hebrew conversion against published
//! luach dates.

use chrono::NaiveDate;
use proptest::prelude::*;
use zmanim_hebrew::{
    HebrewDate, HebrewDateInfo, HebrewMonth, SpecialDay, days_in_year, hebrew_date,
    is_leap_year, rosh_hashana as rosh_hashana_date,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn convert(y: i32, m: u32, d: u32) -> (i32, HebrewMonth, u8) {
    let h = HebrewDate::from_civil(ymd(y, m, d)).unwrap();
    (h.year, h.month, h.day)
}

#[test]
fn rosh_hashana() {
    assert_eq!(convert(2024, 10, 3), (5785, HebrewMonth::Tishrei, 1));
    assert_eq!(convert(2023, 9, 16), (5784, HebrewMonth::Tishrei, 1));
    assert_eq!(convert(2025, 9, 23), (5786, HebrewMonth::Tishrei, 1));
}

#[test]
fn purim_5784_is_adar_two() {
    assert_eq!(convert(2024, 3, 24), (5784, HebrewMonth::AdarII, 14));
    let info = HebrewDateInfo::for_civil_date(ymd(2024, 3, 24));
    assert_eq!(info.classification.tags, vec![SpecialDay::Purim]);
    assert_eq!(info.date.unwrap().month_number(), 7);
}

#[test]
fn purim_katan_5784() {
    assert_eq!(convert(2024, 2, 23), (5784, HebrewMonth::AdarI, 14));
}

#[test]
fn purim_5785_is_month_six() {
    assert_eq!(convert(2025, 3, 14), (5785, HebrewMonth::Adar, 14));
    let info = HebrewDateInfo::for_civil_date(ymd(2025, 3, 14));
    assert_eq!(info.date.unwrap().month_number(), 6);
}

#[test]
fn pesach_and_chanukah() {
    assert_eq!(convert(2024, 4, 23), (5784, HebrewMonth::Nisan, 15));
    assert_eq!(convert(2023, 12, 8), (5784, HebrewMonth::Kislev, 25));
}

#[test]
fn shavuot_eve_2026() {
    assert_eq!(convert(2026, 5, 22), (5786, HebrewMonth::Sivan, 6));
    let eve = HebrewDateInfo::for_civil_date(ymd(2026, 5, 21));
    assert!(eve.is_erev_yom_tov());
    assert!(!eve.is_erev_shabbat());
    let day = HebrewDateInfo::for_civil_date(ymd(2026, 5, 22));
    assert!(day.is_erev_shabbat());
}

#[test]
fn year_kinds() {
    assert!(is_leap_year(5784).unwrap());
    assert!(!is_leap_year(5785).unwrap());
    assert_eq!(days_in_year(5784).unwrap(), 383);
    assert_eq!(days_in_year(5785).unwrap(), 355);
    assert_eq!(rosh_hashana_date(5786).unwrap(), ymd(2025, 9, 23));
}

#[test]
fn evening_rollover_before_pesach() {
    let tz = chrono_tz::Asia::Jerusalem;
    let seder = ymd(2024, 4, 22).and_hms_opt(20, 30, 0).unwrap();
    let instant = seder.and_local_timezone(tz).unwrap();
    let h = hebrew_date(&instant, &tz).unwrap();
    assert_eq!((h.month, h.day), (HebrewMonth::Nisan, 15));
}

proptest! {
    #[test]
    fn civil_round_trip(offset in 0i64..40_000) {
        let date = ymd(1950, 1, 1) + chrono::Days::new(offset as u64);
        let h = HebrewDate::from_civil(date).unwrap();
        prop_assert_eq!(h.to_civil().unwrap(), date);
        let next = date.succ_opt().unwrap();
        prop_assert_eq!(h.succ().unwrap(), HebrewDate::from_civil(next).unwrap());
    }
}
