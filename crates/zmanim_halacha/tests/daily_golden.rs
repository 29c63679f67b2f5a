//! Golden tests for the daily query at Jerusalem (31.778 N, 35.235 E,
//! 800 m), checked against the published Jerusalem luach to within the
//! accuracy of the almanac sun model.

use chrono::{DateTime, NaiveDate, Timelike};
use chrono_tz::Tz;
use proptest::prelude::*;
use zmanim_halacha::{
    DailyZmanim, HavdalahRule, JsonFileStore, OverrideMap, Preferences, Profile,
    SpecialDayKind, ZmanimConfig, compute,
};
use zmanim_solar::{GeoContext, PolarPolicy};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn jerusalem_day(date: NaiveDate, profile: Profile) -> DailyZmanim {
    compute(
        date,
        None,
        profile,
        &OverrideMap::new(),
        18,
        &ZmanimConfig::default(),
    )
}

fn instant(page: &DailyZmanim, marker: &str, opinion: &str) -> DateTime<Tz> {
    page.marker(marker)
        .and_then(|m| m.opinions.iter().find(|o| o.id == opinion))
        .and_then(|o| o.instant)
        .unwrap_or_else(|| panic!("{marker}/{opinion} missing"))
}

#[test]
fn tosefet_offsets_from_visible_sunset() {
    let page = jerusalem_day(ymd(2024, 6, 21), Profile::Sephardi);
    let sunset = instant(&page, "shekiya", "shekiya-visible");
    let t18 = instant(&page, "tosefetShabbat", "tosefet-18");
    let t40 = instant(&page, "tosefetShabbat", "tosefet-40");
    assert_eq!((t18 - t40).num_minutes(), 22);
    assert_eq!((sunset - t18).num_seconds(), 18 * 60);
}

#[test]
fn elevated_sunset_is_later_than_sea_level() {
    let page = jerusalem_day(ymd(2024, 6, 21), Profile::Sephardi);
    let sea = instant(&page, "shekiya", "shekiya-sea");
    let visible = instant(&page, "shekiya", "shekiya-visible");
    let lag = (visible - sea).num_seconds();
    assert!((120..=600).contains(&lag), "lag {lag}s");
    let rt_sea = instant(&page, "night-RabbeinuTam", "rt-72-fixed-sea");
    assert_eq!((rt_sea - sea).num_minutes(), 72);
}

#[test]
fn midsummer_sunset_clock_time() {
    let page = jerusalem_day(ymd(2024, 6, 21), Profile::Sephardi);
    let visible = instant(&page, "shekiya", "shekiya-visible");
    assert_eq!(visible.hour(), 19);
    assert!((45..=59).contains(&visible.minute()), "{visible}");
}

#[test]
fn profile_defaults() {
    let date = ymd(2024, 6, 19);
    let seph = jerusalem_day(date, Profile::Sephardi);
    let ashk = jerusalem_day(date, Profile::Ashkenazi);
    let chabad = jerusalem_day(date, Profile::Chabad);
    assert_eq!(seph.effective("alos").unwrap().id, "alos-72-fixed");
    assert_eq!(ashk.effective("alos").unwrap().id, "alos-72-zmaniyot");
    assert_eq!(chabad.effective("night-GRA-3-4-mil").unwrap().id, "night-GRA-24");
    assert_eq!(seph.effective("netz").unwrap().id, "netz-sea");
}

#[test]
fn fixed_profiles_ignore_overrides() {
    let mut overrides = OverrideMap::new();
    overrides.insert("alos".into(), "alos-19.75".into());
    let page = compute(
        ymd(2024, 6, 19),
        None,
        Profile::Ashkenazi,
        &overrides,
        18,
        &ZmanimConfig::default(),
    );
    assert_eq!(page.effective("alos").unwrap().id, "alos-72-zmaniyot");
}

#[test]
fn custom_picks_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    {
        let prefs = Preferences::new(JsonFileStore::open(&path).unwrap());
        prefs.set_profile(Profile::Custom).unwrap();
        prefs
            .pick_opinion(Profile::Custom, "tzeit-3-stars", "tzeit-36")
            .unwrap();
        prefs.set_candle_offset(40).unwrap();
    }

    let prefs = Preferences::new(JsonFileStore::open(&path).unwrap());
    let config = ZmanimConfig::default();
    let page = compute(
        ymd(2024, 6, 21),
        None,
        prefs.profile(),
        &prefs.overrides(),
        prefs.candle_offset(config.candle_offset_minutes),
        &config,
    );
    assert_eq!(page.effective("tzeit-3-stars").unwrap().id, "tzeit-36");
    assert_eq!(page.special.as_ref().unwrap().candle_offset_minutes, 40);

    prefs.reset_to_defaults().unwrap();
    assert!(prefs.overrides().is_empty());
}

#[test]
fn friday_has_shabbat_block() {
    let page = jerusalem_day(ymd(2024, 6, 21), Profile::Sephardi);
    let special = page.special.clone().expect("friday block");
    assert_eq!(special.kind, SpecialDayKind::Shabbat);
    let sunset = instant(&page, "shekiya", "shekiya-visible");
    assert_eq!((sunset - special.candle_lighting.unwrap()).num_minutes(), 18);

    let saturday = jerusalem_day(ymd(2024, 6, 22), Profile::Sephardi);
    let next_sunset = instant(&saturday, "shekiya", "shekiya-visible");
    assert_eq!((special.havdalah.unwrap() - next_sunset).num_minutes(), 40);
    assert!(saturday.special.is_none());
}

#[test]
fn erev_shavuot_has_yom_tov_block() {
    let page = jerusalem_day(ymd(2026, 5, 21), Profile::Sephardi);
    assert_eq!(page.special.unwrap().kind, SpecialDayKind::YomTov);
}

#[test]
fn weekday_has_no_block() {
    let page = jerusalem_day(ymd(2024, 6, 18), Profile::Sephardi);
    assert!(page.special.is_none());
}

#[test]
fn degree_havdalah_follows_config() {
    let config = ZmanimConfig {
        havdalah: HavdalahRule::Degrees(8.5),
        ..ZmanimConfig::default()
    };
    let page = compute(
        ymd(2024, 6, 21),
        None,
        Profile::Sephardi,
        &OverrideMap::new(),
        18,
        &config,
    );
    let havdalah = page.special.unwrap().havdalah.unwrap();
    assert_eq!(havdalah.date_naive(), ymd(2024, 6, 22));
    assert_eq!(havdalah.hour(), 20);
}

#[test]
fn polar_day_renders_sentinels_or_fixed_clock() {
    let geo = GeoContext::new(69.65, 18.96, 0.0, "Europe/Oslo", "Tromsø").unwrap();
    let date = ymd(2024, 6, 21);
    let page = compute(
        date,
        Some(&geo),
        Profile::Sephardi,
        &OverrideMap::new(),
        18,
        &ZmanimConfig::default(),
    );
    assert_eq!(page.markers.len(), 18);
    let shekiya = page.effective("shekiya").unwrap();
    assert_eq!(shekiya.formatted_time, "—");
    assert_eq!(page.effective("sofShma-GRA").unwrap().formatted_time, "—");

    let config = ZmanimConfig {
        polar_policy: PolarPolicy::FixedLocalClock,
        ..ZmanimConfig::default()
    };
    let page = compute(date, Some(&geo), Profile::Sephardi, &OverrideMap::new(), 18, &config);
    assert_eq!(page.effective("shekiya").unwrap().formatted_time, "18:00");
    assert_eq!(page.effective("netz").unwrap().formatted_time, "06:00");
    assert_eq!(page.effective("chatzot").unwrap().formatted_time, "12:00");
}

#[test]
fn degree_magen_avraham_day_spans_midnight_dusk() {
    // Vigo keeps CEST at 8.7° W, so the June 16.1° dusk is after midnight
    let geo = GeoContext::new(42.24, -8.72, 0.0, "Europe/Madrid", "Vigo").unwrap();
    let page = compute(
        ymd(2024, 6, 21),
        Some(&geo),
        Profile::Sephardi,
        &OverrideMap::new(),
        18,
        &ZmanimConfig::default(),
    );
    let dawn = instant(&page, "alos", "alos-16.1");
    let early_dawn = instant(&page, "alos", "alos-19.75");
    let shma = instant(&page, "sofShma-MA", "sofShma-MA-16.1");
    let tfila = instant(&page, "sofTfila-MA", "sofTfila-MA-16.1");
    let shma_gra = instant(&page, "sofShma-GRA", "sofShma-GRA-main");
    assert!(early_dawn < dawn);
    assert!(dawn < shma && shma < tfila, "{dawn} {shma} {tfila}");
    assert!(shma < shma_gra);
}

proptest! {
    #[test]
    fn sephardi_defaults_are_chronological(offset in 0u64..366) {
        let date = ymd(2024, 1, 1) + chrono::Days::new(offset);
        let page = jerusalem_day(date, Profile::Sephardi);
        let order = [
            "alos", "tzitzitTefillin", "netz", "sofShma-GRA", "sofTfila-GRA", "chatzot",
            "minchaGedola", "minchaKetana", "plagHamincha", "shekiya", "night-GRA-3-4-mil",
            "tzeit-3-stars", "night-RabbeinuTam", "chatzotLayla",
        ];
        let times: Vec<_> = order
            .iter()
            .map(|id| page.effective(id).and_then(|o| o.instant))
            .collect();
        for (pair, ids) in times.windows(2).zip(order.windows(2)) {
            let (Some(a), Some(b)) = (pair[0], pair[1]) else {
                panic!("missing time for {ids:?}");
            };
            prop_assert!(a < b, "{} !< {} on {}", ids[0], ids[1], date);
        }
    }

    #[test]
    fn magen_avraham_shma_precedes_gra(offset in 0u64..366) {
        let date = ymd(2024, 1, 1) + chrono::Days::new(offset);
        let page = jerusalem_day(date, Profile::Sephardi);
        let ma = page.effective("sofShma-MA").and_then(|o| o.instant).unwrap();
        let gra = page.effective("sofShma-GRA").and_then(|o| o.instant).unwrap();
        prop_assert!(ma < gra);
    }
}
