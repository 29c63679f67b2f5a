//! The daily query: every marker, the Hebrew date and the eve block for one
//! date and place.

use chrono::NaiveDate;
use serde::Serialize;
use zmanim_hebrew::HebrewDateInfo;
use zmanim_solar::GeoContext;

use crate::anchors::SolarDay;
use crate::catalog::catalog;
use crate::config::ZmanimConfig;
use crate::evaluate::{OpinionResult, evaluate_on};
use crate::profile::Profile;
use crate::resolver::{OverrideMap, effective_opinion};
use crate::special_times::{SpecialTimes, special_times_on};

/// One marker with all of its opinions evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerResult {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub opinions: Vec<OpinionResult>,
    pub effective_opinion_id: String,
    /// Whether more than one opinion is offered.
    pub interactive: bool,
}

impl MarkerResult {
    pub fn effective(&self) -> Option<&OpinionResult> {
        self.opinions
            .iter()
            .find(|o| o.id == self.effective_opinion_id)
    }
}

/// Everything shown for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyZmanim {
    pub date: NaiveDate,
    pub location: GeoContext,
    pub profile: Profile,
    pub markers: Vec<MarkerResult>,
    pub hebrew: HebrewDateInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<SpecialTimes>,
}

impl DailyZmanim {
    pub fn marker(&self, id: &str) -> Option<&MarkerResult> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Effective opinion of a marker.
    pub fn effective(&self, marker_id: &str) -> Option<&OpinionResult> {
        self.marker(marker_id)?.effective()
    }
}

/// Compute the daily page.
///
/// `geo` falls back to the configured location when `None`. `candle_offset`
/// is the persisted preference when one exists; otherwise pass
/// `config.candle_offset_minutes`.
pub fn compute(
    date: NaiveDate,
    geo: Option<&GeoContext>,
    profile: Profile,
    overrides: &OverrideMap,
    candle_offset: u32,
    config: &ZmanimConfig,
) -> DailyZmanim {
    let geo = geo.unwrap_or(&config.fallback_location);
    let day = SolarDay::compute(date, geo, &config.solar, config.polar_policy);

    let markers = catalog(profile)
        .iter()
        .map(|marker| MarkerResult {
            id: marker.id.clone(),
            title: marker.title.clone(),
            subtitle: marker.subtitle.clone(),
            opinions: evaluate_on(marker, &day),
            effective_opinion_id: effective_opinion(marker, profile, overrides).id.clone(),
            interactive: marker.is_interactive(),
        })
        .collect();

    let hebrew = HebrewDateInfo::for_civil_date(date);
    let special = special_times_on(&day, &hebrew, candle_offset, config.havdalah, &config.solar);
    tracing::debug!(
        %date,
        location = %geo.display_name,
        %profile,
        special = special.is_some(),
        "computed daily zmanim"
    );

    DailyZmanim {
        date,
        location: geo.clone(),
        profile,
        markers,
        hebrew,
        special,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn missing_location_uses_fallback() {
        let config = ZmanimConfig::default();
        let page = compute(
            ymd(2024, 6, 19),
            None,
            Profile::Sephardi,
            &OverrideMap::new(),
            18,
            &config,
        );
        assert_eq!(page.location, config.fallback_location);
        assert_eq!(page.markers.len(), 18);
        assert!(page.special.is_none());
    }

    #[test]
    fn every_effective_id_is_offered() {
        let mut overrides = OverrideMap::new();
        overrides.insert("alos".into(), "bogus".into());
        overrides.insert("tzeit-3-stars".into(), "tzeit-40".into());
        let page = compute(
            ymd(2024, 6, 21),
            None,
            Profile::Custom,
            &overrides,
            18,
            &ZmanimConfig::default(),
        );
        for m in &page.markers {
            assert!(m.effective().is_some(), "{}", m.id);
        }
        assert_eq!(page.effective("alos").unwrap().id, "alos-72-fixed");
        assert_eq!(page.effective("tzeit-3-stars").unwrap().id, "tzeit-40");
    }

    #[test]
    fn json_output_has_formatted_times() {
        let page = compute(
            ymd(2024, 6, 21),
            None,
            Profile::Ashkenazi,
            &OverrideMap::new(),
            18,
            &ZmanimConfig::default(),
        );
        let v = serde_json::to_value(&page).unwrap();
        assert_eq!(v["profile"], "ashkenazi");
        assert_eq!(v["markers"][0]["id"], "alos");
        assert!(v["markers"][0]["opinions"][0]["formatted_time"].is_string());
        assert_eq!(v["special"]["kind"], "shabbat");
    }
}
