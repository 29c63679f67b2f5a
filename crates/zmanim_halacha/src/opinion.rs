//! Opinion rules: how one authority computes one marker.
//!
//! Three rule kinds cover every opinion in the catalog:
//!
//! - fixed minutes from an anchor (sunrise, sunset, midday)
//! - a solar depression angle crossed in the morning or evening
//! - a number of proportional hours into a day span
//!
//! A proportional hour is 1/12 of `span.end − span.start`. Hours may be
//! negative: 72 proportional minutes before sunrise is −1.2 hours of the
//! sunrise→sunset span.

use std::fmt;

use serde::{Deserialize, Serialize};
use zmanim_solar::SolarDirection;

/// Instants that fixed-minute opinions count from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Visible sunrise at the observer's elevation.
    Sunrise,
    /// Visible sunset at the observer's elevation.
    Sunset,
    SeaLevelSunrise,
    SeaLevelSunset,
    /// Midpoint of visible sunrise and sunset.
    Chatzot,
}

impl Anchor {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::SeaLevelSunrise => "sea-level sunrise",
            Self::SeaLevelSunset => "sea-level sunset",
            Self::Chatzot => "midday",
        }
    }
}

/// Offset of dawn before sunrise and of dusk after sunset for a
/// Magen Avraham day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum DayBoundary {
    /// Clock minutes.
    FixedMinutes(f64),
    /// Proportional minutes of the sunrise→sunset day.
    ZmaniyotMinutes(f64),
    /// Depression angle in degrees.
    Degrees(f64),
}

impl fmt::Display for DayBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedMinutes(m) => write!(f, "{m} min"),
            Self::ZmaniyotMinutes(m) => write!(f, "{m} zmaniyot min"),
            Self::Degrees(d) => write!(f, "{d}°"),
        }
    }
}

/// The span whose twelfth is a proportional hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaySpan {
    /// Gra and Baal HaTanya.
    SunriseToSunset,
    /// Magen Avraham: dawn to dusk, symmetric around the sunrise→sunset day.
    DawnToDusk(DayBoundary),
    /// Night hours; six of them reach midnight.
    SunsetToNextSunrise,
}

impl fmt::Display for DaySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SunriseToSunset => f.write_str("sunrise–sunset"),
            Self::DawnToDusk(b) => write!(f, "dawn–dusk ({b})"),
            Self::SunsetToNextSunrise => f.write_str("sunset–next sunrise"),
        }
    }
}

/// Solar event an opinion is counted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceEvent {
    Dawn,
    Sunrise,
    Sunset,
    Dusk,
}

/// How one opinion computes its time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum OpinionRule {
    /// `anchor + minutes`; negative minutes are before the anchor.
    FixedMinutes { anchor: Anchor, minutes: f64 },
    /// Sea-level crossing of `90° + depression_deg`.
    Degrees {
        depression_deg: f64,
        direction: SolarDirection,
    },
    /// `span.start + hours · (span.end − span.start) / 12`.
    ProportionalHours { span: DaySpan, hours: f64 },
    /// Stand-in for a marker with no opinions; always unavailable.
    Placeholder,
}

impl OpinionRule {
    pub const fn fixed(anchor: Anchor, minutes: f64) -> Self {
        Self::FixedMinutes { anchor, minutes }
    }

    pub const fn morning_degrees(depression_deg: f64) -> Self {
        Self::Degrees {
            depression_deg,
            direction: SolarDirection::Morning,
        }
    }

    pub const fn evening_degrees(depression_deg: f64) -> Self {
        Self::Degrees {
            depression_deg,
            direction: SolarDirection::Evening,
        }
    }

    pub const fn hours(span: DaySpan, hours: f64) -> Self {
        Self::ProportionalHours { span, hours }
    }

    /// Event the rule counts from.
    pub fn reference_event(&self) -> Option<ReferenceEvent> {
        match self {
            Self::FixedMinutes { anchor, .. } => Some(match anchor {
                Anchor::Sunset | Anchor::SeaLevelSunset => ReferenceEvent::Sunset,
                Anchor::Sunrise | Anchor::SeaLevelSunrise | Anchor::Chatzot => {
                    ReferenceEvent::Sunrise
                }
            }),
            Self::Degrees { direction, .. } => Some(match direction {
                SolarDirection::Morning => ReferenceEvent::Dawn,
                SolarDirection::Evening => ReferenceEvent::Dusk,
            }),
            Self::ProportionalHours { span, .. } => Some(match span {
                DaySpan::SunriseToSunset => ReferenceEvent::Sunrise,
                DaySpan::DawnToDusk(_) => ReferenceEvent::Dawn,
                DaySpan::SunsetToNextSunrise => ReferenceEvent::Sunset,
            }),
            Self::Placeholder => None,
        }
    }
}

impl fmt::Display for OpinionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedMinutes { anchor, minutes } if *minutes == 0.0 => {
                f.write_str(anchor.name())
            }
            Self::FixedMinutes { anchor, minutes } => {
                write!(f, "{} {:+} min", anchor.name(), minutes)
            }
            Self::Degrees {
                depression_deg,
                direction,
            } => {
                let when = match direction {
                    SolarDirection::Morning => "morning",
                    SolarDirection::Evening => "evening",
                };
                write!(f, "{depression_deg}° below horizon, {when}")
            }
            Self::ProportionalHours { span, hours } => write!(f, "{hours} h of {span}"),
            Self::Placeholder => f.write_str(zmanim_time::UNAVAILABLE),
        }
    }
}

/// One selectable opinion of a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpinionDefinition {
    pub id: String,
    pub label: String,
    pub rule: OpinionRule,
}

impl OpinionDefinition {
    pub fn new(id: impl Into<String>, label: impl Into<String>, rule: OpinionRule) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            rule,
        }
    }

    /// `"<marker>-placeholder"` with the unavailable label.
    pub fn placeholder(marker_id: &str) -> Self {
        Self::new(
            format!("{marker_id}-placeholder"),
            zmanim_time::UNAVAILABLE,
            OpinionRule::Placeholder,
        )
    }

    pub fn reference_event(&self) -> Option<ReferenceEvent> {
        self.rule.reference_event()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_fixed() {
        assert_eq!(OpinionRule::fixed(Anchor::Sunrise, -72.0).to_string(), "sunrise -72 min");
        assert_eq!(OpinionRule::fixed(Anchor::Sunset, 13.5).to_string(), "sunset +13.5 min");
        assert_eq!(OpinionRule::fixed(Anchor::SeaLevelSunset, 0.0).to_string(), "sea-level sunset");
    }

    #[test]
    fn display_degrees_and_hours() {
        assert_eq!(
            OpinionRule::morning_degrees(16.1).to_string(),
            "16.1° below horizon, morning"
        );
        let r = OpinionRule::hours(DaySpan::DawnToDusk(DayBoundary::FixedMinutes(72.0)), 3.0);
        assert_eq!(r.to_string(), "3 h of dawn–dusk (72 min)");
    }

    #[test]
    fn reference_events() {
        assert_eq!(
            OpinionRule::fixed(Anchor::SeaLevelSunset, 72.0).reference_event(),
            Some(ReferenceEvent::Sunset)
        );
        assert_eq!(
            OpinionRule::morning_degrees(11.0).reference_event(),
            Some(ReferenceEvent::Dawn)
        );
        assert_eq!(
            OpinionRule::hours(DaySpan::SunsetToNextSunrise, 6.0).reference_event(),
            Some(ReferenceEvent::Sunset)
        );
        assert_eq!(OpinionRule::Placeholder.reference_event(), None);
    }

    #[test]
    fn placeholder_ids() {
        let p = OpinionDefinition::placeholder("alos");
        assert_eq!(p.id, "alos-placeholder");
        assert_eq!(p.label, "—");
    }
}
