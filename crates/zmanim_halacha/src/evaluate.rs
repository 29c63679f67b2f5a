//! Expands catalog markers into concrete local times.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;
use zmanim_solar::{GeoContext, PolarPolicy, SolarConfig};
use zmanim_time::{add_minutes, format_hhmm};

use crate::anchors::{SolarDay, scale};
use crate::catalog::MarkerDefinition;
use crate::opinion::{OpinionDefinition, OpinionRule};

/// One opinion evaluated for a date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpinionResult {
    pub id: String,
    pub label: String,
    /// Human-readable rule, e.g. `"sunrise -72 min"`.
    pub detail: String,
    /// `HH:mm`, or the unavailable sentinel.
    pub formatted_time: String,
    #[serde(skip)]
    pub instant: Option<DateTime<Tz>>,
}

/// Time of a single rule on a solar day.
pub fn evaluate_rule(rule: &OpinionRule, day: &SolarDay) -> Option<DateTime<Tz>> {
    match *rule {
        OpinionRule::FixedMinutes { anchor, minutes } => add_minutes(&day.anchor(anchor)?, minutes),
        OpinionRule::Degrees {
            depression_deg,
            direction,
        } => day.depression_crossing(depression_deg, direction),
        OpinionRule::ProportionalHours { span, hours } => {
            let (start, end) = day.span(span)?;
            let offset = scale(end - start, hours / 12.0)?;
            start.checked_add_signed(offset)
        }
        OpinionRule::Placeholder => None,
    }
}

/// Evaluate one opinion.
pub fn evaluate_opinion(opinion: &OpinionDefinition, day: &SolarDay) -> OpinionResult {
    let instant = evaluate_rule(&opinion.rule, day);
    tracing::trace!(
        opinion = %opinion.id,
        date = %day.date,
        time = ?instant,
        "evaluated opinion"
    );
    OpinionResult {
        id: opinion.id.clone(),
        label: opinion.label.clone(),
        detail: opinion.rule.to_string(),
        formatted_time: format_hhmm(instant.as_ref()),
        instant,
    }
}

/// Evaluate every opinion of a marker on a precomputed solar day, in
/// catalog order. Never empty.
pub fn evaluate_on(marker: &MarkerDefinition, day: &SolarDay) -> Vec<OpinionResult> {
    marker
        .opinions()
        .iter()
        .map(|o| evaluate_opinion(o, day))
        .collect()
}

/// Evaluate every opinion of a marker for a date and place.
pub fn evaluate(
    marker: &MarkerDefinition,
    geo: &GeoContext,
    date: NaiveDate,
    solar: &SolarConfig,
    policy: PolarPolicy,
) -> Vec<OpinionResult> {
    evaluate_on(marker, &SolarDay::compute(date, geo, solar, policy))
}
