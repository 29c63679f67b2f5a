//! Halachic daily times on top of the solar and calendar crates.
//!
//! This crate provides:
//! - The marker catalog and the opinion rules that compute each marker
//! - Community profiles and Custom per-marker overrides
//! - Preference storage (in memory or a JSON file)
//! - Candle lighting and Havdalah for Sabbath and festival eves
//! - The daily query combining all of the above with the Hebrew date
//!
//! Computing a day never fails. Crossings that do not occur are rendered as
//! the unavailable sentinel, and stale overrides resolve to the profile's
//! default opinion.

pub mod anchors;
pub mod catalog;
pub mod config;
pub mod daily;
pub mod error;
pub mod evaluate;
pub mod opinion;
pub mod profile;
pub mod resolver;
pub mod rollover;
pub mod special_times;
pub mod store;

pub use anchors::SolarDay;
pub use catalog::{MarkerDefinition, catalog, marker_ids};
pub use config::ZmanimConfig;
pub use daily::{DailyZmanim, MarkerResult, compute};
pub use error::HalachaError;
pub use evaluate::{OpinionResult, evaluate, evaluate_on, evaluate_opinion, evaluate_rule};
pub use opinion::{
    Anchor, DayBoundary, DaySpan, OpinionDefinition, OpinionRule, ReferenceEvent,
};
pub use profile::{ALL_PROFILES, Profile};
pub use resolver::{OverrideMap, Preferences, effective_opinion};
pub use rollover::{DayRollover, hebrew_info_at};
pub use special_times::{
    ALLOWED_CANDLE_OFFSETS, DEFAULT_CANDLE_OFFSET, HavdalahRule, SpecialDayKind, SpecialTimes,
    normalize_candle_offset, special_times,
};
pub use store::{
    CANDLE_OFFSET_KEY, CUSTOM_OPINION_MAP_KEY, JsonFileStore, MemoryStore, PROFILE_KEY,
    PreferenceStore,
};
