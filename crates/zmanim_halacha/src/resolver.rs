//! Effective opinion selection and persisted preferences.

use std::collections::BTreeMap;

use crate::catalog::{MarkerDefinition, catalog};
use crate::error::HalachaError;
use crate::profile::Profile;
use crate::special_times::normalize_candle_offset;
use crate::store::{CANDLE_OFFSET_KEY, CUSTOM_OPINION_MAP_KEY, PROFILE_KEY, PreferenceStore};

/// Custom-profile picks, `{markerId: opinionId}`.
pub type OverrideMap = BTreeMap<String, String>;

/// Opinion shown for `marker` under `profile`.
///
/// Fixed profiles use their catalog ordering. Custom uses the override when
/// it names an opinion the marker still offers, and the first opinion
/// otherwise.
pub fn effective_opinion<'a>(
    marker: &'a MarkerDefinition,
    profile: Profile,
    overrides: &OverrideMap,
) -> &'a crate::opinion::OpinionDefinition {
    if profile.is_custom() {
        if let Some(picked) = overrides.get(&marker.id) {
            match marker.opinion(picked) {
                Some(o) => return o,
                None => tracing::debug!(
                    marker = %marker.id,
                    opinion = %picked,
                    "override names a missing opinion, using default"
                ),
            }
        }
    }
    marker.default_opinion()
}

/// Typed access to the persisted preference keys.
#[derive(Debug)]
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current override map. Unreadable data yields an empty map; nothing is
    /// written back.
    pub fn overrides(&self) -> OverrideMap {
        let Some(text) = self.store.get(CUSTOM_OPINION_MAP_KEY) else {
            return OverrideMap::new();
        };
        serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "corrupt override map, ignoring");
            OverrideMap::new()
        })
    }

    /// Record a Custom-profile pick and persist it immediately.
    ///
    /// Returns `Ok(false)` without touching the store outside Custom.
    pub fn pick_opinion(
        &self,
        profile: Profile,
        marker_id: &str,
        opinion_id: &str,
    ) -> Result<bool, HalachaError> {
        if !profile.is_custom() {
            return Ok(false);
        }
        let markers = catalog(profile);
        let marker = markers
            .iter()
            .find(|m| m.id == marker_id)
            .ok_or_else(|| HalachaError::UnknownMarker(marker_id.to_string()))?;
        if marker.opinion(opinion_id).is_none() {
            return Err(HalachaError::UnknownOpinion {
                marker: marker_id.to_string(),
                opinion: opinion_id.to_string(),
            });
        }

        let mut map = self.overrides();
        map.insert(marker_id.to_string(), opinion_id.to_string());
        self.store
            .set(CUSTOM_OPINION_MAP_KEY, serde_json::to_string(&map)?)?;
        tracing::debug!(marker = marker_id, opinion = opinion_id, "saved opinion pick");
        Ok(true)
    }

    /// Clear every Custom pick in one store operation.
    pub fn reset_to_defaults(&self) -> Result<(), HalachaError> {
        self.store.remove(CUSTOM_OPINION_MAP_KEY)
    }

    /// Persisted profile; unknown or missing values give the default.
    pub fn profile(&self) -> Profile {
        match self.store.get(PROFILE_KEY) {
            Some(id) => id.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring stored profile");
                Profile::default()
            }),
            None => Profile::default(),
        }
    }

    /// Switch profile. The override map is left as is.
    pub fn set_profile(&self, profile: Profile) -> Result<(), HalachaError> {
        self.store.set(PROFILE_KEY, profile.id().to_string())
    }

    /// Stored candle-lighting offset, or `fallback` when unset. Values
    /// outside the offered set become the default offset.
    pub fn candle_offset(&self, fallback: u32) -> u32 {
        let stored = self
            .store
            .get(CANDLE_OFFSET_KEY)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(fallback);
        normalize_candle_offset(stored)
    }

    pub fn set_candle_offset(&self, minutes: u32) -> Result<(), HalachaError> {
        let minutes = normalize_candle_offset(minutes);
        self.store.set(CANDLE_OFFSET_KEY, minutes.to_string())
    }
}
