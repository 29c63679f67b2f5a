//! Error types for the halachic times layer.

use std::path::PathBuf;

use thiserror::Error;
use zmanim_hebrew::CalendarError;
use zmanim_solar::SolarError;

/// Errors from configuration, preference storage and override edits.
///
/// Computing a day's times never fails; missing crossings and stale
/// overrides degrade to the unavailable sentinel or the default opinion.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalachaError {
    /// Error from location or solar setup.
    #[error("solar error: {0}")]
    Solar(#[from] SolarError),
    /// Error from the Hebrew calendar.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
    /// Reading or writing a file failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON (de)serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Configuration value out of its allowed set.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Marker id not in the catalog.
    #[error("unknown marker: {0}")]
    UnknownMarker(String),
    /// Opinion id not offered for the marker.
    #[error("marker {marker} has no opinion {opinion}")]
    UnknownOpinion { marker: String, opinion: String },
    /// Profile selector string not recognized.
    #[error("unknown profile: {0}")]
    UnknownProfile(String),
}

impl HalachaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
