//! Error types for clock conversions.

use thiserror::Error;

/// Errors from timezone lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Timezone identifier is not in the IANA database.
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
}
