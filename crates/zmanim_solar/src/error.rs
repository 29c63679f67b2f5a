//! Error types for solar calculations.

use thiserror::Error;
use zmanim_time::TimeError;

/// Errors from building a location for solar calculations.
///
/// A sun that never reaches a zenith is not an error; see
/// [`crate::PolarPolicy`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SolarError {
    /// Error from timezone resolution.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
}
