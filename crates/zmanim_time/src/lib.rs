//! Clock plumbing shared by the zmanim crates.
//!
//! This crate provides:
//! - IANA timezone resolution
//! - Materializing a UT hour-of-day onto a local calendar day
//! - `HH:mm` formatting with the "unavailable" sentinel

pub mod error;
pub mod local;

pub use error::TimeError;
pub use local::{
    UNAVAILABLE, add_minutes, format_hhmm, local_clock, materialize_ut_hours, parse_time_zone,
};
