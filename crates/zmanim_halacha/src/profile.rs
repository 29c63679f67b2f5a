//! Community profiles selecting default opinions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HalachaError;

/// Community profile. Custom uses the Sephardi ordering and additionally
/// honors per-marker overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Edot HaMizrach, following Rav Ovadia Yosef.
    #[default]
    Sephardi,
    /// Ashkenazi yeshiva custom.
    Ashkenazi,
    Chabad,
    Custom,
}

/// All profiles, Custom last.
pub const ALL_PROFILES: [Profile; 4] = [
    Profile::Sephardi,
    Profile::Ashkenazi,
    Profile::Chabad,
    Profile::Custom,
];

impl Profile {
    /// Persisted selector string.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sephardi => "sephardi",
            Self::Ashkenazi => "ashkenazi",
            Self::Chabad => "chabad",
            Self::Custom => "custom",
        }
    }

    /// Hebrew title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Sephardi => "עדות המזרח / ר׳ עובדיה",
            Self::Ashkenazi => "אשכנז (ישיבתי)",
            Self::Chabad => "חב״ד",
            Self::Custom => "פרופיל מותאם אישית",
        }
    }

    /// Abbreviation shown next to the title.
    pub const fn short_symbol(self) -> &'static str {
        match self {
            Self::Sephardi => "ע״מ",
            Self::Ashkenazi => "א",
            Self::Chabad => "ח",
            Self::Custom => "מותאם",
        }
    }

    /// Whether per-marker overrides apply.
    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }

    /// Ordering family used to build the catalog.
    pub(crate) const fn ordering(self) -> Ordering {
        match self {
            Self::Sephardi | Self::Custom => Ordering::Sephardi,
            Self::Ashkenazi => Ordering::Ashkenazi,
            Self::Chabad => Ordering::Chabad,
        }
    }

    /// The fixed profiles.
    pub fn basic() -> &'static [Profile] {
        &ALL_PROFILES[..3]
    }
}

/// Catalog orderings. Custom shares the Sephardi one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Ordering {
    Sephardi,
    Ashkenazi,
    Chabad,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Profile {
    type Err = HalachaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PROFILES
            .iter()
            .copied()
            .find(|p| p.id() == s)
            .ok_or_else(|| HalachaError::UnknownProfile(s.to_string()))
    }
}
