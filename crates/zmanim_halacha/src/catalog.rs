//! The registry of daily markers and the opinions that compute them.
//!
//! The catalog is built per profile: each profile lists a marker's opinions
//! in its own preferred order, and the first entry is that profile's
//! default.

use crate::opinion::{Anchor, DayBoundary, DaySpan, OpinionDefinition, OpinionRule};
use crate::profile::{Ordering, Profile};

/// A named daily marker with its ordered, non-empty list of opinions.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDefinition {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    opinions: Vec<OpinionDefinition>,
}

impl MarkerDefinition {
    /// An empty opinion list is replaced by a single placeholder.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        subtitle: Option<&str>,
        opinions: Vec<OpinionDefinition>,
    ) -> Self {
        let id = id.into();
        let opinions = if opinions.is_empty() {
            vec![OpinionDefinition::placeholder(&id)]
        } else {
            opinions
        };
        Self {
            id,
            title: title.into(),
            subtitle: subtitle.map(str::to_string),
            opinions,
        }
    }

    pub fn opinions(&self) -> &[OpinionDefinition] {
        &self.opinions
    }

    /// First opinion; always present.
    pub fn default_opinion(&self) -> &OpinionDefinition {
        &self.opinions[0]
    }

    pub fn opinion(&self, id: &str) -> Option<&OpinionDefinition> {
        self.opinions.iter().find(|o| o.id == id)
    }

    /// Markers with a single opinion are display-only.
    pub fn is_interactive(&self) -> bool {
        self.opinions.len() > 1
    }
}

fn op(id: &str, label: &str, rule: OpinionRule) -> OpinionDefinition {
    OpinionDefinition::new(id, label, rule)
}

/// Pick entries of `pool` by index, in the given order.
fn ordered(pool: &[OpinionDefinition], order: &[usize]) -> Vec<OpinionDefinition> {
    order.iter().filter_map(|&i| pool.get(i).cloned()).collect()
}

const GRA_LABEL: &str = "גר״א ובעל התניא";

fn alos(ordering: Ordering) -> MarkerDefinition {
    let pool = [
        op(
            "alos-72-fixed",
            "72 דקות שוות קודם הנץ",
            OpinionRule::fixed(Anchor::Sunrise, -72.0),
        ),
        op(
            "alos-72-zmaniyot",
            "72 דקות בזמניות (≈16.1°) קודם הנץ",
            OpinionRule::hours(DaySpan::SunriseToSunset, -1.2),
        ),
        op(
            "alos-90-zmaniyot",
            "90 דקות בזמניות קודם הנץ",
            OpinionRule::hours(DaySpan::SunriseToSunset, -1.5),
        ),
        op(
            "alos-16.1",
            "16.1° מתחת לאופק",
            OpinionRule::morning_degrees(16.1),
        ),
        op(
            "alos-19.75",
            "19.75° מתחת לאופק",
            OpinionRule::morning_degrees(19.75),
        ),
    ];
    let order: &[usize] = match ordering {
        Ordering::Sephardi => &[0, 1, 2, 3, 4],
        Ordering::Ashkenazi | Ordering::Chabad => &[1, 0, 2, 3, 4],
    };
    MarkerDefinition::new("alos", "עלות השחר", None, ordered(&pool, order))
}

fn tzitzit_tefillin(ordering: Ordering) -> MarkerDefinition {
    let pool = [
        op("tzitzit-11", "11° מתחת לאופק", OpinionRule::morning_degrees(11.0)),
        op(
            "tzitzit-11.5",
            "11.5° מתחת לאופק",
            OpinionRule::morning_degrees(11.5),
        ),
        op(
            "tzitzit-10.2",
            "10.2° מתחת לאופק (לחומרא)",
            OpinionRule::morning_degrees(10.2),
        ),
    ];
    let order: &[usize] = match ordering {
        Ordering::Sephardi => &[0, 1, 2],
        Ordering::Ashkenazi | Ordering::Chabad => &[1, 0, 2],
    };
    MarkerDefinition::new(
        "tzitzitTefillin",
        "זמן ציצית ותפילין",
        None,
        ordered(&pool, order),
    )
}

fn netz() -> MarkerDefinition {
    MarkerDefinition::new(
        "netz",
        "הנץ החמה",
        None,
        vec![
            op(
                "netz-sea",
                "מישור בגובה פני הים",
                OpinionRule::fixed(Anchor::SeaLevelSunrise, 0.0),
            ),
            op(
                "netz-visible",
                "הנץ הנראה לפי גובה המקום",
                OpinionRule::fixed(Anchor::Sunrise, 0.0),
            ),
        ],
    )
}

/// Magen Avraham opinions for `hours` into the dawn→dusk day.
fn magen_avraham(prefix: &str, hours: f64) -> Vec<OpinionDefinition> {
    let variants = [
        ("90-zmaniyot", "לפי 90 דקות בזמניות", DayBoundary::ZmaniyotMinutes(90.0)),
        ("72-fixed", "לפי 72 דקות שוות", DayBoundary::FixedMinutes(72.0)),
        ("72-zmaniyot", "לפי 72 דקות בזמניות", DayBoundary::ZmaniyotMinutes(72.0)),
        ("16.1", "לפי 16.1 מעלות", DayBoundary::Degrees(16.1)),
    ];
    variants
        .into_iter()
        .map(|(suffix, label, boundary)| {
            op(
                &format!("{prefix}-{suffix}"),
                label,
                OpinionRule::hours(DaySpan::DawnToDusk(boundary), hours),
            )
        })
        .collect()
}

fn gra(id: &str, label: &str, hours: f64) -> Vec<OpinionDefinition> {
    vec![op(id, label, OpinionRule::hours(DaySpan::SunriseToSunset, hours))]
}

fn morning_prayer() -> Vec<MarkerDefinition> {
    vec![
        MarkerDefinition::new(
            "sofShma-MA",
            "סוף זמן קריאת שמע (מגן אברהם)",
            Some("סוף ג׳ שעות זמניות"),
            magen_avraham("sofShma-MA", 3.0),
        ),
        MarkerDefinition::new(
            "sofShma-GRA",
            "סוף זמן קריאת שמע (גר״א ובעל התניא)",
            None,
            gra("sofShma-GRA-main", "ג׳ שעות זמניות מן הנץ", 3.0),
        ),
        MarkerDefinition::new(
            "sofTfila-MA",
            "סוף זמן תפילה (מגן אברהם)",
            Some("סוף ד׳ שעות זמניות"),
            magen_avraham("sofTfila-MA", 4.0),
        ),
        MarkerDefinition::new(
            "sofTfila-GRA",
            "סוף זמן תפילה (גר״א ובעל התניא)",
            None,
            gra("sofTfila-GRA-main", "ד׳ שעות זמניות מן הנץ", 4.0),
        ),
    ]
}

fn afternoon() -> Vec<MarkerDefinition> {
    let ma72 = DaySpan::DawnToDusk(DayBoundary::FixedMinutes(72.0));
    vec![
        MarkerDefinition::new(
            "chatzot",
            "חצות היום",
            None,
            gra("chatzot-main", "אמצע היום ההלכתי", 6.0),
        ),
        MarkerDefinition::new(
            "minchaGedola",
            "מנחה גדולה",
            None,
            vec![
                op(
                    "minchaG-GRA",
                    GRA_LABEL,
                    OpinionRule::hours(DaySpan::SunriseToSunset, 6.5),
                ),
                op(
                    "minchaG-MA-72-fixed",
                    "לחומרא (מגן אברהם, 30 דקות שוות אחר חצות)",
                    OpinionRule::fixed(Anchor::Chatzot, 30.0),
                ),
            ],
        ),
        MarkerDefinition::new(
            "minchaKetana",
            "מנחה קטנה",
            None,
            vec![
                op(
                    "minchaK-GRA",
                    GRA_LABEL,
                    OpinionRule::hours(DaySpan::SunriseToSunset, 9.5),
                ),
                op(
                    "minchaK-MA-72-fixed",
                    "מגן אברהם (72 דקות שוות)",
                    OpinionRule::hours(ma72, 9.5),
                ),
            ],
        ),
        MarkerDefinition::new(
            "plagHamincha",
            "פלג המנחה",
            None,
            vec![
                op(
                    "plag-GRA",
                    GRA_LABEL,
                    OpinionRule::hours(DaySpan::SunriseToSunset, 10.75),
                ),
                op(
                    "plag-MA-72-fixed",
                    "מגן אברהם (72 דקות שוות)",
                    OpinionRule::hours(ma72, 10.75),
                ),
            ],
        ),
    ]
}

fn evening(ordering: Ordering) -> Vec<MarkerDefinition> {
    let after_sunset = |id: &str, label: &str, minutes: f64| {
        op(id, label, OpinionRule::fixed(Anchor::Sunset, minutes))
    };

    let night_pool = [
        after_sunset("night-GRA-13.5", "13½ דקות אחרי השקיעה", 13.5),
        after_sunset("night-GRA-18", "18 דקות אחרי השקיעה", 18.0),
        after_sunset("night-GRA-22.5", "22½ דקות אחרי השקיעה", 22.5),
        after_sunset("night-GRA-24", "24 דקות אחרי השקיעה (סידור אדה״ז)", 24.0),
    ];
    let night_order: &[usize] = match ordering {
        Ordering::Chabad => &[3, 0, 1, 2],
        Ordering::Sephardi | Ordering::Ashkenazi => &[0, 1, 2, 3],
    };

    vec![
        MarkerDefinition::new(
            "tosefetShabbat",
            "תוספת שבת/יו״ט",
            None,
            vec![
                after_sunset("tosefet-18", "18 דקות לפני השקיעה", -18.0),
                after_sunset("tosefet-40", "40 דקות לפני השקיעה", -40.0),
            ],
        ),
        MarkerDefinition::new(
            "shekiya",
            "שקיעת החמה",
            None,
            vec![
                op(
                    "shekiya-sea",
                    "מישור בגובה פני הים",
                    OpinionRule::fixed(Anchor::SeaLevelSunset, 0.0),
                ),
                op(
                    "shekiya-visible",
                    "שקיעה נראית לפי גובה המקום",
                    OpinionRule::fixed(Anchor::Sunset, 0.0),
                ),
            ],
        ),
        MarkerDefinition::new(
            "night-GRA-3-4-mil",
            "לילה לגר״א - ג׳ רבעי מיל",
            None,
            ordered(&night_pool, night_order),
        ),
        MarkerDefinition::new(
            "taaniyot-end",
            "לילה - גמר תעניות דרבנן",
            None,
            vec![after_sunset(
                "taanit-tokchinski",
                "ר׳ טוקצ׳ינסקי – 27 דקות אחרי השקיעה",
                27.0,
            )],
        ),
        MarkerDefinition::new(
            "tzeit-3-stars",
            "צאת ג׳ כוכבים",
            None,
            vec![
                after_sunset("tzeit-34", "34 דקות אחרי השקיעה", 34.0),
                after_sunset("tzeit-36", "36 דקות אחרי השקיעה", 36.0),
                after_sunset(
                    "tzeit-40",
                    "40 דקות אחרי השקיעה (מוצאי שבת ויו״ט / חזון איש)",
                    40.0,
                ),
                op(
                    "tzeit-8.5",
                    "8.5° מתחת לאופק",
                    OpinionRule::evening_degrees(8.5),
                ),
            ],
        ),
        MarkerDefinition::new(
            "night-RabbeinuTam",
            "לילה לרבינו תם - ד׳ מילין",
            None,
            vec![
                after_sunset("rt-72-fixed", "72 דקות שוות אחר השקיעה", 72.0),
                op(
                    "rt-72-fixed-sea",
                    "72 דקות שוות אחר השקיעה במישור",
                    OpinionRule::fixed(Anchor::SeaLevelSunset, 72.0),
                ),
                op(
                    "rt-72-zmaniyot",
                    "72 דקות בזמניות אחר השקיעה",
                    OpinionRule::hours(DaySpan::SunriseToSunset, 13.2),
                ),
            ],
        ),
        MarkerDefinition::new(
            "chatzotLayla",
            "חצות הלילה",
            None,
            vec![
                op(
                    "chatzot-layla",
                    "אמצע הלילה ההלכתי",
                    OpinionRule::fixed(Anchor::Chatzot, 720.0),
                ),
                op(
                    "chatzot-layla-night",
                    "אמצע הזמן בין השקיעה לנץ",
                    OpinionRule::hours(DaySpan::SunsetToNextSunrise, 6.0),
                ),
            ],
        ),
    ]
}

/// All markers in display order, with opinions ordered for `profile`.
pub fn catalog(profile: Profile) -> Vec<MarkerDefinition> {
    let ordering = profile.ordering();
    let mut markers = vec![alos(ordering), tzitzit_tefillin(ordering), netz()];
    markers.extend(morning_prayer());
    markers.extend(afternoon());
    markers.extend(evening(ordering));
    markers
}

/// Marker ids in display order.
pub fn marker_ids() -> Vec<String> {
    catalog(Profile::Sephardi).into_iter().map(|m| m.id).collect()
}
