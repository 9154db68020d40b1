use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};

/// Resolved pixel dimensions for one size preset: orbital radius of the
/// items, item and center circle diameters, and the square side of the
/// whole dial surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    pub radius: f64,
    pub item_diameter: f64,
    pub center_diameter: f64,
    pub side: f64,
}

impl SizeMetrics {
    pub fn item_radius(&self) -> f64 {
        self.item_diameter / 2.0
    }

    pub fn center_radius(&self) -> f64 {
        self.center_diameter / 2.0
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    #[strum(serialize = "compact", serialize = "sm")]
    Compact,
    #[default]
    #[strum(serialize = "medium", serialize = "md")]
    Medium,
    #[strum(serialize = "large", serialize = "lg")]
    Large,
}

impl SizePreset {
    /// Fixed preset table, resolved once at construction time. The radius is
    /// deliberately independent of the item count: items crowd or spread as
    /// the count changes.
    pub const fn metrics(self) -> SizeMetrics {
        match self {
            Self::Compact => SizeMetrics {
                radius: 100.0,
                item_diameter: 48.0,
                center_diameter: 96.0,
                side: 256.0,
            },
            Self::Medium => SizeMetrics {
                radius: 120.0,
                item_diameter: 56.0,
                center_diameter: 128.0,
                side: 320.0,
            },
            Self::Large => SizeMetrics {
                radius: 140.0,
                item_diameter: 64.0,
                center_diameter: 160.0,
                side: 384.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_deserialization_accepts_aliases() {
        let cases = vec![
            ("\"compact\"", SizePreset::Compact),
            ("\"Compact\"", SizePreset::Compact),
            ("\"sm\"", SizePreset::Compact),
            ("\"medium\"", SizePreset::Medium),
            ("\"MD\"", SizePreset::Medium),
            ("\"large\"", SizePreset::Large),
            ("\"lg\"", SizePreset::Large),
        ];

        for (json, expected) in cases {
            let deserialized: SizePreset = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(serde_json::from_str::<SizePreset>("\"huge\"").is_err());
    }

    #[test]
    fn metrics_grow_with_preset() {
        let compact = SizePreset::Compact.metrics();
        let medium = SizePreset::Medium.metrics();
        let large = SizePreset::Large.metrics();

        assert_eq!(compact.radius, 100.0);
        assert_eq!(medium.radius, 120.0);
        assert_eq!(large.radius, 140.0);
        assert!(compact.side < medium.side && medium.side < large.side);
        assert_eq!(medium.item_radius(), 28.0);
        assert_eq!(medium.center_radius(), 64.0);
    }

    #[test]
    fn default_preset_is_medium() {
        assert_eq!(SizePreset::default(), SizePreset::Medium);
    }
}
