//! Wardrobe data model — garment descriptors and the temperature-range label.

use serde::{Deserialize, Serialize};

/// Kind of garment. Closed set; anything else is rejected at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GarmentType {
    Pants,
    Skirt,
    Shirt,
    Sweater,
}

impl GarmentType {
    pub const ALL: [GarmentType; 4] = [
        GarmentType::Pants,
        GarmentType::Skirt,
        GarmentType::Shirt,
        GarmentType::Sweater,
    ];
}

/// How dressy a garment is. Display data only, never consulted by matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Formality {
    Formal,
    SemiFormal,
    Casual,
}

impl Formality {
    pub const ALL: [Formality; 3] = [Formality::Formal, Formality::SemiFormal, Formality::Casual];
}

/// Label for the open-ended band.
pub const ABOVE_THIRTY_LABEL: &str = "30+";
const ABOVE_THIRTY_FLOOR: f64 = 30.0;

/// Temperature-range label as submitted by the client, e.g. `"10-20"` or `"30+"`.
///
/// Kept verbatim. Labels that do not parse make the item unmatchable instead of
/// failing the request, so construction never validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemperatureRange(String);

impl TemperatureRange {
    /// Ranges offered by the wardrobe form.
    pub const PRESETS: [&'static str; 4] = ["0-10", "10-20", "20-30", ABOVE_THIRTY_LABEL];

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Interprets the label. `None` means the label is malformed.
    pub fn band(&self) -> Option<TemperatureBand> {
        if self.0 == ABOVE_THIRTY_LABEL {
            return Some(TemperatureBand::AboveThirty);
        }

        // Negative bounds are not representable: every `-` is a separator.
        let mut parts = self.0.split('-');
        let low = parse_bound(parts.next()?)?;
        let high = parse_bound(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }

        Some(TemperatureBand::Between { low, high })
    }
}

impl From<&str> for TemperatureRange {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parsed form of a [`TemperatureRange`] label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemperatureBand {
    /// Open interval `(low, high)`. Both bounds exclusive.
    Between { low: f64, high: f64 },
    /// Strictly above 30 °C.
    AboveThirty,
}

impl TemperatureBand {
    pub fn contains(&self, temperature: f64) -> bool {
        match *self {
            TemperatureBand::Between { low, high } => low < temperature && temperature < high,
            TemperatureBand::AboveThirty => temperature > ABOVE_THIRTY_FLOOR,
        }
    }
}

/// One garment in a wardrobe. Equality is structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeItem {
    #[serde(rename = "type")]
    pub garment: GarmentType,
    pub temperature_range: TemperatureRange,
    pub formality: Formality,
}

impl WardrobeItem {
    pub fn new(
        garment: GarmentType,
        temperature_range: impl Into<TemperatureRange>,
        formality: Formality,
    ) -> Self {
        Self {
            garment,
            temperature_range: temperature_range.into(),
            formality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_closed_interval() {
        let band = TemperatureRange::from("10-20").band();
        assert_eq!(band, Some(TemperatureBand::Between { low: 10.0, high: 20.0 }));
    }

    #[test]
    fn test_band_above_thirty_sentinel() {
        assert_eq!(
            TemperatureRange::from("30+").band(),
            Some(TemperatureBand::AboveThirty)
        );
    }

    #[test]
    fn test_band_decimal_bounds() {
        let band = TemperatureRange::from("2.5-7.5").band();
        assert_eq!(band, Some(TemperatureBand::Between { low: 2.5, high: 7.5 }));
    }

    #[test]
    fn test_band_malformed_labels_are_none() {
        for label in ["cold", "", "10-", "-10", "10", "10-20-30", "-5-5", "NaN-3", "0-inf", "40+"] {
            assert_eq!(
                TemperatureRange::from(label).band(),
                None,
                "label {label:?} should not parse"
            );
        }
    }

    #[test]
    fn test_between_bounds_are_exclusive() {
        let band = TemperatureBand::Between { low: 10.0, high: 20.0 };
        assert!(band.contains(15.0));
        assert!(!band.contains(10.0));
        assert!(!band.contains(20.0));
        assert!(!band.contains(f64::NAN));
    }

    #[test]
    fn test_above_thirty_excludes_thirty() {
        assert!(TemperatureBand::AboveThirty.contains(30.5));
        assert!(!TemperatureBand::AboveThirty.contains(30.0));
    }

    #[test]
    fn test_item_wire_format() {
        let item = WardrobeItem::new(GarmentType::Sweater, "0-10", Formality::SemiFormal);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "sweater",
                "temperatureRange": "0-10",
                "formality": "semi-formal"
            })
        );
    }

    #[test]
    fn test_unknown_garment_type_rejected() {
        let json = r#"{"type": "hat", "temperatureRange": "0-10", "formality": "casual"}"#;
        assert!(serde_json::from_str::<WardrobeItem>(json).is_err());
    }

    #[test]
    fn test_malformed_range_still_deserializes() {
        let json = r#"{"type": "pants", "temperatureRange": "cold", "formality": "casual"}"#;
        let item: WardrobeItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.temperature_range, TemperatureRange::from("cold"));
        assert!(item.temperature_range.band().is_none());
    }
}
