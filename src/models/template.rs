//! Template identifiers and card corner styles

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Named visual presets for the card surface
///
/// Crosses the JS boundary as its numeric discriminant.
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum TemplateId {
    #[default]
    Classic = 0,
    Modern = 1,
    Minimal = 2,
    Elegant = 3,
    Bold = 4,
    Corporate = 5,
    Creative = 6,
    Gradient = 7,
    Dark = 8,
    Vintage = 9,
    Nature = 10,
    Ocean = 11,
    Sunset = 12,
    Luxury = 13,
    Tech = 14,
    Pastel = 15,
    Monochrome = 16,
    Neon = 17,
}

impl TemplateId {
    /// Every template, in picker order
    pub const ALL: [TemplateId; 18] = [
        TemplateId::Classic,
        TemplateId::Modern,
        TemplateId::Minimal,
        TemplateId::Elegant,
        TemplateId::Bold,
        TemplateId::Corporate,
        TemplateId::Creative,
        TemplateId::Gradient,
        TemplateId::Dark,
        TemplateId::Vintage,
        TemplateId::Nature,
        TemplateId::Ocean,
        TemplateId::Sunset,
        TemplateId::Luxury,
        TemplateId::Tech,
        TemplateId::Pastel,
        TemplateId::Monochrome,
        TemplateId::Neon,
    ];

    /// Convert a wire value to a template, if it names one
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Human-readable name shown under the picker thumbnail
    pub fn label(self) -> &'static str {
        match self {
            TemplateId::Classic => "Classic",
            TemplateId::Modern => "Modern",
            TemplateId::Minimal => "Minimal",
            TemplateId::Elegant => "Elegant",
            TemplateId::Bold => "Bold",
            TemplateId::Corporate => "Corporate",
            TemplateId::Creative => "Creative",
            TemplateId::Gradient => "Gradient",
            TemplateId::Dark => "Dark",
            TemplateId::Vintage => "Vintage",
            TemplateId::Nature => "Nature",
            TemplateId::Ocean => "Ocean",
            TemplateId::Sunset => "Sunset",
            TemplateId::Luxury => "Luxury",
            TemplateId::Tech => "Tech",
            TemplateId::Pastel => "Pastel",
            TemplateId::Monochrome => "Monochrome",
            TemplateId::Neon => "Neon",
        }
    }
}

/// How the card's corners are drawn
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CornerStyle {
    /// Use the template's own radius
    #[default]
    Normal,
    Rounded,
    Sharp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8_matches_discriminant() {
        for template in TemplateId::ALL {
            assert_eq!(TemplateId::from_u8(template as u8), Some(template));
        }
        assert_eq!(TemplateId::from_u8(18), None);
    }

    #[test]
    fn test_template_serializes_as_number() {
        let json = serde_json::to_string(&TemplateId::Ocean).unwrap();
        assert_eq!(json, "11");
        let back: TemplateId = serde_json::from_str("4").unwrap();
        assert_eq!(back, TemplateId::Bold);
    }
}
