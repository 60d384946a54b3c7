//! Typed presentation attributes for card elements
//!
//! Every attribute is optional; the element renderer only consults the ones
//! that make sense for the element's kind (font attributes for text, fill for
//! shapes, and so on). The same record doubles as a patch when merged.

use serde::{Deserialize, Serialize};

/// Font weight toggle exposed by the bold button
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn toggled(self) -> Self {
        match self {
            FontWeight::Normal => FontWeight::Bold,
            FontWeight::Bold => FontWeight::Normal,
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Font style toggle exposed by the italic button
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn toggled(self) -> Self {
        match self {
            FontStyle::Normal => FontStyle::Italic,
            FontStyle::Italic => FontStyle::Normal,
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

/// Text decoration toggle exposed by the underline button
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

impl TextDecoration {
    pub fn toggled(self) -> Self {
        match self {
            TextDecoration::None => TextDecoration::Underline,
            TextDecoration::Underline => TextDecoration::None,
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            TextDecoration::None => "none",
            TextDecoration::Underline => "underline",
        }
    }
}

/// Line style of a border
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
}

impl BorderStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Double => "double",
        }
    }
}

/// A border around an element or the card surface
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BorderSpec {
    /// Stroke width in pixels
    pub width: f64,

    #[serde(default)]
    pub style: BorderStyle,

    /// CSS color string (e.g. "#d4af37")
    pub color: String,
}

impl BorderSpec {
    pub fn new(width: f64, style: BorderStyle, color: &str) -> Self {
        Self {
            width,
            style,
            color: color.to_string(),
        }
    }

    /// CSS shorthand, e.g. `2px solid #d4af37`
    pub fn to_css(&self) -> String {
        format!("{}px {} {}", fmt_px(self.width), self.style.as_css(), self.color)
    }

    /// Same border with the stroke width multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            style: self.style,
            color: self.color.clone(),
        }
    }
}

/// Presentation attributes of a single element
///
/// Used both as the stored style and as a partial update: merging copies over
/// every field that is `Some` in the patch and leaves the rest alone.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Font size in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderSpec>,

    /// Corner radius in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
}

impl ElementStyle {
    /// Copy every attribute set in `patch` onto this style
    pub fn merge(&mut self, patch: &ElementStyle) {
        if let Some(color) = &patch.color {
            self.color = Some(color.clone());
        }
        if let Some(size) = patch.font_size {
            self.font_size = Some(size);
        }
        if let Some(weight) = patch.font_weight {
            self.font_weight = Some(weight);
        }
        if let Some(style) = patch.font_style {
            self.font_style = Some(style);
        }
        if let Some(decoration) = patch.text_decoration {
            self.text_decoration = Some(decoration);
        }
        if let Some(background) = &patch.background_color {
            self.background_color = Some(background.clone());
        }
        if let Some(border) = &patch.border {
            self.border = Some(border.clone());
        }
        if let Some(radius) = patch.border_radius {
            self.border_radius = Some(radius);
        }
    }

    /// Builder-style merge, handy for constructing defaults
    pub fn merged(mut self, patch: &ElementStyle) -> Self {
        self.merge(patch);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == ElementStyle::default()
    }
}

/// Format a pixel value without a trailing `.0` for whole numbers
pub(crate) fn fmt_px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_only_overwrites_set_fields() {
        let mut style = ElementStyle {
            color: Some("#000000".to_string()),
            font_size: Some(14.0),
            ..Default::default()
        };

        style.merge(&ElementStyle {
            font_weight: Some(FontWeight::Bold),
            ..Default::default()
        });

        assert_eq!(style.color.as_deref(), Some("#000000"));
        assert_eq!(style.font_size, Some(14.0));
        assert_eq!(style.font_weight, Some(FontWeight::Bold));
    }

    #[test]
    fn test_toggles_are_involutions() {
        assert_eq!(FontWeight::Normal.toggled().toggled(), FontWeight::Normal);
        assert_eq!(FontStyle::Italic.toggled(), FontStyle::Normal);
        assert_eq!(TextDecoration::None.toggled(), TextDecoration::Underline);
    }

    #[test]
    fn test_border_css() {
        let border = BorderSpec::new(1.5, BorderStyle::Dashed, "#333");
        assert_eq!(border.to_css(), "1.5px dashed #333");
        assert_eq!(border.scaled(2.0).to_css(), "3px dashed #333");
    }

    #[test]
    fn test_fmt_px() {
        assert_eq!(fmt_px(12.0), "12");
        assert_eq!(fmt_px(0.25), "0.25");
        assert_eq!(fmt_px(3.5), "3.5");
    }
}
