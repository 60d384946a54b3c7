//! Template style lookup
//!
//! Maps each `TemplateId` to a declarative `StyleDescriptor`: background,
//! border, shadow, corner radius, font family and the text palette used by
//! the named-element cascade. The table is built once and never changes.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::style::fmt_px;
use crate::models::{BorderSpec, BorderStyle, CornerStyle, ElementRole, TemplateId};

/// Corner radius used when the user picks "rounded"
pub const ROUNDED_CORNER_RADIUS: f64 = 16.0;

/// One color stop of a linear gradient
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GradientStop {
    pub color: String,

    /// Position along the gradient line, 0-100
    pub offset: f64,
}

/// Card surface fill
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Background {
    Solid { color: String },
    LinearGradient { angle: f64, stops: Vec<GradientStop> },
}

impl Background {
    /// CSS `background` value
    pub fn to_css(&self) -> String {
        match self {
            Background::Solid { color } => color.clone(),
            Background::LinearGradient { angle, stops } => {
                let stops: Vec<String> = stops
                    .iter()
                    .map(|s| format!("{} {}%", s.color, fmt_px(s.offset)))
                    .collect();
                format!("linear-gradient({}deg, {})", fmt_px(*angle), stops.join(", "))
            }
        }
    }

    /// A single representative color (first stop for gradients)
    pub fn base_color(&self) -> &str {
        match self {
            Background::Solid { color } => color,
            Background::LinearGradient { stops, .. } => {
                stops.first().map(|s| s.color.as_str()).unwrap_or("#ffffff")
            }
        }
    }
}

/// Drop shadow under the card surface
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShadowSpec {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
}

impl ShadowSpec {
    /// CSS `box-shadow` value
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            fmt_px(self.offset_x),
            fmt_px(self.offset_y),
            fmt_px(self.blur),
            fmt_px(self.spread),
            self.color
        )
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            offset_x: self.offset_x * factor,
            offset_y: self.offset_y * factor,
            blur: self.blur * factor,
            spread: self.spread * factor,
            color: self.color.clone(),
        }
    }
}

/// Text colors a template assigns to the named card slots
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TemplatePalette {
    pub name: String,
    pub title: String,
    pub company: String,
    pub contact: String,
}

impl TemplatePalette {
    pub fn color_for(&self, role: ElementRole) -> &str {
        match role {
            ElementRole::Name => &self.name,
            ElementRole::Title => &self.title,
            ElementRole::Company => &self.company,
            ElementRole::Contact => &self.contact,
        }
    }
}

/// Everything needed to draw a card surface in a given template
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub background: Background,
    pub border: Option<BorderSpec>,
    pub shadow: Option<ShadowSpec>,

    /// Corner radius in pixels (before any corner style override)
    pub border_radius: f64,

    /// CSS font-family stack for card text
    pub font_family: String,

    pub palette: TemplatePalette,
}

impl StyleDescriptor {
    /// Reduced-scale copy for template picker thumbnails
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            background: self.background.clone(),
            border: self.border.as_ref().map(|b| b.scaled(factor)),
            shadow: self.shadow.as_ref().map(|s| s.scaled(factor)),
            border_radius: self.border_radius * factor,
            font_family: self.font_family.clone(),
            palette: self.palette.clone(),
        }
    }

    pub fn css_background(&self) -> String {
        self.background.to_css()
    }

    pub fn css_border(&self) -> Option<String> {
        self.border.as_ref().map(BorderSpec::to_css)
    }

    pub fn css_box_shadow(&self) -> Option<String> {
        self.shadow.as_ref().map(ShadowSpec::to_css)
    }
}

/// Picker entry: template id, its label and a thumbnail-scale descriptor
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateThumbnail {
    pub id: TemplateId,
    pub label: String,
    pub style: StyleDescriptor,
}

static TEMPLATE_TABLE: Lazy<Vec<StyleDescriptor>> =
    Lazy::new(|| TemplateId::ALL.iter().map(|&id| build_descriptor(id)).collect());

/// Look up the style descriptor of a template
pub fn resolve(template: TemplateId) -> &'static StyleDescriptor {
    &TEMPLATE_TABLE[template as usize]
}

/// Effective card corner radius once the user's corner style is applied
pub fn surface_radius(descriptor: &StyleDescriptor, corner_style: CornerStyle) -> f64 {
    match corner_style {
        CornerStyle::Normal => descriptor.border_radius,
        CornerStyle::Rounded => ROUNDED_CORNER_RADIUS,
        CornerStyle::Sharp => 0.0,
    }
}

/// Every template as a picker thumbnail, in picker order
pub fn template_gallery(scale: f64) -> Vec<TemplateThumbnail> {
    TemplateId::ALL
        .iter()
        .map(|&id| TemplateThumbnail {
            id,
            label: id.label().to_string(),
            style: resolve(id).scaled(scale),
        })
        .collect()
}

// ============================================================================
// Template table
// ============================================================================

fn solid(color: &str) -> Background {
    Background::Solid {
        color: color.to_string(),
    }
}

fn gradient(angle: f64, stops: &[(&str, f64)]) -> Background {
    Background::LinearGradient {
        angle,
        stops: stops
            .iter()
            .map(|&(color, offset)| GradientStop {
                color: color.to_string(),
                offset,
            })
            .collect(),
    }
}

fn shadow(offset_x: f64, offset_y: f64, blur: f64, spread: f64, color: &str) -> Option<ShadowSpec> {
    Some(ShadowSpec {
        offset_x,
        offset_y,
        blur,
        spread,
        color: color.to_string(),
    })
}

fn border(width: f64, style: BorderStyle, color: &str) -> Option<BorderSpec> {
    Some(BorderSpec::new(width, style, color))
}

fn palette(name: &str, title: &str, company: &str, contact: &str) -> TemplatePalette {
    TemplatePalette {
        name: name.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        contact: contact.to_string(),
    }
}

fn build_descriptor(template: TemplateId) -> StyleDescriptor {
    let (background, border, shadow, border_radius, font_family, palette) = match template {
        TemplateId::Classic => (
            solid("#ffffff"),
            border(1.0, BorderStyle::Solid, "#e5e7eb"),
            shadow(0.0, 4.0, 6.0, -1.0, "rgba(0, 0, 0, 0.1)"),
            8.0,
            "Georgia, serif",
            palette("#111827", "#4b5563", "#6b7280", "#374151"),
        ),
        TemplateId::Modern => (
            gradient(135.0, &[("#667eea", 0.0), ("#764ba2", 100.0)]),
            None,
            shadow(0.0, 10.0, 25.0, -5.0, "rgba(102, 126, 234, 0.4)"),
            12.0,
            "Inter, sans-serif",
            palette("#ffffff", "#e0e7ff", "#c7d2fe", "#f5f3ff"),
        ),
        TemplateId::Minimal => (
            solid("#fafafa"),
            None,
            None,
            0.0,
            "'Helvetica Neue', Arial, sans-serif",
            palette("#000000", "#525252", "#737373", "#404040"),
        ),
        TemplateId::Elegant => (
            gradient(180.0, &[("#1a1a2e", 0.0), ("#16213e", 100.0)]),
            border(2.0, BorderStyle::Solid, "#d4af37"),
            shadow(0.0, 8.0, 20.0, 0.0, "rgba(0, 0, 0, 0.35)"),
            6.0,
            "'Playfair Display', serif",
            palette("#d4af37", "#f5f5f5", "#c9b37e", "#e5e5e5"),
        ),
        TemplateId::Bold => (
            solid("#ef4444"),
            border(4.0, BorderStyle::Solid, "#111827"),
            shadow(6.0, 6.0, 0.0, 0.0, "#111827"),
            0.0,
            "Impact, sans-serif",
            palette("#ffffff", "#fef2f2", "#111827", "#fee2e2"),
        ),
        TemplateId::Corporate => (
            gradient(90.0, &[("#1e3a8a", 0.0), ("#1e3a8a", 30.0), ("#ffffff", 30.0), ("#ffffff", 100.0)]),
            border(1.0, BorderStyle::Solid, "#cbd5e1"),
            shadow(0.0, 2.0, 4.0, 0.0, "rgba(0, 0, 0, 0.08)"),
            4.0,
            "Arial, sans-serif",
            palette("#1e3a8a", "#334155", "#64748b", "#475569"),
        ),
        TemplateId::Creative => (
            gradient(45.0, &[("#f093fb", 0.0), ("#f5576c", 100.0)]),
            None,
            shadow(0.0, 12.0, 30.0, -8.0, "rgba(245, 87, 108, 0.45)"),
            20.0,
            "Poppins, sans-serif",
            palette("#ffffff", "#fff1f2", "#ffe4e6", "#fdf2f8"),
        ),
        TemplateId::Gradient => (
            gradient(135.0, &[("#43e97b", 0.0), ("#38f9d7", 100.0)]),
            None,
            shadow(0.0, 8.0, 24.0, -6.0, "rgba(56, 249, 215, 0.4)"),
            16.0,
            "Montserrat, sans-serif",
            palette("#064e3b", "#065f46", "#047857", "#064e3b"),
        ),
        TemplateId::Dark => (
            solid("#111827"),
            border(1.0, BorderStyle::Solid, "#374151"),
            shadow(0.0, 10.0, 30.0, 0.0, "rgba(0, 0, 0, 0.6)"),
            10.0,
            "Roboto, sans-serif",
            palette("#f9fafb", "#9ca3af", "#6b7280", "#d1d5db"),
        ),
        TemplateId::Vintage => (
            solid("#f4e4c1"),
            border(3.0, BorderStyle::Double, "#8b5a2b"),
            shadow(0.0, 3.0, 8.0, 0.0, "rgba(139, 90, 43, 0.3)"),
            2.0,
            "'Courier New', monospace",
            palette("#5c3a1e", "#8b5a2b", "#a0785a", "#6b4423"),
        ),
        TemplateId::Nature => (
            gradient(160.0, &[("#d4fc79", 0.0), ("#96e6a1", 100.0)]),
            border(1.0, BorderStyle::Solid, "#65a30d"),
            shadow(0.0, 6.0, 16.0, -4.0, "rgba(101, 163, 13, 0.35)"),
            14.0,
            "Nunito, sans-serif",
            palette("#14532d", "#166534", "#3f6212", "#365314"),
        ),
        TemplateId::Ocean => (
            gradient(180.0, &[("#2193b0", 0.0), ("#6dd5ed", 100.0)]),
            None,
            shadow(0.0, 8.0, 20.0, -4.0, "rgba(33, 147, 176, 0.45)"),
            12.0,
            "'Open Sans', sans-serif",
            palette("#ffffff", "#e0f2fe", "#bae6fd", "#f0f9ff"),
        ),
        TemplateId::Sunset => (
            gradient(120.0, &[("#ff7e5f", 0.0), ("#feb47b", 100.0)]),
            None,
            shadow(0.0, 8.0, 22.0, -6.0, "rgba(255, 126, 95, 0.45)"),
            12.0,
            "Lato, sans-serif",
            palette("#7c2d12", "#9a3412", "#c2410c", "#431407"),
        ),
        TemplateId::Luxury => (
            gradient(135.0, &[("#0f0c29", 0.0), ("#302b63", 50.0), ("#24243e", 100.0)]),
            border(1.0, BorderStyle::Solid, "#b8860b"),
            shadow(0.0, 12.0, 32.0, 0.0, "rgba(15, 12, 41, 0.6)"),
            4.0,
            "'Cormorant Garamond', serif",
            palette("#f0c14b", "#e5e4e2", "#b8860b", "#d4d4d8"),
        ),
        TemplateId::Tech => (
            solid("#0a192f"),
            border(1.0, BorderStyle::Dashed, "#64ffda"),
            shadow(0.0, 0.0, 18.0, 0.0, "rgba(100, 255, 218, 0.25)"),
            6.0,
            "'Fira Code', monospace",
            palette("#64ffda", "#ccd6f6", "#8892b0", "#a8b2d1"),
        ),
        TemplateId::Pastel => (
            gradient(135.0, &[("#fbc2eb", 0.0), ("#a6c1ee", 100.0)]),
            None,
            shadow(0.0, 6.0, 18.0, -6.0, "rgba(166, 193, 238, 0.5)"),
            18.0,
            "Quicksand, sans-serif",
            palette("#4c1d95", "#6d28d9", "#7c3aed", "#5b21b6"),
        ),
        TemplateId::Monochrome => (
            solid("#e5e5e5"),
            border(2.0, BorderStyle::Solid, "#171717"),
            None,
            0.0,
            "Helvetica, sans-serif",
            palette("#171717", "#404040", "#525252", "#262626"),
        ),
        TemplateId::Neon => (
            solid("#0d0221"),
            border(2.0, BorderStyle::Solid, "#ff00ff"),
            shadow(0.0, 0.0, 20.0, 2.0, "rgba(255, 0, 255, 0.6)"),
            8.0,
            "Orbitron, sans-serif",
            palette("#00ffff", "#ff00ff", "#f9f871", "#e0e0ff"),
        ),
    };

    StyleDescriptor {
        background,
        border,
        shadow,
        border_radius,
        font_family: font_family.to_string(),
        palette,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_is_distinct() {
        for (i, a) in TemplateId::ALL.iter().enumerate() {
            for b in &TemplateId::ALL[i + 1..] {
                assert_ne!(resolve(*a), resolve(*b), "{:?} and {:?} resolve identically", a, b);
            }
        }
    }

    #[test]
    fn test_resolve_is_stable() {
        for template in TemplateId::ALL {
            assert_eq!(resolve(template), &build_descriptor(template));
        }
    }

    #[test]
    fn test_gradient_css() {
        let modern = resolve(TemplateId::Modern);
        assert_eq!(
            modern.css_background(),
            "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"
        );
        assert_eq!(modern.css_border(), None);
        assert_eq!(
            modern.css_box_shadow().as_deref(),
            Some("0px 10px 25px -5px rgba(102, 126, 234, 0.4)")
        );
    }

    #[test]
    fn test_thumbnail_scales_geometry_only() {
        let classic = resolve(TemplateId::Classic);
        let thumb = classic.scaled(0.25);
        assert_eq!(thumb.border_radius, 2.0);
        assert_eq!(thumb.border.as_ref().map(|b| b.width), Some(0.25));
        assert_eq!(thumb.background, classic.background);
        assert_eq!(thumb.palette, classic.palette);
    }

    #[test]
    fn test_surface_radius_follows_corner_style() {
        let classic = resolve(TemplateId::Classic);
        assert_eq!(surface_radius(classic, CornerStyle::Normal), 8.0);
        assert_eq!(surface_radius(classic, CornerStyle::Rounded), ROUNDED_CORNER_RADIUS);
        assert_eq!(surface_radius(classic, CornerStyle::Sharp), 0.0);
    }

    #[test]
    fn test_gallery_lists_all_templates_in_order() {
        let gallery = template_gallery(0.5);
        assert_eq!(gallery.len(), 18);
        assert_eq!(gallery[0].id, TemplateId::Classic);
        assert_eq!(gallery[17].label, "Neon");
    }
}
