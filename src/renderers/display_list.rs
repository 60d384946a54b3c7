//! Display List for card rendering
//!
//! This module defines the output structure returned to JavaScript. The
//! DisplayList contains the resolved card surface and every visible element
//! with final positions and styles, so the page renders without doing any
//! style resolution of its own.

use serde::{Deserialize, Serialize};

use super::element::{ElementRenderer, RenderElement};
use crate::config::DesignerConfig;
use crate::models::{CardDocument, CardSide, CornerStyle, ElementId, GlobalStyle, TemplateId};
use crate::templates::{self, Background};

/// Top-level display list for the side being edited
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayList {
    pub side: CardSide,

    pub surface: RenderSurface,

    /// Visible elements in paint order
    pub elements: Vec<RenderElement>,

    pub selected: Option<ElementId>,
}

/// The card surface with its template resolved to CSS values
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderSurface {
    pub width: f64,
    pub height: f64,
    pub template_id: TemplateId,
    pub corner_style: CornerStyle,

    /// CSS `background` value
    pub background: String,

    /// CSS `border` shorthand
    pub border: Option<String>,

    /// CSS `box-shadow` value
    pub box_shadow: Option<String>,

    pub border_radius: f64,
    pub font_family: String,
}

impl RenderSurface {
    /// Resolve the surface for the document's global style
    ///
    /// Solid templates paint with the user's background color (a template
    /// change resets it to the template color); gradients paint as-is.
    pub fn resolve(global: &GlobalStyle, config: &DesignerConfig) -> Self {
        let descriptor = templates::resolve(global.template_id);
        let background = match &descriptor.background {
            Background::Solid { .. } => global.background_color.clone(),
            gradient @ Background::LinearGradient { .. } => gradient.to_css(),
        };

        Self {
            width: config.card_width,
            height: config.card_height,
            template_id: global.template_id,
            corner_style: global.corner_style,
            background,
            border: descriptor.css_border(),
            box_shadow: descriptor.css_box_shadow(),
            border_radius: templates::surface_radius(descriptor, global.corner_style),
            font_family: descriptor.font_family.clone(),
        }
    }
}

/// Build the display list for the document's current side
pub fn build_display_list(
    document: &CardDocument,
    selected: Option<ElementId>,
    config: &DesignerConfig,
) -> DisplayList {
    let renderer = ElementRenderer::new(&document.global_style, config);
    let elements = document
        .visible_elements()
        .map(|e| renderer.render(e, selected == Some(e.id)))
        .collect();

    DisplayList {
        side: document.current_side,
        surface: RenderSurface::resolve(&document.global_style, config),
        elements,
        selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_template_surface() {
        let global = GlobalStyle {
            template_id: TemplateId::Ocean,
            corner_style: CornerStyle::Sharp,
            ..Default::default()
        };
        let surface = RenderSurface::resolve(&global, &DesignerConfig::default());

        assert_eq!(surface.background, "linear-gradient(180deg, #2193b0 0%, #6dd5ed 100%)");
        assert_eq!(surface.border_radius, 0.0);
        assert_eq!(surface.width, 384.0);
    }

    #[test]
    fn test_solid_template_uses_user_background() {
        let global = GlobalStyle {
            background_color: "#fef3c7".to_string(),
            ..Default::default()
        };
        let surface = RenderSurface::resolve(&global, &DesignerConfig::default());
        assert_eq!(surface.background, "#fef3c7");
        assert_eq!(surface.font_family, "Georgia, serif");
    }
}
