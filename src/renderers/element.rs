//! Element Renderer
//!
//! Turns a `CardElement` into a `RenderElement`: final box, CSS classes and a
//! kind-specific payload with every style default already resolved, so the
//! page only has to create DOM nodes.

use serde::{Deserialize, Serialize};

use super::qr::{qr_mosaic, QrMosaic};
use crate::config::DesignerConfig;
use crate::models::{
    CardElement, ElementId, ElementKind, FontStyle, FontWeight, GlobalStyle, TextDecoration,
    DEFAULT_FONT_SIZE,
};

/// Fill used for QR light cells when the element sets no background
pub const QR_LIGHT_COLOR: &str = "#ffffff";

/// Geometric primitive drawn by a shape element
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl ShapeKind {
    /// Shape named by an element's content; anything unknown is a rectangle
    pub fn from_content(content: &str) -> Self {
        if content.trim().eq_ignore_ascii_case("circle") {
            ShapeKind::Circle
        } else {
            ShapeKind::Rectangle
        }
    }
}

/// Kind-specific render payload
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderKind {
    #[serde(rename_all = "camelCase")]
    Text {
        content: String,
        color: String,
        font_size: f64,
        font_weight: FontWeight,
        font_style: FontStyle,
        text_decoration: TextDecoration,
        background_color: Option<String>,
        border: Option<String>,
        border_radius: f64,
    },
    #[serde(rename_all = "camelCase")]
    Qr {
        mosaic: QrMosaic,
        dark_color: String,
        light_color: String,
    },
    #[serde(rename_all = "camelCase")]
    Logo {
        /// Image source when the content is a URL or data URI
        src: Option<String>,
        /// Text shown when there is no image
        placeholder: String,
        color: String,
        font_size: f64,
    },
    #[serde(rename_all = "camelCase")]
    Icon {
        glyph: String,
        color: String,
        font_size: f64,
    },
    #[serde(rename_all = "camelCase")]
    Shape {
        shape: ShapeKind,
        fill: String,
        border: Option<String>,
        border_radius: f64,
    },
}

/// A single element with all rendering information
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderElement {
    pub id: ElementId,

    /// Left edge relative to the card surface
    pub x: f64,

    /// Top edge relative to the card surface
    pub y: f64,

    pub width: f64,
    pub height: f64,

    /// Draw the editing ring and delete/done affordances
    pub selected: bool,

    /// CSS classes for the element's wrapper node
    pub classes: Vec<String>,

    pub kind: RenderKind,
}

/// Renders elements against the document's global style
pub struct ElementRenderer<'a> {
    global: &'a GlobalStyle,
    config: &'a DesignerConfig,
}

impl<'a> ElementRenderer<'a> {
    pub fn new(global: &'a GlobalStyle, config: &'a DesignerConfig) -> Self {
        Self { global, config }
    }

    /// Build the render payload for one element
    pub fn render(&self, element: &CardElement, selected: bool) -> RenderElement {
        let mut classes = vec![
            "card-element".to_string(),
            format!("kind-{}", kind_css(element.kind)),
        ];
        if selected {
            classes.push("selected".to_string());
        }

        RenderElement {
            id: element.id,
            x: element.position.x,
            y: element.position.y,
            width: element.size.width,
            height: element.size.height,
            selected,
            classes,
            kind: self.render_kind(element),
        }
    }

    fn render_kind(&self, element: &CardElement) -> RenderKind {
        let style = &element.style;
        let text_color = || style.color.clone().unwrap_or_else(|| self.global.text_color.clone());
        let accent_color = || style.color.clone().unwrap_or_else(|| self.global.accent_color.clone());

        match element.kind {
            ElementKind::Text => RenderKind::Text {
                content: element.content.clone(),
                color: text_color(),
                font_size: style.font_size.unwrap_or(DEFAULT_FONT_SIZE),
                font_weight: style.font_weight.unwrap_or_default(),
                font_style: style.font_style.unwrap_or_default(),
                text_decoration: style.text_decoration.unwrap_or_default(),
                background_color: style.background_color.clone(),
                border: style.border.as_ref().map(|b| b.to_css()),
                border_radius: style.border_radius.unwrap_or(0.0),
            },
            ElementKind::Qr => RenderKind::Qr {
                mosaic: qr_mosaic(element.id, self.config.qr_grid_size),
                dark_color: text_color(),
                light_color: style
                    .background_color
                    .clone()
                    .unwrap_or_else(|| QR_LIGHT_COLOR.to_string()),
            },
            ElementKind::Logo => {
                let src = looks_like_image_source(&element.content).then(|| element.content.clone());
                RenderKind::Logo {
                    placeholder: if src.is_some() {
                        String::new()
                    } else {
                        element.content.clone()
                    },
                    src,
                    color: text_color(),
                    font_size: style.font_size.unwrap_or(DEFAULT_FONT_SIZE),
                }
            }
            ElementKind::Icon => RenderKind::Icon {
                glyph: element.content.clone(),
                color: accent_color(),
                // Glyph fills most of the box unless a size is set
                font_size: style
                    .font_size
                    .unwrap_or_else(|| element.size.height.min(element.size.width) * 0.8),
            },
            ElementKind::Shape => RenderKind::Shape {
                shape: ShapeKind::from_content(&element.content),
                fill: style
                    .background_color
                    .clone()
                    .unwrap_or_else(|| self.global.accent_color.clone()),
                border: style.border.as_ref().map(|b| b.to_css()),
                border_radius: style.border_radius.unwrap_or(0.0),
            },
        }
    }
}

fn kind_css(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Text => "text",
        ElementKind::Qr => "qr",
        ElementKind::Logo => "logo",
        ElementKind::Icon => "icon",
        ElementKind::Shape => "shape",
    }
}

fn looks_like_image_source(content: &str) -> bool {
    let content = content.trim();
    content.starts_with("http://")
        || content.starts_with("https://")
        || content.starts_with("data:image/")
        || content.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardSide, ElementStyle, Position, Size};

    fn element(kind: ElementKind, content: &str) -> CardElement {
        CardElement {
            id: ElementId(3),
            kind,
            content: content.to_string(),
            position: Position::new(5.0, 6.0),
            size: Size::new(40.0, 20.0),
            style: ElementStyle::default(),
            side: CardSide::Front,
            role: None,
        }
    }

    #[test]
    fn test_text_falls_back_to_global_color() {
        let global = GlobalStyle::default();
        let config = DesignerConfig::default();
        let rendered = ElementRenderer::new(&global, &config).render(&element(ElementKind::Text, "Hi"), true);

        assert!(rendered.selected);
        assert!(rendered.classes.contains(&"selected".to_string()));
        match rendered.kind {
            RenderKind::Text { color, font_size, content, .. } => {
                assert_eq!(color, global.text_color);
                assert_eq!(font_size, DEFAULT_FONT_SIZE);
                assert_eq!(content, "Hi");
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_shape_kind_from_content() {
        assert_eq!(ShapeKind::from_content(" Circle "), ShapeKind::Circle);
        assert_eq!(ShapeKind::from_content("rectangle"), ShapeKind::Rectangle);
        assert_eq!(ShapeKind::from_content("hexagon"), ShapeKind::Rectangle);
    }

    #[test]
    fn test_logo_source_detection() {
        let global = GlobalStyle::default();
        let config = DesignerConfig::default();
        let renderer = ElementRenderer::new(&global, &config);

        match renderer.render(&element(ElementKind::Logo, "https://cdn.example/logo.png"), false).kind {
            RenderKind::Logo { src, placeholder, .. } => {
                assert_eq!(src.as_deref(), Some("https://cdn.example/logo.png"));
                assert!(placeholder.is_empty());
            }
            other => panic!("expected logo, got {:?}", other),
        }

        match renderer.render(&element(ElementKind::Logo, "ACME"), false).kind {
            RenderKind::Logo { src, placeholder, .. } => {
                assert_eq!(src, None);
                assert_eq!(placeholder, "ACME");
            }
            other => panic!("expected logo, got {:?}", other),
        }
    }

    #[test]
    fn test_qr_uses_configured_grid() {
        let global = GlobalStyle::default();
        let config = DesignerConfig {
            qr_grid_size: 10,
            ..Default::default()
        };
        match ElementRenderer::new(&global, &config).render(&element(ElementKind::Qr, "x"), false).kind {
            RenderKind::Qr { mosaic, light_color, .. } => {
                assert_eq!(mosaic.grid, 10);
                assert_eq!(light_color, QR_LIGHT_COLOR);
            }
            other => panic!("expected qr, got {:?}", other),
        }
    }
}
