//! SVG preview output
//!
//! Writes a standalone SVG of one card side from a display list. This is a
//! preview (thumbnails, share images), not a print pipeline: box shadows and
//! the selection ring are not drawn.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::display_list::DisplayList;
use super::element::{RenderElement, RenderKind, ShapeKind};
use super::qr::QrMosaic;
use crate::error::{DesignerError, Result};
use crate::models::style::fmt_px;
use crate::models::{BorderStyle, FontStyle, FontWeight, TextDecoration};
use crate::templates::{self, Background};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const BACKGROUND_GRADIENT_ID: &str = "card-background";

/// Thin wrapper over the quick-xml writer for attribute-list elements
struct SvgWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl SvgWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2),
        }
    }

    fn tag<'a>(name: &'a str, attrs: &[(&str, String)]) -> BytesStart<'a> {
        let mut tag = BytesStart::new(name);
        for (key, value) in attrs {
            tag.push_attribute((*key, value.as_str()));
        }
        tag
    }

    fn start(&mut self, name: &str, attrs: &[(&str, String)]) -> Result<()> {
        self.writer.write_event(Event::Start(Self::tag(name, attrs)))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, String)]) -> Result<()> {
        self.writer.write_event(Event::Empty(Self::tag(name, attrs)))?;
        Ok(())
    }

    fn text(&mut self, name: &str, attrs: &[(&str, String)], text: &str) -> Result<()> {
        self.start(name, attrs)?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn finish(self) -> Result<String> {
        let bytes = self.writer.into_inner().into_inner();
        String::from_utf8(bytes).map_err(|e| DesignerError::Svg(e.to_string()))
    }
}

/// Render a display list as an SVG document
pub fn render_svg(display: &DisplayList) -> Result<String> {
    let surface = &display.surface;
    let descriptor = templates::resolve(surface.template_id);
    let mut svg = SvgWriter::new();

    svg.writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    svg.start(
        "svg",
        &[
            ("xmlns", SVG_NS.to_string()),
            ("width", fmt_px(surface.width)),
            ("height", fmt_px(surface.height)),
            ("viewBox", format!("0 0 {} {}", fmt_px(surface.width), fmt_px(surface.height))),
            ("font-family", descriptor.font_family.clone()),
        ],
    )?;

    let fill = match &descriptor.background {
        Background::Solid { .. } => surface.background.clone(),
        Background::LinearGradient { angle, stops } => {
            let (x1, y1, x2, y2) = gradient_vector(*angle);
            svg.start("defs", &[])?;
            svg.start(
                "linearGradient",
                &[
                    ("id", BACKGROUND_GRADIENT_ID.to_string()),
                    ("x1", x1),
                    ("y1", y1),
                    ("x2", x2),
                    ("y2", y2),
                ],
            )?;
            for stop in stops {
                svg.empty(
                    "stop",
                    &[
                        ("offset", format!("{}%", fmt_px(stop.offset))),
                        ("stop-color", stop.color.clone()),
                    ],
                )?;
            }
            svg.end("linearGradient")?;
            svg.end("defs")?;
            format!("url(#{})", BACKGROUND_GRADIENT_ID)
        }
    };

    let mut surface_attrs = vec![
        ("class", "card-surface".to_string()),
        ("width", fmt_px(surface.width)),
        ("height", fmt_px(surface.height)),
        ("rx", fmt_px(surface.border_radius)),
        ("fill", fill),
    ];
    if let Some(border) = &descriptor.border {
        surface_attrs.push(("stroke", border.color.clone()));
        surface_attrs.push(("stroke-width", fmt_px(border.width)));
        if let Some(dash) = dash_array(border.style) {
            surface_attrs.push(("stroke-dasharray", dash.to_string()));
        }
    }
    svg.empty("rect", &surface_attrs)?;

    for element in &display.elements {
        write_element(&mut svg, element)?;
    }

    svg.end("svg")?;
    svg.finish()
}

fn write_element(svg: &mut SvgWriter, element: &RenderElement) -> Result<()> {
    let (x, y, w, h) = (element.x, element.y, element.width, element.height);

    match &element.kind {
        RenderKind::Text {
            content,
            color,
            font_size,
            font_weight,
            font_style,
            text_decoration,
            background_color,
            border_radius,
            ..
        } => {
            if let Some(background) = background_color {
                svg.empty("rect", &box_attrs(x, y, w, h, *border_radius, background))?;
            }
            let mut attrs = vec![
                ("x", fmt_px(x)),
                ("y", fmt_px(y)),
                ("dominant-baseline", "hanging".to_string()),
                ("font-size", fmt_px(*font_size)),
                ("fill", color.clone()),
            ];
            if *font_weight == FontWeight::Bold {
                attrs.push(("font-weight", "bold".to_string()));
            }
            if *font_style == FontStyle::Italic {
                attrs.push(("font-style", "italic".to_string()));
            }
            if *text_decoration == TextDecoration::Underline {
                attrs.push(("text-decoration", "underline".to_string()));
            }
            svg.text("text", &attrs, content)
        }
        RenderKind::Qr {
            mosaic,
            dark_color,
            light_color,
        } => write_qr(svg, element, mosaic, dark_color, light_color),
        RenderKind::Logo {
            src,
            placeholder,
            color,
            font_size,
        } => match src {
            Some(src) => svg.empty(
                "image",
                &[
                    ("href", src.clone()),
                    ("x", fmt_px(x)),
                    ("y", fmt_px(y)),
                    ("width", fmt_px(w)),
                    ("height", fmt_px(h)),
                    ("preserveAspectRatio", "xMidYMid meet".to_string()),
                ],
            ),
            None => svg.text("text", &centered_text_attrs(element, *font_size, color), placeholder),
        },
        RenderKind::Icon {
            glyph,
            color,
            font_size,
        } => svg.text("text", &centered_text_attrs(element, *font_size, color), glyph),
        RenderKind::Shape {
            shape,
            fill,
            border_radius,
            ..
        } => match shape {
            ShapeKind::Circle => svg.empty(
                "ellipse",
                &[
                    ("cx", fmt_px(x + w / 2.0)),
                    ("cy", fmt_px(y + h / 2.0)),
                    ("rx", fmt_px(w / 2.0)),
                    ("ry", fmt_px(h / 2.0)),
                    ("fill", fill.clone()),
                ],
            ),
            ShapeKind::Rectangle => svg.empty("rect", &box_attrs(x, y, w, h, *border_radius, fill)),
        },
    }
}

fn write_qr(
    svg: &mut SvgWriter,
    element: &RenderElement,
    mosaic: &QrMosaic,
    dark: &str,
    light: &str,
) -> Result<()> {
    let cell_w = element.width / mosaic.grid as f64;
    let cell_h = element.height / mosaic.grid as f64;

    svg.start("g", &[("class", "qr-placeholder".to_string())])?;
    svg.empty("rect", &box_attrs(element.x, element.y, element.width, element.height, 0.0, light))?;

    for row in 0..mosaic.grid {
        for col in 0..mosaic.grid {
            if mosaic.is_dark(row, col) {
                let cx = element.x + col as f64 * cell_w;
                let cy = element.y + row as f64 * cell_h;
                svg.empty("rect", &box_attrs(cx, cy, cell_w, cell_h, 0.0, dark))?;
            }
        }
    }

    // Finder squares: dark frame, light ring, dark center
    for marker in &mosaic.markers {
        let mx = element.x + marker.col as f64 * cell_w;
        let my = element.y + marker.row as f64 * cell_h;
        let mw = marker.cells as f64 * cell_w;
        let mh = marker.cells as f64 * cell_h;
        svg.empty("rect", &box_attrs(mx, my, mw, mh, 0.0, dark))?;
        svg.empty(
            "rect",
            &box_attrs(mx + cell_w * 0.5, my + cell_h * 0.5, mw - cell_w, mh - cell_h, 0.0, light),
        )?;
        svg.empty("rect", &box_attrs(mx + cell_w, my + cell_h, cell_w, cell_h, 0.0, dark))?;
    }

    svg.end("g")
}

fn box_attrs(x: f64, y: f64, w: f64, h: f64, radius: f64, fill: &str) -> Vec<(&'static str, String)> {
    let mut attrs = vec![
        ("x", fmt_px(x)),
        ("y", fmt_px(y)),
        ("width", fmt_px(w)),
        ("height", fmt_px(h)),
        ("fill", fill.to_string()),
    ];
    if radius > 0.0 {
        attrs.push(("rx", fmt_px(radius)));
    }
    attrs
}

fn centered_text_attrs(element: &RenderElement, font_size: f64, color: &str) -> Vec<(&'static str, String)> {
    vec![
        ("x", fmt_px(element.x + element.width / 2.0)),
        ("y", fmt_px(element.y + element.height / 2.0)),
        ("text-anchor", "middle".to_string()),
        ("dominant-baseline", "central".to_string()),
        ("font-size", fmt_px(font_size)),
        ("fill", color.to_string()),
    ]
}

fn dash_array(style: BorderStyle) -> Option<&'static str> {
    match style {
        BorderStyle::Dashed => Some("6 3"),
        BorderStyle::Dotted => Some("1 2"),
        BorderStyle::Solid | BorderStyle::Double => None,
    }
}

/// CSS gradient angle to an SVG objectBoundingBox vector
///
/// CSS measures clockwise from "to top"; SVG wants start/end points.
fn gradient_vector(angle_deg: f64) -> (String, String, String, String) {
    let radians = angle_deg.to_radians();
    let dx = radians.sin() / 2.0;
    let dy = -radians.cos() / 2.0;
    let fmt = |v: f64| format!("{:.3}", v);
    (fmt(0.5 - dx), fmt(0.5 - dy), fmt(0.5 + dx), fmt(0.5 + dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_vector_directions() {
        // 90deg: left to right
        assert_eq!(
            gradient_vector(90.0),
            ("0.000".to_string(), "0.500".to_string(), "1.000".to_string(), "0.500".to_string())
        );
        // 180deg: top to bottom
        assert_eq!(
            gradient_vector(180.0),
            ("0.500".to_string(), "0.000".to_string(), "0.500".to_string(), "1.000".to_string())
        );
    }

    #[test]
    fn test_dash_array() {
        assert_eq!(dash_array(BorderStyle::Dashed), Some("6 3"));
        assert_eq!(dash_array(BorderStyle::Solid), None);
    }
}
