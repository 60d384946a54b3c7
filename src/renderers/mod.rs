//! Renderers for the card designer
//!
//! - `element`: per-element render payloads
//! - `qr`: the decorative QR mosaic
//! - `display_list`: everything the page needs to draw the current side
//! - `svg`: standalone SVG preview of a display list

pub mod display_list;
pub mod element;
pub mod qr;
pub mod svg;

pub use display_list::{build_display_list, DisplayList, RenderSurface};
pub use element::{ElementRenderer, RenderElement, RenderKind, ShapeKind};
pub use qr::{qr_mosaic, QrMarker, QrMosaic};
pub use svg::render_svg;
