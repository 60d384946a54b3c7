//! Template Style Resolver
//!
//! Pure lookup from template id to the visual style of the card surface,
//! used for both the live card and the picker thumbnails.

pub mod resolver;

pub use resolver::{
    resolve, surface_radius, template_gallery, Background, GradientStop, ShadowSpec,
    StyleDescriptor, TemplatePalette, TemplateThumbnail, ROUNDED_CORNER_RADIUS,
};
