//! Designer configuration
//!
//! Passed from JavaScript when the designer is created. Every field has a
//! default so the page may send a partial object or nothing at all.

use serde::{Deserialize, Serialize};

use crate::models::CardBounds;

/// Configuration for a designer session
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignerConfig {
    /// Card surface width in pixels
    pub card_width: f64,

    /// Card surface height in pixels
    pub card_height: f64,

    /// A press must last longer than this before it can become a drag
    pub drag_time_threshold_ms: f64,

    /// A press must travel further than this (Manhattan) before it can become a drag
    pub drag_distance_threshold_px: f64,

    /// Scale factor applied to template descriptors for picker thumbnails
    pub thumbnail_scale: f64,

    /// Rows/columns of the decorative QR mosaic
    pub qr_grid_size: usize,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            card_width: 384.0,
            card_height: 224.0,
            drag_time_threshold_ms: 150.0,
            drag_distance_threshold_px: 8.0,
            thumbnail_scale: 0.25,
            qr_grid_size: 8,
        }
    }
}

impl DesignerConfig {
    pub fn bounds(&self) -> CardBounds {
        CardBounds::new(self.card_width, self.card_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: DesignerConfig = serde_json::from_str(r#"{"cardWidth": 500}"#).unwrap();
        assert_eq!(config.card_width, 500.0);
        assert_eq!(config.card_height, 224.0);
        assert_eq!(config.drag_time_threshold_ms, 150.0);
        assert_eq!(config.qr_grid_size, 8);
    }
}
