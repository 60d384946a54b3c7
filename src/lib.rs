//! Visiting Card Designer WASM Module
//!
//! Document model, template styling, drag interaction and rendering for a
//! two-sided business card editor. The page owns the DOM; this crate owns
//! the card.

pub mod api;
pub mod config;
pub mod designer;
pub mod editors;
pub mod error;
pub mod interaction;
pub mod models;
pub mod renderers;
pub mod templates;

// Re-export commonly used types
pub use config::DesignerConfig;
pub use designer::CardDesigner;
pub use error::DesignerError;
pub use models::{
    CardDocument, CardElement, CardSide, ElementId, ElementKind, ElementRole, ElementStyle,
    ElementUpdate, GlobalStyle, GlobalStylePatch, Position, Size, TemplateId,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        api::helpers::log_warn("logger already initialized");
    }

    log::info!("Card Designer WASM module initialized");
}
