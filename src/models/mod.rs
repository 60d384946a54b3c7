//! Models module for the Visiting Card Designer
//!
//! This module contains the card document, its elements,
//! the typed style record and the template identifiers.

pub mod core;
pub mod style;
pub mod template;

// Re-export commonly used types
pub use core::*;
pub use style::*;
pub use template::*;
