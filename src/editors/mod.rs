//! Property Editors
//!
//! Form-control edits for the selected element and the document styling.

pub mod properties;

pub use properties::{element_update, global_patch, GlobalEdit, NumericInput, PropertyEdit};
