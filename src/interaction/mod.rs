//! Pointer interaction on the card surface

pub mod drag;

pub use drag::{DragController, DragState, DragThresholds, PointerOutcome, PointerSample};
