//! Card Designer WASM API
//!
//! JavaScript-facing surface of the designer. All exports take and return
//! plain JS values converted with serde-wasm-bindgen.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, error conversion and console logging
//! - `core`: the exported operations, grouped by concern

pub mod helpers;
pub mod core;

pub use core::*;
