//! Error types for the JavaScript boundary
//!
//! Document operations themselves never fail; these cover the designer not
//! being created yet and values that could not cross the boundary.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DesignerError {
    /// An export was called before `createDesigner`
    #[error("No designer created")]
    NotInitialized,

    #[error("{context}: {message}")]
    Deserialize { context: String, message: String },

    #[error("{context}: {message}")]
    Serialize { context: String, message: String },

    /// JSON snapshot could not be read or written
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// SVG preview could not be written
    #[error("svg write error: {0}")]
    Svg(String),

    #[error("Invalid template id: {0} (must be 0-17)")]
    UnknownTemplate(u8),
}

pub type Result<T> = std::result::Result<T, DesignerError>;

impl From<serde_json::Error> for DesignerError {
    fn from(e: serde_json::Error) -> Self {
        DesignerError::Snapshot(e.to_string())
    }
}

impl From<quick_xml::Error> for DesignerError {
    fn from(e: quick_xml::Error) -> Self {
        DesignerError::Svg(e.to_string())
    }
}
