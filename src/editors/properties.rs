//! Property editor bindings
//!
//! Each form control on the editing panel produces one edit. Edits are turned
//! into plain `ElementUpdate`/`GlobalStylePatch` values against the current
//! element, so they go through the same merge and clamp path as everything
//! else. There is no validation beyond numeric coercion.

use serde::{Deserialize, Serialize};

use crate::models::{
    CardElement, CornerStyle, ElementStyle, ElementUpdate, GlobalStylePatch, Position, Size,
    TemplateId, DEFAULT_FONT_SIZE,
};

/// Fallback width when the width input does not parse
pub const FALLBACK_WIDTH: f64 = 100.0;

/// Fallback height when the height input does not parse
pub const FALLBACK_HEIGHT: f64 = 30.0;

/// Raw value of a numeric form control
///
/// Inputs usually arrive as strings (`input.value`), sliders as numbers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Parse the input, falling back to `default` when it is not a finite number
    pub fn coerce(&self, default: f64) -> f64 {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => s.trim().parse::<f64>().unwrap_or(default),
        };
        if value.is_finite() {
            value
        } else {
            default
        }
    }

    /// Like `coerce`, but non-positive values also fall back (sizes, font sizes)
    pub fn coerce_positive(&self, default: f64) -> f64 {
        let value = self.coerce(default);
        if value > 0.0 {
            value
        } else {
            default
        }
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        NumericInput::Text(s.to_string())
    }
}

impl From<f64> for NumericInput {
    fn from(n: f64) -> Self {
        NumericInput::Number(n)
    }
}

/// An edit to the selected element from the properties panel
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum PropertyEdit {
    Content(String),
    Width(NumericInput),
    Height(NumericInput),
    PositionX(NumericInput),
    PositionY(NumericInput),
    FontSize(NumericInput),
    Color(String),
    BackgroundColor(String),
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
}

/// An edit to the document-level styling
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum GlobalEdit {
    BackgroundColor(String),
    TextColor(String),
    AccentColor(String),
    CornerStyle(CornerStyle),
    Template(TemplateId),
}

/// Translate a property edit into an update of `element`
pub fn element_update(element: &CardElement, edit: &PropertyEdit) -> ElementUpdate {
    let square = element.kind.keeps_square();
    let mut update = ElementUpdate::default();

    match edit {
        PropertyEdit::Content(content) => {
            update.content = Some(content.clone());
        }
        PropertyEdit::Width(raw) => {
            let width = raw.coerce_positive(FALLBACK_WIDTH);
            let height = if square { width } else { element.size.height };
            update.size = Some(Size::new(width, height));
        }
        PropertyEdit::Height(raw) => {
            let height = raw.coerce_positive(FALLBACK_HEIGHT);
            let width = if square { height } else { element.size.width };
            update.size = Some(Size::new(width, height));
        }
        PropertyEdit::PositionX(raw) => {
            update.position = Some(Position::new(raw.coerce(0.0), element.position.y));
        }
        PropertyEdit::PositionY(raw) => {
            update.position = Some(Position::new(element.position.x, raw.coerce(0.0)));
        }
        PropertyEdit::FontSize(raw) => {
            update.style = Some(ElementStyle {
                font_size: Some(raw.coerce_positive(DEFAULT_FONT_SIZE)),
                ..Default::default()
            });
        }
        PropertyEdit::Color(color) => {
            update.style = Some(ElementStyle {
                color: Some(color.clone()),
                ..Default::default()
            });
        }
        PropertyEdit::BackgroundColor(color) => {
            update.style = Some(ElementStyle {
                background_color: Some(color.clone()),
                ..Default::default()
            });
        }
        PropertyEdit::ToggleBold => {
            let weight = element.style.font_weight.unwrap_or_default().toggled();
            update.style = Some(ElementStyle {
                font_weight: Some(weight),
                ..Default::default()
            });
        }
        PropertyEdit::ToggleItalic => {
            let style = element.style.font_style.unwrap_or_default().toggled();
            update.style = Some(ElementStyle {
                font_style: Some(style),
                ..Default::default()
            });
        }
        PropertyEdit::ToggleUnderline => {
            let decoration = element.style.text_decoration.unwrap_or_default().toggled();
            update.style = Some(ElementStyle {
                text_decoration: Some(decoration),
                ..Default::default()
            });
        }
    }

    update
}

/// Translate a global edit into a style patch
pub fn global_patch(edit: &GlobalEdit) -> GlobalStylePatch {
    let mut patch = GlobalStylePatch::default();
    match edit {
        GlobalEdit::BackgroundColor(color) => patch.background_color = Some(color.clone()),
        GlobalEdit::TextColor(color) => patch.text_color = Some(color.clone()),
        GlobalEdit::AccentColor(color) => patch.accent_color = Some(color.clone()),
        GlobalEdit::CornerStyle(corner) => patch.corner_style = Some(*corner),
        GlobalEdit::Template(template) => patch.template_id = Some(*template),
    }
    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardSide, ElementId, ElementKind, FontWeight};

    fn element(kind: ElementKind) -> CardElement {
        CardElement {
            id: ElementId(1),
            kind,
            content: String::new(),
            position: Position::new(10.0, 12.0),
            size: kind.default_size(),
            style: ElementStyle::default(),
            side: CardSide::Front,
            role: None,
        }
    }

    #[test]
    fn test_coerce_falls_back() {
        assert_eq!(NumericInput::from("abc").coerce(100.0), 100.0);
        assert_eq!(NumericInput::from(" 42 ").coerce(100.0), 42.0);
        assert_eq!(NumericInput::from("").coerce(30.0), 30.0);
        assert_eq!(NumericInput::from(f64::NAN).coerce(30.0), 30.0);
        assert_eq!(NumericInput::from("-5").coerce_positive(30.0), 30.0);
        assert_eq!(NumericInput::from("0").coerce_positive(14.0), 14.0);
    }

    #[test]
    fn test_width_edit_falls_back_to_default() {
        let text = element(ElementKind::Text);
        let update = element_update(&text, &PropertyEdit::Width("wide".into()));
        assert_eq!(update.size, Some(Size::new(FALLBACK_WIDTH, 30.0)));
    }

    #[test]
    fn test_qr_resize_stays_square() {
        let qr = element(ElementKind::Qr);
        let update = element_update(&qr, &PropertyEdit::Width("80".into()));
        assert_eq!(update.size, Some(Size::new(80.0, 80.0)));

        let update = element_update(&qr, &PropertyEdit::Height(NumericInput::Number(45.0)));
        assert_eq!(update.size, Some(Size::new(45.0, 45.0)));
    }

    #[test]
    fn test_position_edit_keeps_other_axis() {
        let text = element(ElementKind::Text);
        let update = element_update(&text, &PropertyEdit::PositionY("77".into()));
        assert_eq!(update.position, Some(Position::new(10.0, 77.0)));
    }

    #[test]
    fn test_toggle_bold_reads_current_state() {
        let mut text = element(ElementKind::Text);
        let update = element_update(&text, &PropertyEdit::ToggleBold);
        assert_eq!(update.style.as_ref().and_then(|s| s.font_weight), Some(FontWeight::Bold));

        text.style.font_weight = Some(FontWeight::Bold);
        let update = element_update(&text, &PropertyEdit::ToggleBold);
        assert_eq!(update.style.as_ref().and_then(|s| s.font_weight), Some(FontWeight::Normal));
    }

    #[test]
    fn test_edit_wire_format() {
        let edit: PropertyEdit = serde_json::from_str(r#"{"field":"width","value":"120"}"#).unwrap();
        assert_eq!(edit, PropertyEdit::Width(NumericInput::Text("120".to_string())));

        let edit: PropertyEdit = serde_json::from_str(r#"{"field":"fontSize","value":18}"#).unwrap();
        assert_eq!(edit, PropertyEdit::FontSize(NumericInput::Number(18.0)));

        let edit: PropertyEdit = serde_json::from_str(r#"{"field":"toggleItalic"}"#).unwrap();
        assert_eq!(edit, PropertyEdit::ToggleItalic);

        let edit: GlobalEdit = serde_json::from_str(r#"{"field":"template","value":8}"#).unwrap();
        assert_eq!(global_patch(&edit).template_id, Some(TemplateId::Dark));
    }
}
