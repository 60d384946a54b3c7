//! Core data structures for the Visiting Card Designer
//!
//! A `CardDocument` is a two-sided card: document-level styling plus a flat,
//! paint-ordered list of positioned elements, each tagged with its side.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{DesignerError, Result};

pub use super::style::{BorderSpec, BorderStyle, ElementStyle, FontStyle, FontWeight, TextDecoration};
pub use super::template::{CornerStyle, TemplateId};

/// Smallest width/height an element may have, in pixels
pub const MIN_ELEMENT_SIZE: f64 = 1.0;

/// Largest element id; ids cross the JS boundary as `u32`
pub const MAX_ELEMENT_ID: u64 = u32::MAX as u64;

/// Where new elements land before clamping
pub const DEFAULT_ELEMENT_POSITION: Position = Position { x: 20.0, y: 20.0 };

/// Default text font size in pixels
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Stable identifier of a card element
///
/// Allocated from the document's counter, never reused.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el-{}", self.0)
    }
}

/// Which face of the card an element lives on
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardSide {
    #[default]
    Front,
    Back,
}

impl CardSide {
    pub fn flipped(self) -> Self {
        match self {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        }
    }
}

/// Type of a card element
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Qr,
    Logo,
    Icon,
    Shape,
}

impl ElementKind {
    /// Size given to a freshly added element
    pub fn default_size(self) -> Size {
        match self {
            ElementKind::Qr => Size::new(60.0, 60.0),
            ElementKind::Text | ElementKind::Logo | ElementKind::Icon | ElementKind::Shape => {
                Size::new(100.0, 30.0)
            }
        }
    }

    /// Content given to a freshly added element when the caller supplies none
    pub fn default_content(self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Qr => "https://example.com",
            ElementKind::Logo => "LOGO",
            ElementKind::Icon => "★",
            ElementKind::Shape => "rectangle",
        }
    }

    /// QR placeholders are always square when resized through the size control
    pub fn keeps_square(self) -> bool {
        matches!(self, ElementKind::Qr)
    }
}

/// Semantic slot of a named element; these get recolored by template changes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ElementRole {
    Name,
    Title,
    Company,
    Contact,
}

/// Top-left corner of an element, relative to the card surface origin
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Replace non-finite or too small dimensions with the minimum size
    pub fn sanitized(self) -> Self {
        let fix = |v: f64| if v.is_finite() { v.max(MIN_ELEMENT_SIZE) } else { MIN_ELEMENT_SIZE };
        Self {
            width: fix(self.width),
            height: fix(self.height),
        }
    }
}

/// The card surface rectangle elements must stay inside
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CardBounds {
    pub width: f64,
    pub height: f64,
}

impl CardBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp a position so an element of `size` fits entirely on the card
    ///
    /// Elements larger than the card are pinned to the origin on that axis.
    pub fn clamp(&self, position: Position, size: Size) -> Position {
        let max_x = (self.width - size.width).max(0.0);
        let max_y = (self.height - size.height).max(0.0);
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        Position {
            x: finite(position.x).clamp(0.0, max_x),
            y: finite(position.y).clamp(0.0, max_y),
        }
    }

    pub fn contains(&self, point: Position) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x <= self.width && point.y <= self.height
    }
}

/// A positioned, styled item on one side of the card
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardElement {
    pub id: ElementId,

    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// Literal text, QR payload, logo source, icon glyph or shape name
    pub content: String,

    pub position: Position,

    pub size: Size,

    #[serde(default)]
    pub style: ElementStyle,

    pub side: CardSide,

    /// Named slot (name, title, ...) used by the template cascade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ElementRole>,
}

impl CardElement {
    /// Check whether a card-relative point falls inside this element's box
    pub fn hit_test(&self, point: Position) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + self.size.width
            && point.y >= self.position.y
            && point.y <= self.position.y + self.size.height
    }
}

/// Document-level styling
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyle {
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub template_id: TemplateId,
    pub corner_style: CornerStyle,
}

impl Default for GlobalStyle {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            text_color: "#1f2937".to_string(),
            accent_color: "#2563eb".to_string(),
            template_id: TemplateId::Classic,
            corner_style: CornerStyle::Normal,
        }
    }
}

/// Partial update of the document-level styling
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalStylePatch {
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub accent_color: Option<String>,
    pub template_id: Option<TemplateId>,
    pub corner_style: Option<CornerStyle>,
}

/// Partial update of a single element
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementUpdate {
    pub content: Option<String>,
    pub position: Option<Position>,
    pub size: Option<Size>,
    pub style: Option<ElementStyle>,
    pub role: Option<ElementRole>,
}

/// The whole two-sided card being edited
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardDocument {
    pub global_style: GlobalStyle,

    /// Paint order: later elements are drawn on top
    pub elements: Vec<CardElement>,

    pub current_side: CardSide,

    /// Next id to hand out; only ever grows
    pub next_id: u64,
}

impl Default for CardDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CardDocument {
    /// Create an empty document showing the front side
    pub fn new() -> Self {
        Self {
            global_style: GlobalStyle::default(),
            elements: Vec::new(),
            current_side: CardSide::Front,
            next_id: 1,
        }
    }

    /// Hand out a fresh element id
    pub fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    pub fn element(&self, id: ElementId) -> Option<&CardElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut CardElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Elements on the given side, in paint order
    pub fn elements_on(&self, side: CardSide) -> impl Iterator<Item = &CardElement> {
        self.elements.iter().filter(move |e| e.side == side)
    }

    /// Elements on the side currently being edited, in paint order
    pub fn visible_elements(&self) -> impl Iterator<Item = &CardElement> {
        self.elements_on(self.current_side)
    }

    /// Topmost visible element under a card-relative point
    pub fn top_element_at(&self, point: Position) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .filter(|e| e.side == self.current_side)
            .find(|e| e.hit_test(point))
            .map(|e| e.id)
    }

    /// Remove an element; returns it if it existed
    pub fn remove(&mut self, id: ElementId) -> Option<CardElement> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index))
    }

    /// Merge a partial update into an element
    ///
    /// Returns `false` when no element has this id. When `clamp` is set the
    /// merged position is pulled back inside `bounds`.
    pub fn apply_update(
        &mut self,
        id: ElementId,
        update: &ElementUpdate,
        bounds: CardBounds,
        clamp: bool,
    ) -> bool {
        let Some(element) = self.element_mut(id) else {
            return false;
        };

        if let Some(content) = &update.content {
            element.content = content.clone();
        }
        if let Some(size) = update.size {
            element.size = size.sanitized();
        }
        if let Some(position) = update.position {
            element.position = position;
        }
        if let Some(style) = &update.style {
            element.style.merge(style);
        }
        if let Some(role) = update.role {
            element.role = Some(role);
        }

        if clamp {
            element.position = bounds.clamp(element.position, element.size);
        }
        true
    }

    /// Repair a document that came from outside: sizes, bounds, ids and the id counter
    ///
    /// Repeated ids get fresh ones from the counter. Fails when an id does not
    /// fit in [`MAX_ELEMENT_ID`], since such an element could not be addressed.
    pub fn normalize(&mut self, bounds: CardBounds) -> Result<()> {
        for element in &mut self.elements {
            element.size = element.size.sanitized();
            element.position = bounds.clamp(element.position, element.size);
        }

        let max_id = self.elements.iter().map(|e| e.id.0).max().unwrap_or(0);
        if max_id > MAX_ELEMENT_ID {
            return Err(DesignerError::Snapshot(format!("element id {} out of range", max_id)));
        }
        self.next_id = self.next_id.max(max_id + 1);

        let mut seen = HashSet::new();
        for index in 0..self.elements.len() {
            if seen.insert(self.elements[index].id) {
                continue;
            }
            if self.next_id > MAX_ELEMENT_ID {
                return Err(DesignerError::Snapshot("element ids exhausted".to_string()));
            }
            let fresh = self.allocate_id();
            log::debug!("repeated id {} reassigned to {}", self.elements[index].id, fresh);
            self.elements[index].id = fresh;
            seen.insert(fresh);
        }
        Ok(())
    }
}
