//! Editing session state
//!
//! `CardDesigner` owns the card document together with the selection and the
//! drag controller. All document mutations go through it, which is what lets
//! `update_element` skip clamping only for the element under an active drag.

use crate::config::DesignerConfig;
use crate::editors::{self, GlobalEdit, PropertyEdit};
use crate::interaction::{DragController, DragThresholds, PointerOutcome, PointerSample};
use crate::models::*;
use crate::renderers::{self, DisplayList};
use crate::templates;

/// Complete designer state (WASM-owned source of truth)
#[derive(Clone, Debug)]
pub struct CardDesigner {
    document: CardDocument,

    /// At most one selected element, always on the current side
    selected: Option<ElementId>,

    drag: DragController,

    config: DesignerConfig,
}

impl Default for CardDesigner {
    fn default() -> Self {
        Self::new(DesignerConfig::default())
    }
}

impl CardDesigner {
    /// Create a designer with an empty card
    pub fn new(config: DesignerConfig) -> Self {
        Self {
            document: CardDocument::new(),
            selected: None,
            drag: DragController::new(DragThresholds::from_config(&config)),
            config,
        }
    }

    pub fn document(&self) -> &CardDocument {
        &self.document
    }

    pub fn config(&self) -> &DesignerConfig {
        &self.config
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn bounds(&self) -> CardBounds {
        self.config.bounds()
    }

    // ========================================================================
    // Document operations
    // ========================================================================

    /// Add an element of `kind` to the current side and select it
    pub fn add_element(
        &mut self,
        kind: ElementKind,
        content: Option<&str>,
        style_overrides: Option<&ElementStyle>,
    ) -> ElementId {
        let size = kind.default_size();
        let mut style = self.default_style(kind);
        if let Some(overrides) = style_overrides {
            style.merge(overrides);
        }

        let position = self.bounds().clamp(DEFAULT_ELEMENT_POSITION, size);
        let side = self.document.current_side;
        let id = self.document.allocate_id();
        self.document.elements.push(CardElement {
            id,
            kind,
            content: content.unwrap_or(kind.default_content()).to_string(),
            position,
            size,
            style,
            side,
            role: None,
        });
        self.selected = Some(id);

        log::debug!("added {:?} element {} on {:?}", kind, id, self.document.current_side);
        id
    }

    /// Merge a partial update into an element; unknown ids are ignored
    ///
    /// Position-only writes to the element under an active drag are not
    /// clamped here; the drag controller already clamps its targets.
    pub fn update_element(&mut self, id: ElementId, update: &ElementUpdate) {
        let clamp = self.drag.dragged_element() != Some(id) || update.size.is_some();
        let bounds = self.bounds();
        if !self.document.apply_update(id, update, bounds, clamp) {
            log::debug!("update ignored: no element {}", id);
        }
    }

    /// Remove an element for good
    pub fn delete_element(&mut self, id: ElementId) {
        if self.document.remove(id).is_none() {
            return;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.drag.tracked_element() == Some(id) {
            self.drag.reset();
        }
        log::debug!("deleted element {}", id);
    }

    /// Remove every element on both sides
    pub fn clear_all(&mut self) {
        self.document.elements.clear();
        self.selected = None;
        self.drag.reset();
    }

    /// Merge document-level styling; a template in the patch triggers the cascade
    ///
    /// Explicit colors in the patch win over the template's background reset.
    pub fn set_global_style(&mut self, patch: &GlobalStylePatch) {
        if let Some(template) = patch.template_id {
            self.apply_template(template);
        }
        let global = &mut self.document.global_style;
        if let Some(color) = &patch.background_color {
            global.background_color = color.clone();
        }
        if let Some(color) = &patch.text_color {
            global.text_color = color.clone();
        }
        if let Some(color) = &patch.accent_color {
            global.accent_color = color.clone();
        }
        if let Some(corner) = patch.corner_style {
            global.corner_style = corner;
        }
    }

    /// Switch the side being edited
    ///
    /// Elements on the other side are not interactive, so the selection and
    /// any pointer interaction are dropped.
    pub fn set_current_side(&mut self, side: CardSide) {
        self.document.current_side = side;
        self.selected = None;
        self.drag.reset();
    }

    /// Select an element on the current side, or clear the selection with `None`
    pub fn select(&mut self, id: Option<ElementId>) {
        match id {
            Some(id) => {
                let visible = self
                    .document
                    .element(id)
                    .is_some_and(|e| e.side == self.document.current_side);
                if visible {
                    self.selected = Some(id);
                }
            }
            None => self.selected = None,
        }
    }

    /// Replace the card contents with a sample layout
    pub fn load_starter_layout(&mut self) {
        self.clear_all();
        self.document.current_side = CardSide::Front;

        let accent = self.document.global_style.accent_color.clone();
        let bold = ElementStyle {
            font_weight: Some(FontWeight::Bold),
            ..Default::default()
        };
        let italic = ElementStyle {
            font_style: Some(FontStyle::Italic),
            ..Default::default()
        };

        self.push_named(CardSide::Front, ElementRole::Name, "Jane Doe", (24.0, 28.0), (220.0, 32.0), 22.0, &bold);
        self.push_named(CardSide::Front, ElementRole::Title, "Creative Director", (24.0, 64.0), (200.0, 22.0), 14.0, &ElementStyle::default());
        self.push_named(CardSide::Front, ElementRole::Company, "Acme Studio", (24.0, 176.0), (180.0, 22.0), 13.0, &italic);
        self.push_raw(
            CardSide::Front,
            ElementKind::Shape,
            "rectangle",
            (24.0, 100.0),
            (48.0, 4.0),
            ElementStyle {
                background_color: Some(accent),
                ..Default::default()
            },
        );

        self.push_named(CardSide::Back, ElementRole::Contact, "jane@acme.studio · +1 555 0100", (24.0, 24.0), (260.0, 20.0), 12.0, &ElementStyle::default());
        self.push_raw(CardSide::Back, ElementKind::Logo, "ACME", (24.0, 170.0), (100.0, 30.0), ElementStyle::default());
        let qr_style = self.default_style(ElementKind::Qr);
        self.push_raw(CardSide::Back, ElementKind::Qr, "https://acme.studio", (300.0, 140.0), (60.0, 60.0), qr_style);

        log::info!("starter layout loaded ({} elements)", self.document.elements.len());
    }

    /// Replace the whole document (e.g. a snapshot handed back by the page)
    ///
    /// A document that cannot be repaired leaves the current one untouched.
    pub fn load_document(&mut self, mut document: CardDocument) -> crate::error::Result<()> {
        document.normalize(self.bounds())?;
        self.document = document;
        self.selected = None;
        self.drag.reset();
        Ok(())
    }

    // ========================================================================
    // Property editors
    // ========================================================================

    /// Apply a properties-panel edit to an element
    pub fn apply_property_edit(&mut self, id: ElementId, edit: &PropertyEdit) {
        let Some(element) = self.document.element(id) else {
            return;
        };
        let update = editors::element_update(element, edit);
        self.update_element(id, &update);
    }

    /// Apply a document-styling edit
    pub fn apply_global_edit(&mut self, edit: &GlobalEdit) {
        self.set_global_style(&editors::global_patch(edit));
    }

    // ========================================================================
    // Pointer input
    // ========================================================================

    pub fn pointer_down(&mut self, sample: PointerSample) -> PointerOutcome {
        let outcome = self.drag.pointer_down(sample, &self.document);
        self.apply_outcome(outcome);
        outcome
    }

    pub fn pointer_move(&mut self, sample: PointerSample) -> PointerOutcome {
        let outcome = self.drag.pointer_move(sample, &self.document, self.bounds());
        self.apply_outcome(outcome);
        outcome
    }

    pub fn pointer_up(&mut self, sample: PointerSample) -> PointerOutcome {
        let outcome = self.drag.pointer_up(sample, &self.document, self.bounds());
        self.apply_outcome(outcome);
        outcome
    }

    /// Pointer left the card surface or the window lost focus
    pub fn cancel_pointer(&mut self) -> PointerOutcome {
        let outcome = self.drag.cancel();
        self.apply_outcome(outcome);
        outcome
    }

    fn apply_outcome(&mut self, outcome: PointerOutcome) {
        match outcome {
            PointerOutcome::None | PointerOutcome::Clicked { .. } => {}
            PointerOutcome::Selected { id } => self.selected = Some(id),
            PointerOutcome::SelectionCleared => self.selected = None,
            PointerOutcome::Moved { id, position } | PointerOutcome::Committed { id, position } => {
                // Controller is Idle again after a commit, so this clamps
                self.update_element(
                    id,
                    &ElementUpdate {
                        position: Some(position),
                        ..Default::default()
                    },
                );
            }
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn display_list(&self) -> DisplayList {
        renderers::build_display_list(&self.document, self.selected, &self.config)
    }

    pub fn render_svg(&self) -> crate::error::Result<String> {
        renderers::render_svg(&self.display_list())
    }

    /// JSON snapshot of the document, for handing to the page as a string
    pub fn snapshot_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(&self.document)?)
    }

    /// Replace the document from a JSON snapshot
    pub fn load_snapshot_json(&mut self, json: &str) -> crate::error::Result<()> {
        let document: CardDocument = serde_json::from_str(json)?;
        self.load_document(document)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Set the template and recolor every named element from its palette
    fn apply_template(&mut self, template: TemplateId) {
        let descriptor = templates::resolve(template);
        let global = &mut self.document.global_style;
        global.template_id = template;
        global.background_color = descriptor.background.base_color().to_string();

        let mut restyled = 0;
        for element in &mut self.document.elements {
            if let Some(role) = element.role {
                element.style.color = Some(descriptor.palette.color_for(role).to_string());
                restyled += 1;
            }
        }
        log::debug!("template {:?} applied, {} named elements restyled", template, restyled);
    }

    fn default_style(&self, kind: ElementKind) -> ElementStyle {
        let global = &self.document.global_style;
        match kind {
            ElementKind::Text | ElementKind::Logo => ElementStyle {
                color: Some(global.text_color.clone()),
                font_size: Some(DEFAULT_FONT_SIZE),
                ..Default::default()
            },
            ElementKind::Qr => ElementStyle {
                color: Some(global.text_color.clone()),
                ..Default::default()
            },
            ElementKind::Icon => ElementStyle {
                color: Some(global.accent_color.clone()),
                ..Default::default()
            },
            ElementKind::Shape => ElementStyle {
                background_color: Some(global.accent_color.clone()),
                ..Default::default()
            },
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn push_named(
        &mut self,
        side: CardSide,
        role: ElementRole,
        content: &str,
        position: (f64, f64),
        size: (f64, f64),
        font_size: f64,
        extra: &ElementStyle,
    ) {
        let palette = &templates::resolve(self.document.global_style.template_id).palette;
        let style = ElementStyle {
            color: Some(palette.color_for(role).to_string()),
            font_size: Some(font_size),
            ..Default::default()
        }
        .merged(extra);

        let id = self.push_raw(side, ElementKind::Text, content, position, size, style);
        if let Some(element) = self.document.element_mut(id) {
            element.role = Some(role);
        }
    }

    fn push_raw(
        &mut self,
        side: CardSide,
        kind: ElementKind,
        content: &str,
        position: (f64, f64),
        size: (f64, f64),
        style: ElementStyle,
    ) -> ElementId {
        let size = Size::new(size.0, size.1).sanitized();
        let position = self.bounds().clamp(Position::new(position.0, position.1), size);
        let id = self.document.allocate_id();
        self.document.elements.push(CardElement {
            id,
            kind,
            content: content.to_string(),
            position,
            size,
            style,
            side,
            role: None,
        });
        id
    }
}
