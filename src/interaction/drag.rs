//! Drag/selection state machine
//!
//! One pointer interaction at a time: `Idle -> Pressed -> (Dragging | click) -> Idle`.
//! A press only turns into a drag once it has lasted longer than the time
//! threshold AND travelled further than the distance threshold, so quick
//! taps and twitchy clicks never move an element.
//!
//! The controller reads the document but never writes it; each call returns a
//! [`PointerOutcome`] that the designer applies.

use serde::{Deserialize, Serialize};

use crate::config::DesignerConfig;
use crate::models::{CardBounds, CardDocument, ElementId, Position};

/// One pointer event as seen by the page
///
/// `client_*` are viewport coordinates of the pointer; `card_*` is the card
/// surface's bounding-box origin in the same coordinate space.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
    #[serde(default)]
    pub card_left: f64,
    #[serde(default)]
    pub card_top: f64,

    /// Event timestamp in milliseconds (e.g. `event.timeStamp`); 0 when omitted
    #[serde(default)]
    pub time_ms: f64,
}

impl PointerSample {
    /// Pointer position relative to the card surface's top-left corner
    pub fn card_point(&self) -> Position {
        Position::new(self.client_x - self.card_left, self.client_y - self.card_top)
    }

    fn client_point(&self) -> Position {
        Position::new(self.client_x, self.client_y)
    }
}

/// Thresholds separating a click from a drag
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DragThresholds {
    pub time_ms: f64,
    pub distance_px: f64,
}

impl DragThresholds {
    pub fn from_config(config: &DesignerConfig) -> Self {
        Self {
            time_ms: config.drag_time_threshold_ms,
            distance_px: config.drag_distance_threshold_px,
        }
    }

    /// Both thresholds must be strictly exceeded
    pub fn exceeded(&self, elapsed_ms: f64, distance_px: f64) -> bool {
        elapsed_ms > self.time_ms && distance_px > self.distance_px
    }
}

impl Default for DragThresholds {
    fn default() -> Self {
        Self::from_config(&DesignerConfig::default())
    }
}

/// Where the controller is in the current pointer interaction
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DragState {
    #[default]
    Idle,

    /// Pointer is down on an element but has not yet qualified as a drag
    #[serde(rename_all = "camelCase")]
    Pressed {
        element: ElementId,
        down_time_ms: f64,
        down_client: Position,
        /// Pointer position minus element position at press time (card space)
        offset: Position,
    },

    /// Element follows the pointer
    #[serde(rename_all = "camelCase")]
    Dragging {
        element: ElementId,
        offset: Position,
        /// Last clamped position written to the element
        last_position: Position,
    },
}

/// What the designer should do in response to a pointer event
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PointerOutcome {
    /// Nothing to apply
    None,
    /// Press landed on an element; select it
    Selected { id: ElementId },
    /// Press landed on empty card surface; clear the selection
    SelectionCleared,
    /// Element moved during a drag (position already clamped)
    Moved { id: ElementId, position: Position },
    /// Drag finished; commit the final clamped position
    Committed { id: ElementId, position: Position },
    /// Press released without qualifying as a drag
    Clicked { id: ElementId },
}

/// Pointer interaction controller for the card surface
#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
    thresholds: DragThresholds,
}

impl DragController {
    pub fn new(thresholds: DragThresholds) -> Self {
        Self {
            state: DragState::Idle,
            thresholds,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Element currently being dragged, if any
    pub fn dragged_element(&self) -> Option<ElementId> {
        match self.state {
            DragState::Dragging { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Element tracked by the current press or drag, if any
    pub fn tracked_element(&self) -> Option<ElementId> {
        match self.state {
            DragState::Idle => None,
            DragState::Pressed { element, .. } | DragState::Dragging { element, .. } => Some(element),
        }
    }

    /// Drop any interaction in progress without producing an outcome
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    /// Pointer pressed on the card surface
    pub fn pointer_down(&mut self, sample: PointerSample, document: &CardDocument) -> PointerOutcome {
        // A previous interaction that never saw its pointer-up is simply dropped
        self.state = DragState::Idle;

        let point = sample.card_point();
        let Some(id) = document.top_element_at(point) else {
            return PointerOutcome::SelectionCleared;
        };
        let Some(element) = document.element(id) else {
            return PointerOutcome::SelectionCleared;
        };

        self.state = DragState::Pressed {
            element: id,
            down_time_ms: sample.time_ms,
            down_client: sample.client_point(),
            offset: Position::new(point.x - element.position.x, point.y - element.position.y),
        };

        log::debug!("pointer down on {} at ({}, {})", id, point.x, point.y);
        PointerOutcome::Selected { id }
    }

    /// Pointer moved anywhere while the button is held
    pub fn pointer_move(
        &mut self,
        sample: PointerSample,
        document: &CardDocument,
        bounds: CardBounds,
    ) -> PointerOutcome {
        match self.state {
            DragState::Idle => PointerOutcome::None,
            DragState::Pressed {
                element,
                down_time_ms,
                down_client,
                offset,
            } => {
                if !self.qualifies_as_drag(sample, down_time_ms, down_client) {
                    return PointerOutcome::None;
                }
                log::debug!("press on {} became a drag", element);
                self.follow(element, offset, sample, document, bounds)
            }
            DragState::Dragging { element, offset, .. } => {
                self.follow(element, offset, sample, document, bounds)
            }
        }
    }

    /// Pointer released
    pub fn pointer_up(
        &mut self,
        sample: PointerSample,
        document: &CardDocument,
        bounds: CardBounds,
    ) -> PointerOutcome {
        let state = std::mem::take(&mut self.state);
        match state {
            DragState::Idle => PointerOutcome::None,
            DragState::Pressed {
                element,
                down_time_ms,
                down_client,
                offset,
            } => {
                // A release far enough away and late enough still counts as a drag,
                // even if no move event arrived in between
                if self.qualifies_as_drag(sample, down_time_ms, down_client) {
                    match clamped_target(element, offset, sample, document, bounds) {
                        Some(position) => PointerOutcome::Committed { id: element, position },
                        None => PointerOutcome::None,
                    }
                } else {
                    PointerOutcome::Clicked { id: element }
                }
            }
            DragState::Dragging {
                element,
                offset,
                last_position,
            } => {
                let position = clamped_target(element, offset, sample, document, bounds)
                    .unwrap_or(last_position);
                log::debug!("drag of {} committed at ({}, {})", element, position.x, position.y);
                PointerOutcome::Committed { id: element, position }
            }
        }
    }

    /// Pointer left the card or the window lost focus
    ///
    /// Behaves like a release at the last known position.
    pub fn cancel(&mut self) -> PointerOutcome {
        let state = std::mem::take(&mut self.state);
        match state {
            DragState::Idle => PointerOutcome::None,
            DragState::Pressed { element, .. } => PointerOutcome::Clicked { id: element },
            DragState::Dragging {
                element,
                last_position,
                ..
            } => PointerOutcome::Committed {
                id: element,
                position: last_position,
            },
        }
    }

    fn qualifies_as_drag(&self, sample: PointerSample, down_time_ms: f64, down_client: Position) -> bool {
        let elapsed = sample.time_ms - down_time_ms;
        let distance = (sample.client_x - down_client.x).abs() + (sample.client_y - down_client.y).abs();
        self.thresholds.exceeded(elapsed, distance)
    }

    fn follow(
        &mut self,
        element: ElementId,
        offset: Position,
        sample: PointerSample,
        document: &CardDocument,
        bounds: CardBounds,
    ) -> PointerOutcome {
        match clamped_target(element, offset, sample, document, bounds) {
            Some(position) => {
                self.state = DragState::Dragging {
                    element,
                    offset,
                    last_position: position,
                };
                PointerOutcome::Moved { id: element, position }
            }
            None => {
                // Element vanished mid-drag (deleted from another control)
                self.state = DragState::Idle;
                PointerOutcome::None
            }
        }
    }
}

/// Candidate position for the pointer, clamped to the card
fn clamped_target(
    element: ElementId,
    offset: Position,
    sample: PointerSample,
    document: &CardDocument,
    bounds: CardBounds,
) -> Option<Position> {
    let size = document.element(element)?.size;
    let point = sample.card_point();
    Some(bounds.clamp(Position::new(point.x - offset.x, point.y - offset.y), size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardElement, CardSide, ElementKind, ElementStyle, Size};

    fn bounds() -> CardBounds {
        CardBounds::new(384.0, 224.0)
    }

    fn doc_with_element() -> CardDocument {
        let mut doc = CardDocument::new();
        doc.elements.push(CardElement {
            id: ElementId(1),
            kind: ElementKind::Text,
            content: "Jane".to_string(),
            position: Position::new(20.0, 20.0),
            size: Size::new(80.0, 30.0),
            style: ElementStyle::default(),
            side: CardSide::Front,
            role: None,
        });
        doc
    }

    fn sample(x: f64, y: f64, t: f64) -> PointerSample {
        PointerSample {
            client_x: x + 100.0,
            client_y: y + 50.0,
            card_left: 100.0,
            card_top: 50.0,
            time_ms: t,
        }
    }

    #[test]
    fn test_press_on_empty_surface_clears_selection() {
        let doc = doc_with_element();
        let mut drag = DragController::default();
        assert_eq!(drag.pointer_down(sample(300.0, 200.0, 0.0), &doc), PointerOutcome::SelectionCleared);
        assert_eq!(drag.state(), &DragState::Idle);
    }

    #[test]
    fn test_offset_is_relative_to_card_not_viewport() {
        let doc = doc_with_element();
        let mut drag = DragController::default();
        drag.pointer_down(sample(30.0, 25.0, 0.0), &doc);

        match drag.state() {
            DragState::Pressed { offset, .. } => assert_eq!(*offset, Position::new(10.0, 5.0)),
            other => panic!("expected Pressed, got {:?}", other),
        }
    }

    #[test]
    fn test_short_twitch_stays_pressed() {
        let doc = doc_with_element();
        let mut drag = DragController::default();
        drag.pointer_down(sample(30.0, 25.0, 0.0), &doc);

        // Far enough but too soon
        assert_eq!(drag.pointer_move(sample(80.0, 25.0, 100.0), &doc, bounds()), PointerOutcome::None);
        // Late enough but too close
        assert_eq!(drag.pointer_move(sample(34.0, 28.0, 400.0), &doc, bounds()), PointerOutcome::None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_thresholds_are_strict() {
        let thresholds = DragThresholds::default();
        assert!(!thresholds.exceeded(150.0, 20.0));
        assert!(!thresholds.exceeded(300.0, 8.0));
        assert!(thresholds.exceeded(151.0, 9.0));
    }

    #[test]
    fn test_drag_moves_and_clamps() {
        let doc = doc_with_element();
        let mut drag = DragController::default();
        drag.pointer_down(sample(30.0, 25.0, 0.0), &doc);

        let moved = drag.pointer_move(sample(60.0, 45.0, 200.0), &doc, bounds());
        assert_eq!(
            moved,
            PointerOutcome::Moved {
                id: ElementId(1),
                position: Position::new(50.0, 40.0)
            }
        );
        assert!(drag.is_dragging());

        let up = drag.pointer_up(sample(510.0, 305.0, 400.0), &doc, bounds());
        assert_eq!(
            up,
            PointerOutcome::Committed {
                id: ElementId(1),
                position: Position::new(304.0, 194.0)
            }
        );
        assert_eq!(drag.state(), &DragState::Idle);
    }

    #[test]
    fn test_release_without_drag_is_click() {
        let doc = doc_with_element();
        let mut drag = DragController::default();
        drag.pointer_down(sample(30.0, 25.0, 0.0), &doc);
        let up = drag.pointer_up(sample(32.0, 25.0, 50.0), &doc, bounds());
        assert_eq!(up, PointerOutcome::Clicked { id: ElementId(1) });
    }

    #[test]
    fn test_cancel_commits_last_position() {
        let doc = doc_with_element();
        let mut drag = DragController::default();
        drag.pointer_down(sample(30.0, 25.0, 0.0), &doc);
        drag.pointer_move(sample(130.0, 125.0, 300.0), &doc, bounds());

        assert_eq!(
            drag.cancel(),
            PointerOutcome::Committed {
                id: ElementId(1),
                position: Position::new(120.0, 120.0)
            }
        );
        assert_eq!(drag.state(), &DragState::Idle);
        assert_eq!(drag.cancel(), PointerOutcome::None);
    }

    #[test]
    fn test_element_removed_mid_drag_returns_to_idle() {
        let mut doc = doc_with_element();
        let mut drag = DragController::default();
        drag.pointer_down(sample(30.0, 25.0, 0.0), &doc);
        drag.pointer_move(sample(130.0, 125.0, 300.0), &doc, bounds());

        doc.elements.clear();
        assert_eq!(drag.pointer_move(sample(140.0, 125.0, 320.0), &doc, bounds()), PointerOutcome::None);
        assert_eq!(drag.state(), &DragState::Idle);
    }
}
