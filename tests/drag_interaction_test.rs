//! Pointer interaction: click versus drag, bounds, cancel

use card_designer_wasm::editors::PropertyEdit;
use card_designer_wasm::interaction::{DragState, PointerOutcome, PointerSample};
use card_designer_wasm::models::{ElementKind, ElementUpdate, Position, Size};
use card_designer_wasm::{CardDesigner, ElementId};
use pretty_assertions::assert_eq;

/// Card surface sits at (100, 50) in the viewport
fn sample(card_x: f64, card_y: f64, time_ms: f64) -> PointerSample {
    PointerSample {
        client_x: card_x + 100.0,
        client_y: card_y + 50.0,
        card_left: 100.0,
        card_top: 50.0,
        time_ms,
    }
}

/// An 80x30 element at (20, 20)
fn designer_with_box() -> (CardDesigner, ElementId) {
    let mut designer = CardDesigner::default();
    let id = designer.add_element(ElementKind::Shape, None, None);
    designer.update_element(
        id,
        &ElementUpdate {
            size: Some(Size::new(80.0, 30.0)),
            ..Default::default()
        },
    );
    designer.select(None);
    (designer, id)
}

fn position_of(designer: &CardDesigner, id: ElementId) -> Position {
    designer.document().element(id).unwrap().position
}

#[test]
fn test_quick_short_press_is_a_click() {
    let (mut designer, id) = designer_with_box();

    assert_eq!(designer.pointer_down(sample(30.0, 30.0, 0.0)), PointerOutcome::Selected { id });
    assert_eq!(designer.pointer_move(sample(32.0, 30.0, 50.0)), PointerOutcome::None);
    assert_eq!(designer.pointer_up(sample(32.0, 30.0, 50.0)), PointerOutcome::Clicked { id });

    assert_eq!(position_of(&designer, id), Position::new(20.0, 20.0));
    assert_eq!(designer.selected(), Some(id));
}

#[test]
fn test_long_far_press_drags() {
    let (mut designer, id) = designer_with_box();

    designer.pointer_down(sample(30.0, 30.0, 0.0));
    let moved = designer.pointer_move(sample(50.0, 30.0, 300.0));
    assert_eq!(
        moved,
        PointerOutcome::Moved {
            id,
            position: Position::new(40.0, 20.0)
        }
    );
    assert!(designer.drag().is_dragging());

    designer.pointer_up(sample(50.0, 30.0, 320.0));
    assert_eq!(position_of(&designer, id), Position::new(40.0, 20.0));
    assert_eq!(designer.drag().state(), &DragState::Idle);
}

#[test]
fn test_release_without_moves_still_drags_when_thresholds_pass() {
    let (mut designer, id) = designer_with_box();

    designer.pointer_down(sample(30.0, 30.0, 0.0));
    let outcome = designer.pointer_up(sample(50.0, 30.0, 300.0));

    assert_eq!(
        outcome,
        PointerOutcome::Committed {
            id,
            position: Position::new(40.0, 20.0)
        }
    );
    assert_eq!(position_of(&designer, id), Position::new(40.0, 20.0));
}

#[test]
fn test_long_press_without_travel_is_a_click() {
    let (mut designer, id) = designer_with_box();

    designer.pointer_down(sample(30.0, 30.0, 0.0));
    assert_eq!(designer.pointer_move(sample(34.0, 33.0, 400.0)), PointerOutcome::None);
    assert_eq!(designer.pointer_up(sample(34.0, 33.0, 400.0)), PointerOutcome::Clicked { id });
    assert_eq!(position_of(&designer, id), Position::new(20.0, 20.0));
}

#[test]
fn test_drag_commits_inside_bounds() {
    let (mut designer, id) = designer_with_box();

    // Grab at offset (10, 10) and pull to raw (500, 300)
    designer.pointer_down(sample(30.0, 30.0, 0.0));
    designer.pointer_move(sample(510.0, 310.0, 300.0));
    let outcome = designer.pointer_up(sample(510.0, 310.0, 320.0));

    assert_eq!(
        outcome,
        PointerOutcome::Committed {
            id,
            position: Position::new(304.0, 194.0)
        }
    );
    assert_eq!(position_of(&designer, id), Position::new(304.0, 194.0));
}

#[test]
fn test_cancel_commits_last_position() {
    let (mut designer, id) = designer_with_box();

    designer.pointer_down(sample(30.0, 30.0, 0.0));
    designer.pointer_move(sample(130.0, 80.0, 300.0));
    let outcome = designer.cancel_pointer();

    assert_eq!(
        outcome,
        PointerOutcome::Committed {
            id,
            position: Position::new(120.0, 70.0)
        }
    );
    assert_eq!(position_of(&designer, id), Position::new(120.0, 70.0));
    assert_eq!(designer.drag().state(), &DragState::Idle);

    // Later moves do nothing once the interaction is over
    assert_eq!(designer.pointer_move(sample(200.0, 100.0, 500.0)), PointerOutcome::None);
}

#[test]
fn test_press_on_empty_surface_clears_selection() {
    let (mut designer, id) = designer_with_box();
    designer.select(Some(id));

    let outcome = designer.pointer_down(sample(300.0, 200.0, 0.0));
    assert_eq!(outcome, PointerOutcome::SelectionCleared);
    assert_eq!(designer.selected(), None);
}

#[test]
fn test_press_picks_topmost_element() {
    let (mut designer, below) = designer_with_box();
    let above = designer.add_element(ElementKind::Shape, None, None);
    assert_ne!(below, above);

    let outcome = designer.pointer_down(sample(25.0, 25.0, 0.0));
    assert_eq!(outcome, PointerOutcome::Selected { id: above });
}

#[test]
fn test_deleting_dragged_element_drops_the_drag() {
    let (mut designer, id) = designer_with_box();

    designer.pointer_down(sample(30.0, 30.0, 0.0));
    designer.pointer_move(sample(130.0, 80.0, 300.0));
    designer.delete_element(id);

    assert_eq!(designer.drag().state(), &DragState::Idle);
    assert_eq!(designer.pointer_up(sample(140.0, 80.0, 320.0)), PointerOutcome::None);
    assert!(designer.document().elements.is_empty());
}

#[test]
fn test_resize_during_drag_is_clamped() {
    let (mut designer, id) = designer_with_box();

    // Drag the box against the right edge: x = 304 for an 80px width
    designer.pointer_down(sample(30.0, 30.0, 0.0));
    designer.pointer_move(sample(400.0, 30.0, 300.0));
    assert!(designer.drag().is_dragging());
    assert_eq!(position_of(&designer, id), Position::new(304.0, 20.0));

    designer.apply_property_edit(id, &PropertyEdit::Width("200".into()));

    let element = designer.document().element(id).unwrap();
    assert_eq!(element.size, Size::new(200.0, 30.0));
    assert_eq!(element.position, Position::new(184.0, 20.0));
    assert!(designer.drag().is_dragging());
}
