//! WASM API for the card designer
//!
//! The designer lives in WASM-owned storage; every export locks it for the
//! duration of one call. Mutating exports return the fresh display list so
//! the page can re-render without a second round trip.

use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::helpers::{
    deserialize, deserialize_optional, element_id, now_ms, serialize, template_from_u8,
};
use crate::config::DesignerConfig;
use crate::designer::CardDesigner;
use crate::editors::{GlobalEdit, PropertyEdit};
use crate::error::DesignerError;
use crate::interaction::{PointerOutcome, PointerSample};
use crate::models::{CardDocument, CardSide, ElementKind, ElementStyle, ElementUpdate, GlobalStylePatch};
use crate::renderers::DisplayList;
use crate::templates;
use crate::{wasm_info, wasm_log, wasm_warn};

// WASM-owned designer storage (canonical source of truth)
lazy_static! {
    static ref DESIGNER: Mutex<Option<CardDesigner>> = Mutex::new(None);
}

fn designer_guard() -> MutexGuard<'static, Option<CardDesigner>> {
    // Recover from a poisoned lock; the document is replaced wholesale by loads
    DESIGNER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Run `f` against the live designer
fn with_designer<T>(f: impl FnOnce(&mut CardDesigner) -> T) -> Result<T, JsValue> {
    let mut guard = designer_guard();
    let designer = guard.as_mut().ok_or_else(|| {
        wasm_warn!("No designer created");
        JsValue::from(DesignerError::NotInitialized)
    })?;
    Ok(f(designer))
}

/// Run a mutation and return the resulting display list
fn mutate(f: impl FnOnce(&mut CardDesigner)) -> Result<JsValue, JsValue> {
    let display = with_designer(|designer| {
        f(designer);
        designer.display_list()
    })?;
    serialize(&display, "DisplayList serialization error")
}

/// Result of a pointer event
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PointerResult {
    outcome: PointerOutcome,

    /// Present only when the event changed something visible
    display_list: Option<DisplayList>,
}

fn pointer(
    sample_js: JsValue,
    f: impl FnOnce(&mut CardDesigner, PointerSample) -> PointerOutcome,
) -> Result<JsValue, JsValue> {
    let mut sample: PointerSample = deserialize(sample_js, "PointerSample deserialization error")?;
    if sample.time_ms <= 0.0 {
        sample.time_ms = now_ms();
    }
    let result = with_designer(|designer| {
        let outcome = f(designer, sample);
        PointerResult {
            outcome,
            display_list: (outcome != PointerOutcome::None).then(|| designer.display_list()),
        }
    })?;
    serialize(&result, "PointerResult serialization error")
}

// ============================================================================
// Session
// ============================================================================

/// Create a new designer with an empty card and store it internally
///
/// # Parameters
/// - `config_js`: optional partial `DesignerConfig`
///
/// # Returns
/// The initial display list
#[wasm_bindgen(js_name = createDesigner)]
pub fn create_designer(config_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("createDesigner called");

    let config: DesignerConfig =
        deserialize_optional(config_js, "Config deserialization error")?.unwrap_or_default();
    wasm_log!("  Card {}x{}", config.card_width, config.card_height);

    let designer = CardDesigner::new(config);
    let display = designer.display_list();
    *designer_guard() = Some(designer);

    serialize(&display, "DisplayList serialization error")
}

/// Replace the card with the sample layout
#[wasm_bindgen(js_name = loadStarterLayout)]
pub fn load_starter_layout() -> Result<JsValue, JsValue> {
    wasm_info!("loadStarterLayout called");
    mutate(|designer| designer.load_starter_layout())
}

// ============================================================================
// Document operations
// ============================================================================

/// Add an element to the current side and select it
///
/// # Parameters
/// - `kind_js`: "text" | "qr" | "logo" | "icon" | "shape"
/// - `content`: optional initial content
/// - `style_js`: optional style overrides
///
/// # Returns
/// `{ id, displayList }`
#[wasm_bindgen(js_name = addElement)]
pub fn add_element(kind_js: JsValue, content: Option<String>, style_js: JsValue) -> Result<JsValue, JsValue> {
    let kind: ElementKind = deserialize(kind_js, "Element kind deserialization error")?;
    let style: Option<ElementStyle> = deserialize_optional(style_js, "Style deserialization error")?;
    wasm_info!("addElement called: kind={:?}", kind);

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Added {
        id: crate::models::ElementId,
        display_list: DisplayList,
    }

    let added = with_designer(|designer| {
        let id = designer.add_element(kind, content.as_deref(), style.as_ref());
        Added {
            id,
            display_list: designer.display_list(),
        }
    })?;
    serialize(&added, "AddElement serialization error")
}

/// Merge a partial update into an element (no-op for unknown ids)
#[wasm_bindgen(js_name = updateElement)]
pub fn update_element(id: u32, update_js: JsValue) -> Result<JsValue, JsValue> {
    let update: ElementUpdate = deserialize(update_js, "ElementUpdate deserialization error")?;
    mutate(|designer| designer.update_element(element_id(id), &update))
}

#[wasm_bindgen(js_name = deleteElement)]
pub fn delete_element(id: u32) -> Result<JsValue, JsValue> {
    wasm_info!("deleteElement called: id={}", id);
    mutate(|designer| designer.delete_element(element_id(id)))
}

#[wasm_bindgen(js_name = clearAll)]
pub fn clear_all() -> Result<JsValue, JsValue> {
    wasm_info!("clearAll called");
    mutate(|designer| designer.clear_all())
}

#[wasm_bindgen(js_name = setGlobalStyle)]
pub fn set_global_style(patch_js: JsValue) -> Result<JsValue, JsValue> {
    let patch: GlobalStylePatch = deserialize(patch_js, "GlobalStylePatch deserialization error")?;
    mutate(|designer| designer.set_global_style(&patch))
}

/// Switch between "front" and "back"
#[wasm_bindgen(js_name = setCurrentSide)]
pub fn set_current_side(side_js: JsValue) -> Result<JsValue, JsValue> {
    let side: CardSide = deserialize(side_js, "CardSide deserialization error")?;
    wasm_info!("setCurrentSide called: {:?}", side);
    mutate(|designer| designer.set_current_side(side))
}

/// Select an element, or clear the selection when `id` is undefined
#[wasm_bindgen(js_name = selectElement)]
pub fn select_element(id: Option<u32>) -> Result<JsValue, JsValue> {
    mutate(|designer| designer.select(id.map(element_id)))
}

// ============================================================================
// Property editors
// ============================================================================

/// Apply a properties-panel edit, e.g. `{ field: "width", value: "120" }`
#[wasm_bindgen(js_name = applyPropertyEdit)]
pub fn apply_property_edit(id: u32, edit_js: JsValue) -> Result<JsValue, JsValue> {
    let edit: PropertyEdit = deserialize(edit_js, "PropertyEdit deserialization error")?;
    wasm_log!("applyPropertyEdit: id={}, edit={:?}", id, edit);
    mutate(|designer| designer.apply_property_edit(element_id(id), &edit))
}

/// Apply a document-styling edit, e.g. `{ field: "template", value: 3 }`
#[wasm_bindgen(js_name = applyGlobalEdit)]
pub fn apply_global_edit(edit_js: JsValue) -> Result<JsValue, JsValue> {
    let edit: GlobalEdit = deserialize(edit_js, "GlobalEdit deserialization error")?;
    wasm_log!("applyGlobalEdit: {:?}", edit);
    mutate(|designer| designer.apply_global_edit(&edit))
}

// ============================================================================
// Pointer input
// ============================================================================

#[wasm_bindgen(js_name = pointerDown)]
pub fn pointer_down(sample_js: JsValue) -> Result<JsValue, JsValue> {
    pointer(sample_js, |designer, sample| designer.pointer_down(sample))
}

#[wasm_bindgen(js_name = pointerMove)]
pub fn pointer_move(sample_js: JsValue) -> Result<JsValue, JsValue> {
    pointer(sample_js, |designer, sample| designer.pointer_move(sample))
}

#[wasm_bindgen(js_name = pointerUp)]
pub fn pointer_up(sample_js: JsValue) -> Result<JsValue, JsValue> {
    pointer(sample_js, |designer, sample| designer.pointer_up(sample))
}

/// Pointer left the card surface or the window lost focus
#[wasm_bindgen(js_name = cancelPointer)]
pub fn cancel_pointer() -> Result<JsValue, JsValue> {
    let result = with_designer(|designer| {
        let outcome = designer.cancel_pointer();
        PointerResult {
            outcome,
            display_list: (outcome != PointerOutcome::None).then(|| designer.display_list()),
        }
    })?;
    serialize(&result, "PointerResult serialization error")
}

// ============================================================================
// Rendering
// ============================================================================

#[wasm_bindgen(js_name = getDisplayList)]
pub fn get_display_list() -> Result<JsValue, JsValue> {
    let display = with_designer(|designer| designer.display_list())?;
    serialize(&display, "DisplayList serialization error")
}

/// Picker thumbnails for every template
///
/// Uses the designer's configured thumbnail scale unless `scale` is given.
#[wasm_bindgen(js_name = getTemplateGallery)]
pub fn get_template_gallery(scale: Option<f64>) -> Result<JsValue, JsValue> {
    let scale = scale.unwrap_or_else(|| {
        designer_guard()
            .as_ref()
            .map(|d| d.config().thumbnail_scale)
            .unwrap_or_else(|| DesignerConfig::default().thumbnail_scale)
    });
    serialize(&templates::template_gallery(scale), "Gallery serialization error")
}

/// Full-size style descriptor of one template
#[wasm_bindgen(js_name = resolveTemplate)]
pub fn resolve_template(template: u8) -> Result<JsValue, JsValue> {
    let template = template_from_u8(template)?;
    serialize(templates::resolve(template), "StyleDescriptor serialization error")
}

/// SVG preview of the current side
#[wasm_bindgen(js_name = renderSvg)]
pub fn render_svg() -> Result<String, JsValue> {
    wasm_info!("renderSvg called");
    Ok(with_designer(|designer| designer.render_svg())??)
}

// ============================================================================
// Snapshots
// ============================================================================

/// Current document as a JS object
#[wasm_bindgen(js_name = getDocumentSnapshot)]
pub fn get_document_snapshot() -> Result<JsValue, JsValue> {
    let document = with_designer(|designer| designer.document().clone())?;
    serialize(&document, "Document serialization error")
}

/// Replace the document with one handed over by the page
#[wasm_bindgen(js_name = loadDocument)]
pub fn load_document(document_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("loadDocument called");
    let document: CardDocument = deserialize(document_js, "Document deserialization error")?;
    wasm_log!("  Document has {} elements", document.elements.len());
    with_designer(|designer| designer.load_document(document))??;
    get_display_list()
}

#[wasm_bindgen(js_name = snapshotJson)]
pub fn snapshot_json() -> Result<String, JsValue> {
    Ok(with_designer(|designer| designer.snapshot_json())??)
}

#[wasm_bindgen(js_name = loadSnapshotJson)]
pub fn load_snapshot_json(json: &str) -> Result<JsValue, JsValue> {
    wasm_info!("loadSnapshotJson called ({} bytes)", json.len());
    with_designer(|designer| designer.load_snapshot_json(json))??;
    get_display_list()
}
