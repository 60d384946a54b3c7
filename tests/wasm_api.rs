//! Browser tests for the exported WASM API

#![cfg(target_arch = "wasm32")]

use card_designer_wasm::api;
use card_designer_wasm::renderers::DisplayList;
use card_designer_wasm::CardDocument;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn display_list(value: JsValue) -> DisplayList {
    serde_wasm_bindgen::from_value(value).unwrap()
}

#[wasm_bindgen_test]
fn test_create_designer_returns_empty_front() {
    let display = display_list(api::create_designer(JsValue::UNDEFINED).unwrap());
    assert!(display.elements.is_empty());
    assert_eq!(display.surface.width, 384.0);
}

#[wasm_bindgen_test]
fn test_starter_layout_and_svg() {
    api::create_designer(JsValue::UNDEFINED).unwrap();
    let display = display_list(api::load_starter_layout().unwrap());
    assert_eq!(display.elements.len(), 4);

    let svg = api::render_svg().unwrap();
    assert!(svg.contains("Jane Doe"));
}

#[wasm_bindgen_test]
fn test_property_edit_from_js_object() {
    api::create_designer(JsValue::UNDEFINED).unwrap();
    let added = api::add_element(JsValue::from_str("text"), Some("Hello".to_string()), JsValue::NULL).unwrap();
    let id = js_sys::Reflect::get(&added, &JsValue::from_str("id")).unwrap().as_f64().unwrap() as u32;

    let edit = js_sys::JSON::parse(r#"{"field":"positionX","value":"1000"}"#).unwrap();
    let display = display_list(api::apply_property_edit(id, edit).unwrap());
    assert_eq!(display.elements[0].x, 284.0);
}

#[wasm_bindgen_test]
fn test_snapshot_round_trip_through_js() {
    api::create_designer(JsValue::UNDEFINED).unwrap();
    api::load_starter_layout().unwrap();
    let json = api::snapshot_json().unwrap();

    api::clear_all().unwrap();
    api::load_snapshot_json(&json).unwrap();

    let snapshot: CardDocument = serde_wasm_bindgen::from_value(api::get_document_snapshot().unwrap()).unwrap();
    assert_eq!(snapshot.elements.len(), 7);
}

#[wasm_bindgen_test]
fn test_unknown_template_is_an_error() {
    assert!(api::resolve_template(200).is_err());
    assert!(api::resolve_template(11).is_ok());
}
