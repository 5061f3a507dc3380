#![cfg(target_arch = "wasm32")]
use serde_json::Value as JsonValue;
use serde_wasm_bindgen as swb;
use vizij_easing_core::BakingConfig;
use vizij_easing_wasm::{abi_version, bake_curve_js, curve_names, ease, VizijEasing};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn ease_by_name() {
    assert_eq!(ease("easeOutBounce", 0.5).unwrap(), 0.765625);
    assert_eq!(ease("ease_in_out_back", 0.5).unwrap(), 0.5);
    assert!(ease("easeSideways", 0.5).is_err());
}

#[wasm_bindgen_test]
fn names_are_listed_in_order() {
    let names = curve_names();
    assert_eq!(names.length(), 31);
    assert_eq!(names.get(0).as_string().as_deref(), Some("linear"));
    assert_eq!(names.get(30).as_string().as_deref(), Some("easeInOutBounce"));
}

#[wasm_bindgen_test]
fn handle_resolves_once() {
    let easing = VizijEasing::new("ease_in_quad").unwrap();
    assert_eq!(easing.name(), "easeInQuad");
    assert_eq!(easing.value(0.5), 0.25);
    assert!((easing.derivative(0.5, None) - 1.0).abs() < 1e-6);
    assert!(VizijEasing::new("nope").is_err());
}

#[wasm_bindgen_test]
fn handle_derivative_takes_optional_epsilon() {
    let easing = VizijEasing::new("easeInCubic").unwrap();
    // Central difference of x^3 overshoots the true slope by eps^2.
    let coarse = easing.derivative(0.5, Some(1e-1));
    assert!((coarse - 0.76).abs() < 1e-9);
    let fine = easing.derivative(0.5, Some(1e-3));
    assert!((fine - 0.75).abs() < 1e-5);
    // Non-positive epsilon falls back to the default step.
    assert_eq!(
        easing.derivative(0.5, Some(-1.0)).to_bits(),
        easing.derivative(0.5, None).to_bits()
    );
}

#[wasm_bindgen_test]
fn bake_with_default_and_custom_config() {
    let out = bake_curve_js("linear", JsValue::UNDEFINED).unwrap();
    let json: JsonValue = swb::from_value(out).unwrap();
    assert_eq!(json["values"].as_array().unwrap().len(), 64);

    let cfg = swb::to_value(&BakingConfig {
        samples: 3,
        ..Default::default()
    })
    .unwrap();
    let out = bake_curve_js("easeInQuad", cfg).unwrap();
    let json: JsonValue = swb::from_value(out).unwrap();
    assert_eq!(json["curve"], "easeInQuad");
    // JS numbers come back without an int/float distinction.
    let values: Vec<f64> = json["values"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(JsonValue::as_f64)
        .collect();
    assert_eq!(values, vec![0.0, 0.25, 1.0]);
}
