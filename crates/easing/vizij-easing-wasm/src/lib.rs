//! vizij-easing-wasm: JS-friendly wrapper over vizij-easing-core.

use js_sys::Array;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vizij_easing_core::{
    bake_curve, derivative, BakingConfig, Curve, EasingCatalog, TimingModeFn,
    DEFAULT_DERIVATIVE_EPSILON,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn lookup(name: &str) -> Result<Curve, JsError> {
    EasingCatalog::global()
        .curve(name)
        .map_err(|e| JsError::new(&format!("lookup error: {e}")))
}

/// A resolved curve. Resolve once, evaluate many times.
#[wasm_bindgen]
pub struct VizijEasing {
    curve: Curve,
    func: TimingModeFn,
}

#[wasm_bindgen]
impl VizijEasing {
    /// Resolve a curve by canonical name or snake_case alias.
    /// Example:
    ///   new VizijEasing("easeOutBounce")
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> Result<VizijEasing, JsError> {
        #[cfg(feature = "console_error")]
        console_error_panic_hook::set_once();

        let curve = lookup(name)?;
        Ok(VizijEasing {
            curve,
            func: curve.timing_fn(),
        })
    }

    /// Canonical name of the resolved curve.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.curve.name().to_string()
    }

    /// Eased output at progress `x`.
    pub fn value(&self, x: f64) -> f64 {
        (self.func)(x)
    }

    /// Finite-difference slope at `x`; `eps` defaults when omitted or invalid.
    pub fn derivative(&self, x: f64, eps: Option<f64>) -> f64 {
        let eps = eps
            .filter(|e| e.is_finite() && *e > 0.0)
            .unwrap_or(DEFAULT_DERIVATIVE_EPSILON);
        derivative(self.func, x, eps).unwrap_or(f64::NAN)
    }
}

/// Evaluate the named curve at `x`.
#[wasm_bindgen]
pub fn ease(name: &str, x: f64) -> Result<f64, JsError> {
    Ok(lookup(name)?.apply(x))
}

/// Canonical curve names in catalog order.
#[wasm_bindgen(js_name = curve_names)]
pub fn curve_names() -> Array {
    EasingCatalog::global()
        .names()
        .map(JsValue::from_str)
        .collect()
}

/// Bake a curve into a sample table. Pass a JSON config object or undefined/null for defaults.
/// Returns `{ curve, start, end, values }`.
#[wasm_bindgen(js_name = bake_curve)]
pub fn bake_curve_js(name: &str, config: JsValue) -> Result<JsValue, JsError> {
    let curve = lookup(name)?;
    let cfg: BakingConfig = if jsvalue_is_undefined_or_null(&config) {
        BakingConfig::default()
    } else {
        swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
    };
    let baked = bake_curve(curve, &cfg);
    swb::to_value(&baked).map_err(|e| JsError::new(&format!("bake output error: {e}")))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
