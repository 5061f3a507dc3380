//! Baking API: sample an easing curve into a lookup table over a progress window.

use serde::{Deserialize, Serialize};

use crate::catalog::EasingCatalog;
use crate::curve::Curve;
use crate::derivative::{derivative, DEFAULT_DERIVATIVE_EPSILON};
use crate::Result;

const DEFAULT_SAMPLES: usize = 64;
/// Upper bound on `BakingConfig::samples`; larger requests are clamped.
pub const MAX_SAMPLES: usize = 1 << 20;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BakingConfig {
    /// Number of samples, inclusive of both window ends.
    pub samples: usize,
    /// First progress value sampled.
    pub start: f64,
    /// Last progress value sampled.
    pub end: f64,
    /// Optional override for the finite-difference epsilon used when estimating derivatives.
    pub derivative_epsilon: Option<f64>,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            start: 0.0,
            end: 1.0,
            derivative_epsilon: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedCurve {
    pub curve: Curve,
    pub start: f64,
    pub end: f64,
    /// Eased output at each evenly spaced progress value.
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedDerivativeCurve {
    pub curve: Curve,
    pub start: f64,
    pub end: f64,
    pub epsilon: f64,
    pub values: Vec<f64>,
}

impl BakedCurve {
    /// Progress value of sample `i`.
    pub fn progress_at(&self, i: usize) -> f64 {
        progress_at(self.start, self.end, self.values.len(), i)
    }
}

struct Window {
    samples: usize,
    start: f64,
    end: f64,
    epsilon: f64,
}

fn sanitize(cfg: &BakingConfig) -> Window {
    let samples = match cfg.samples {
        0 => {
            log::warn!("baking: samples must be > 0; using {DEFAULT_SAMPLES}");
            DEFAULT_SAMPLES
        }
        n if n > MAX_SAMPLES => {
            log::warn!("baking: {n} samples exceeds {MAX_SAMPLES}; clamping");
            MAX_SAMPLES
        }
        n => n,
    };
    let start = if cfg.start.is_finite() {
        cfg.start
    } else {
        log::warn!("baking: non-finite start {}; using 0", cfg.start);
        0.0
    };
    let mut end = if cfg.end.is_finite() {
        cfg.end
    } else {
        log::warn!("baking: non-finite end {}; using 1", cfg.end);
        1.0
    };
    if end < start {
        log::warn!("baking: end {end} precedes start {start}; collapsing window");
        end = start;
    }
    let epsilon = match cfg.derivative_epsilon {
        Some(eps) if eps.is_finite() && eps > 0.0 => eps,
        Some(eps) => {
            log::warn!("baking: invalid derivative epsilon {eps}; using default");
            DEFAULT_DERIVATIVE_EPSILON
        }
        None => DEFAULT_DERIVATIVE_EPSILON,
    };
    Window {
        samples,
        start,
        end,
        epsilon,
    }
}

#[inline]
fn progress_at(start: f64, end: f64, samples: usize, i: usize) -> f64 {
    if samples <= 1 {
        return start;
    }
    if i + 1 == samples {
        return end;
    }
    start + (end - start) * (i as f64 / (samples - 1) as f64)
}

/// Bake `curve` using the provided config.
pub fn bake_curve(curve: Curve, cfg: &BakingConfig) -> BakedCurve {
    let w = sanitize(cfg);
    let f = curve.timing_fn();
    let values = (0..w.samples)
        .map(|i| f(progress_at(w.start, w.end, w.samples, i)))
        .collect();
    BakedCurve {
        curve,
        start: w.start,
        end: w.end,
        values,
    }
}

/// Bake values and slopes simultaneously.
pub fn bake_curve_with_derivatives(
    curve: Curve,
    cfg: &BakingConfig,
) -> (BakedCurve, BakedDerivativeCurve) {
    let w = sanitize(cfg);
    let f = curve.timing_fn();
    let mut values = Vec::with_capacity(w.samples);
    let mut slopes = Vec::with_capacity(w.samples);
    for i in 0..w.samples {
        let u = progress_at(w.start, w.end, w.samples, i);
        values.push(f(u));
        // epsilon is sanitized to a positive finite value above
        slopes.push(derivative(f, u, w.epsilon).unwrap_or(0.0));
    }
    (
        BakedCurve {
            curve,
            start: w.start,
            end: w.end,
            values,
        },
        BakedDerivativeCurve {
            curve,
            start: w.start,
            end: w.end,
            epsilon: w.epsilon,
            values: slopes,
        },
    )
}

/// Resolve `name` through the global catalog, then bake it.
pub fn bake_named(name: &str, cfg: &BakingConfig) -> Result<BakedCurve> {
    let curve = EasingCatalog::global().curve(name)?;
    Ok(bake_curve(curve, cfg))
}

/// Export baked data as serde_json::Value (stable schema for FFI/serialization).
pub fn export_baked_json(baked: &BakedCurve) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}

/// Export baked values and derivatives as serde_json::Value.
pub fn export_baked_with_derivatives_json(
    baked: &BakedCurve,
    derivatives: &BakedDerivativeCurve,
) -> serde_json::Value {
    serde_json::json!({
        "values": baked,
        "derivatives": derivatives,
    })
}
