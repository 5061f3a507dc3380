//! Slope estimates for easing curves.

use crate::catalog::TimingModeFn;

/// Default half-width of the symmetric finite difference.
pub const DEFAULT_DERIVATIVE_EPSILON: f64 = 1e-4;

/// Estimate `d f / d x` at `x` using `(f(x+eps) - f(x-eps)) / 2eps`.
///
/// Returns `None` when `eps` is not a positive finite number. Near a guarded
/// endpoint or a piecewise seam the estimate straddles both sides.
pub fn derivative(f: TimingModeFn, x: f64, eps: f64) -> Option<f64> {
    if !eps.is_finite() || eps <= 0.0 {
        return None;
    }
    let forward = f(x + eps);
    let backward = f(x - eps);
    Some((forward - backward) / (2.0 * eps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::{ease_in_quad, linear};

    #[test]
    fn rejects_bad_epsilon() {
        assert_eq!(derivative(linear, 0.5, 0.0), None);
        assert_eq!(derivative(linear, 0.5, -1e-3), None);
        assert_eq!(derivative(linear, 0.5, f64::NAN), None);
    }

    #[test]
    fn quad_slope_is_two_x() {
        let d = derivative(ease_in_quad, 0.3, DEFAULT_DERIVATIVE_EPSILON).unwrap();
        assert!((d - 0.6).abs() < 1e-9, "{d}");
    }
}
