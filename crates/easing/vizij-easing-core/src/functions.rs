//! Easing formulas (easings.net set) over normalized progress.
//!
//! Every function is total: inputs outside [0,1] are not clamped and
//! extrapolate (or produce NaN for the circular family) the way the closed
//! form dictates. Exponential and elastic curves, plus the three curves whose
//! textbook form misses an endpoint by an ulp, guard x == 0 / x == 1.

use std::f64::consts::PI;

const C1: f64 = 1.70158;
const C2: f64 = C1 * 1.525;
const C3: f64 = C1 + 1.0;
const C4: f64 = (2.0 * PI) / 3.0;
const C5: f64 = (2.0 * PI) / 4.5;

const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

/// Four-segment piecewise quadratic shared by the bounce family.
#[inline]
fn bounce_out(x: f64) -> f64 {
    if x < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * x * x
    } else if x < 2.0 / BOUNCE_D1 {
        let x = x - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.75
    } else if x < 2.5 / BOUNCE_D1 {
        let x = x - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.984375
    }
}

/// Identity.
#[inline]
pub fn linear(x: f64) -> f64 {
    x
}

// =============================================================================
// Power family
// =============================================================================

/// Quadratic ease-in: `x²`
#[inline]
pub fn ease_in_quad(x: f64) -> f64 {
    x * x
}

/// Quadratic ease-out: `1 - (1-x)²`
#[inline]
pub fn ease_out_quad(x: f64) -> f64 {
    1.0 - (1.0 - x) * (1.0 - x)
}

#[inline]
pub fn ease_in_out_quad(x: f64) -> f64 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powf(2.0) / 2.0
    }
}

/// Cubic ease-in: `x³`
#[inline]
pub fn ease_in_cubic(x: f64) -> f64 {
    x * x * x
}

/// Cubic ease-out: `1 - (1-x)³`
#[inline]
pub fn ease_out_cubic(x: f64) -> f64 {
    1.0 - (1.0 - x).powf(3.0)
}

#[inline]
pub fn ease_in_out_cubic(x: f64) -> f64 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powf(3.0) / 2.0
    }
}

#[inline]
pub fn ease_in_quart(x: f64) -> f64 {
    x * x * x * x
}

#[inline]
pub fn ease_out_quart(x: f64) -> f64 {
    1.0 - (1.0 - x).powf(4.0)
}

#[inline]
pub fn ease_in_out_quart(x: f64) -> f64 {
    if x < 0.5 {
        8.0 * x * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powf(4.0) / 2.0
    }
}

#[inline]
pub fn ease_in_quint(x: f64) -> f64 {
    x * x * x * x * x
}

#[inline]
pub fn ease_out_quint(x: f64) -> f64 {
    1.0 - (1.0 - x).powf(5.0)
}

#[inline]
pub fn ease_in_out_quint(x: f64) -> f64 {
    if x < 0.5 {
        16.0 * x * x * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powf(5.0) / 2.0
    }
}

// =============================================================================
// Sinusoidal
// =============================================================================

/// Sinusoidal ease-in: `1 - cos(xπ/2)`.
///
/// `cos(π/2)` rounds to 6.1e-17 in doubles, so x == 1 is pinned to 1.
#[inline]
pub fn ease_in_sine(x: f64) -> f64 {
    if x == 1.0 {
        return 1.0;
    }
    1.0 - ((x * PI) / 2.0).cos()
}

/// Sinusoidal ease-out: `sin(xπ/2)`
#[inline]
pub fn ease_out_sine(x: f64) -> f64 {
    ((x * PI) / 2.0).sin()
}

#[inline]
pub fn ease_in_out_sine(x: f64) -> f64 {
    -((PI * x).cos() - 1.0) / 2.0
}

// =============================================================================
// Exponential
// =============================================================================

#[inline]
pub fn ease_in_expo(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * x - 10.0)
    }
}

#[inline]
pub fn ease_out_expo(x: f64) -> f64 {
    if x == 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * x)
    }
}

#[inline]
pub fn ease_in_out_expo(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else if x < 0.5 {
        2f64.powf(20.0 * x - 10.0) / 2.0
    } else {
        (2.0 - 2f64.powf(-20.0 * x + 10.0)) / 2.0
    }
}

// =============================================================================
// Circular
// =============================================================================

/// Circular ease-in: `1 - sqrt(1 - x²)`. NaN for |x| > 1.
#[inline]
pub fn ease_in_circ(x: f64) -> f64 {
    1.0 - (1.0 - x.powf(2.0)).sqrt()
}

/// Circular ease-out: `sqrt(1 - (x-1)²)`. NaN outside [0,2].
#[inline]
pub fn ease_out_circ(x: f64) -> f64 {
    (1.0 - (x - 1.0).powf(2.0)).sqrt()
}

#[inline]
pub fn ease_in_out_circ(x: f64) -> f64 {
    if x < 0.5 {
        (1.0 - (1.0 - (2.0 * x).powf(2.0)).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * x + 2.0).powf(2.0)).sqrt() + 1.0) / 2.0
    }
}

// =============================================================================
// Back (overshoot)
// =============================================================================

/// Back ease-in: dips below 0 before accelerating to 1.
///
/// `c3 - c1` is one ulp short of 1, so x == 1 is pinned.
#[inline]
pub fn ease_in_back(x: f64) -> f64 {
    if x == 1.0 {
        return 1.0;
    }
    C3 * x * x * x - C1 * x * x
}

/// Back ease-out: overshoots 1 before settling.
///
/// `1 - c3 + c1` leaves 2.2e-16 behind at x == 0, which is pinned.
#[inline]
pub fn ease_out_back(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    1.0 + C3 * (x - 1.0).powf(3.0) + C1 * (x - 1.0).powf(2.0)
}

#[inline]
pub fn ease_in_out_back(x: f64) -> f64 {
    if x < 0.5 {
        ((2.0 * x).powf(2.0) * ((C2 + 1.0) * 2.0 * x - C2)) / 2.0
    } else {
        ((2.0 * x - 2.0).powf(2.0) * ((C2 + 1.0) * (x * 2.0 - 2.0) + C2) + 2.0) / 2.0
    }
}

// =============================================================================
// Elastic (overshoot)
// =============================================================================

#[inline]
pub fn ease_in_elastic(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else {
        -2f64.powf(10.0 * x - 10.0) * ((x * 10.0 - 10.75) * C4).sin()
    }
}

#[inline]
pub fn ease_out_elastic(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else {
        2f64.powf(-10.0 * x) * ((x * 10.0 - 0.75) * C4).sin() + 1.0
    }
}

#[inline]
pub fn ease_in_out_elastic(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else if x < 0.5 {
        -(2f64.powf(20.0 * x - 10.0) * ((20.0 * x - 11.125) * C5).sin()) / 2.0
    } else {
        (2f64.powf(-20.0 * x + 10.0) * ((20.0 * x - 11.125) * C5).sin()) / 2.0 + 1.0
    }
}

// =============================================================================
// Bounce
// =============================================================================

/// Time-reversed [`ease_out_bounce`].
#[inline]
pub fn ease_in_bounce(x: f64) -> f64 {
    1.0 - bounce_out(1.0 - x)
}

#[inline]
pub fn ease_out_bounce(x: f64) -> f64 {
    bounce_out(x)
}

#[inline]
pub fn ease_in_out_bounce(x: f64) -> f64 {
    if x < 0.5 {
        (1.0 - bounce_out(1.0 - 2.0 * x)) / 2.0
    } else {
        (1.0 + bounce_out(2.0 * x - 1.0)) / 2.0
    }
}
