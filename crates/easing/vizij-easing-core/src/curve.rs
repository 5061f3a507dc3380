//! Typed curve identifiers.
//!
//! [`Curve`] is the closed key set of the catalog. Each variant has a
//! canonical camelCase name (`"easeInOutQuad"`) and a snake_case alias
//! (`"ease_in_out_quad"`); serde writes the canonical name and reads either.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{EasingCatalog, TimingModeFn};
use crate::error::EasingError;
use crate::functions;

/// One entry of the easing catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Curve {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

/// Base shape shared by the in/out/in-out variants of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveFamily {
    Linear,
    Quad,
    Cubic,
    Quart,
    Quint,
    Sine,
    Expo,
    Circ,
    Back,
    Elastic,
    Bounce,
}

/// Which end(s) of the curve carry the acceleration effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveDirection {
    In,
    Out,
    InOut,
}

impl Curve {
    /// Every curve in canonical catalog order.
    pub const ALL: [Curve; 31] = [
        Curve::Linear,
        Curve::EaseInQuad,
        Curve::EaseOutQuad,
        Curve::EaseInOutQuad,
        Curve::EaseInCubic,
        Curve::EaseOutCubic,
        Curve::EaseInOutCubic,
        Curve::EaseInQuart,
        Curve::EaseOutQuart,
        Curve::EaseInOutQuart,
        Curve::EaseInQuint,
        Curve::EaseOutQuint,
        Curve::EaseInOutQuint,
        Curve::EaseInSine,
        Curve::EaseOutSine,
        Curve::EaseInOutSine,
        Curve::EaseInExpo,
        Curve::EaseOutExpo,
        Curve::EaseInOutExpo,
        Curve::EaseInCirc,
        Curve::EaseOutCirc,
        Curve::EaseInOutCirc,
        Curve::EaseInBack,
        Curve::EaseOutBack,
        Curve::EaseInOutBack,
        Curve::EaseInElastic,
        Curve::EaseOutElastic,
        Curve::EaseInOutElastic,
        Curve::EaseInBounce,
        Curve::EaseOutBounce,
        Curve::EaseInOutBounce,
    ];

    /// Canonical (camelCase) name.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "easeInQuad",
            Self::EaseOutQuad => "easeOutQuad",
            Self::EaseInOutQuad => "easeInOutQuad",
            Self::EaseInCubic => "easeInCubic",
            Self::EaseOutCubic => "easeOutCubic",
            Self::EaseInOutCubic => "easeInOutCubic",
            Self::EaseInQuart => "easeInQuart",
            Self::EaseOutQuart => "easeOutQuart",
            Self::EaseInOutQuart => "easeInOutQuart",
            Self::EaseInQuint => "easeInQuint",
            Self::EaseOutQuint => "easeOutQuint",
            Self::EaseInOutQuint => "easeInOutQuint",
            Self::EaseInSine => "easeInSine",
            Self::EaseOutSine => "easeOutSine",
            Self::EaseInOutSine => "easeInOutSine",
            Self::EaseInExpo => "easeInExpo",
            Self::EaseOutExpo => "easeOutExpo",
            Self::EaseInOutExpo => "easeInOutExpo",
            Self::EaseInCirc => "easeInCirc",
            Self::EaseOutCirc => "easeOutCirc",
            Self::EaseInOutCirc => "easeInOutCirc",
            Self::EaseInBack => "easeInBack",
            Self::EaseOutBack => "easeOutBack",
            Self::EaseInOutBack => "easeInOutBack",
            Self::EaseInElastic => "easeInElastic",
            Self::EaseOutElastic => "easeOutElastic",
            Self::EaseInOutElastic => "easeInOutElastic",
            Self::EaseInBounce => "easeInBounce",
            Self::EaseOutBounce => "easeOutBounce",
            Self::EaseInOutBounce => "easeInOutBounce",
        }
    }

    /// snake_case alias accepted by lookups (`"ease_in_out_quad"`).
    #[inline]
    pub fn alias(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "ease_in_quad",
            Self::EaseOutQuad => "ease_out_quad",
            Self::EaseInOutQuad => "ease_in_out_quad",
            Self::EaseInCubic => "ease_in_cubic",
            Self::EaseOutCubic => "ease_out_cubic",
            Self::EaseInOutCubic => "ease_in_out_cubic",
            Self::EaseInQuart => "ease_in_quart",
            Self::EaseOutQuart => "ease_out_quart",
            Self::EaseInOutQuart => "ease_in_out_quart",
            Self::EaseInQuint => "ease_in_quint",
            Self::EaseOutQuint => "ease_out_quint",
            Self::EaseInOutQuint => "ease_in_out_quint",
            Self::EaseInSine => "ease_in_sine",
            Self::EaseOutSine => "ease_out_sine",
            Self::EaseInOutSine => "ease_in_out_sine",
            Self::EaseInExpo => "ease_in_expo",
            Self::EaseOutExpo => "ease_out_expo",
            Self::EaseInOutExpo => "ease_in_out_expo",
            Self::EaseInCirc => "ease_in_circ",
            Self::EaseOutCirc => "ease_out_circ",
            Self::EaseInOutCirc => "ease_in_out_circ",
            Self::EaseInBack => "ease_in_back",
            Self::EaseOutBack => "ease_out_back",
            Self::EaseInOutBack => "ease_in_out_back",
            Self::EaseInElastic => "ease_in_elastic",
            Self::EaseOutElastic => "ease_out_elastic",
            Self::EaseInOutElastic => "ease_in_out_elastic",
            Self::EaseInBounce => "ease_in_bounce",
            Self::EaseOutBounce => "ease_out_bounce",
            Self::EaseInOutBounce => "ease_in_out_bounce",
        }
    }

    pub fn family(self) -> CurveFamily {
        match self {
            Self::Linear => CurveFamily::Linear,
            Self::EaseInQuad | Self::EaseOutQuad | Self::EaseInOutQuad => CurveFamily::Quad,
            Self::EaseInCubic | Self::EaseOutCubic | Self::EaseInOutCubic => CurveFamily::Cubic,
            Self::EaseInQuart | Self::EaseOutQuart | Self::EaseInOutQuart => CurveFamily::Quart,
            Self::EaseInQuint | Self::EaseOutQuint | Self::EaseInOutQuint => CurveFamily::Quint,
            Self::EaseInSine | Self::EaseOutSine | Self::EaseInOutSine => CurveFamily::Sine,
            Self::EaseInExpo | Self::EaseOutExpo | Self::EaseInOutExpo => CurveFamily::Expo,
            Self::EaseInCirc | Self::EaseOutCirc | Self::EaseInOutCirc => CurveFamily::Circ,
            Self::EaseInBack | Self::EaseOutBack | Self::EaseInOutBack => CurveFamily::Back,
            Self::EaseInElastic | Self::EaseOutElastic | Self::EaseInOutElastic => {
                CurveFamily::Elastic
            }
            Self::EaseInBounce | Self::EaseOutBounce | Self::EaseInOutBounce => {
                CurveFamily::Bounce
            }
        }
    }

    /// `None` for [`Curve::Linear`].
    pub fn direction(self) -> Option<CurveDirection> {
        match self {
            Self::Linear => None,
            Self::EaseInQuad
            | Self::EaseInCubic
            | Self::EaseInQuart
            | Self::EaseInQuint
            | Self::EaseInSine
            | Self::EaseInExpo
            | Self::EaseInCirc
            | Self::EaseInBack
            | Self::EaseInElastic
            | Self::EaseInBounce => Some(CurveDirection::In),
            Self::EaseOutQuad
            | Self::EaseOutCubic
            | Self::EaseOutQuart
            | Self::EaseOutQuint
            | Self::EaseOutSine
            | Self::EaseOutExpo
            | Self::EaseOutCirc
            | Self::EaseOutBack
            | Self::EaseOutElastic
            | Self::EaseOutBounce => Some(CurveDirection::Out),
            Self::EaseInOutQuad
            | Self::EaseInOutCubic
            | Self::EaseInOutQuart
            | Self::EaseInOutQuint
            | Self::EaseInOutSine
            | Self::EaseInOutExpo
            | Self::EaseInOutCirc
            | Self::EaseInOutBack
            | Self::EaseInOutElastic
            | Self::EaseInOutBounce => Some(CurveDirection::InOut),
        }
    }

    /// Back and elastic curves leave [0,1] transiently.
    #[inline]
    pub fn overshoots(self) -> bool {
        matches!(self.family(), CurveFamily::Back | CurveFamily::Elastic)
    }

    /// Function pointer for this curve.
    pub fn timing_fn(self) -> TimingModeFn {
        match self {
            Self::Linear => functions::linear,
            Self::EaseInQuad => functions::ease_in_quad,
            Self::EaseOutQuad => functions::ease_out_quad,
            Self::EaseInOutQuad => functions::ease_in_out_quad,
            Self::EaseInCubic => functions::ease_in_cubic,
            Self::EaseOutCubic => functions::ease_out_cubic,
            Self::EaseInOutCubic => functions::ease_in_out_cubic,
            Self::EaseInQuart => functions::ease_in_quart,
            Self::EaseOutQuart => functions::ease_out_quart,
            Self::EaseInOutQuart => functions::ease_in_out_quart,
            Self::EaseInQuint => functions::ease_in_quint,
            Self::EaseOutQuint => functions::ease_out_quint,
            Self::EaseInOutQuint => functions::ease_in_out_quint,
            Self::EaseInSine => functions::ease_in_sine,
            Self::EaseOutSine => functions::ease_out_sine,
            Self::EaseInOutSine => functions::ease_in_out_sine,
            Self::EaseInExpo => functions::ease_in_expo,
            Self::EaseOutExpo => functions::ease_out_expo,
            Self::EaseInOutExpo => functions::ease_in_out_expo,
            Self::EaseInCirc => functions::ease_in_circ,
            Self::EaseOutCirc => functions::ease_out_circ,
            Self::EaseInOutCirc => functions::ease_in_out_circ,
            Self::EaseInBack => functions::ease_in_back,
            Self::EaseOutBack => functions::ease_out_back,
            Self::EaseInOutBack => functions::ease_in_out_back,
            Self::EaseInElastic => functions::ease_in_elastic,
            Self::EaseOutElastic => functions::ease_out_elastic,
            Self::EaseInOutElastic => functions::ease_in_out_elastic,
            Self::EaseInBounce => functions::ease_in_bounce,
            Self::EaseOutBounce => functions::ease_out_bounce,
            Self::EaseInOutBounce => functions::ease_in_out_bounce,
        }
    }

    /// Evaluate the curve at progress `x`.
    ///
    /// # Example
    ///
    /// ```
    /// use vizij_easing_core::Curve;
    ///
    /// assert_eq!(Curve::Linear.apply(0.25), 0.25);
    /// assert!(Curve::EaseOutQuad.apply(0.5) > 0.5);
    /// ```
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        (self.timing_fn())(x)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EasingCatalog::global().curve(s)
    }
}

impl TryFrom<String> for Curve {
    type Error = EasingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Curve> for &'static str {
    #[inline]
    fn from(curve: Curve) -> Self {
        curve.name()
    }
}
