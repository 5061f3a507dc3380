//! Vizij Easing Core (engine-agnostic)
//!
//! A fixed catalog of easing (timing) curves in the easings.net set: pure
//! functions from normalized progress to eased output. Curves are addressed
//! either by the typed [`Curve`] key or by name through [`EasingCatalog`];
//! an unknown name is the only error.
//!
//! ```
//! use vizij_easing_core::{ease, Curve};
//!
//! assert_eq!(ease("easeOutBounce", 0.5).unwrap(), 0.765625);
//! assert_eq!(Curve::EaseInOutBack.apply(0.5), 0.5);
//! ```

pub mod baking;
pub mod catalog;
pub mod curve;
pub mod derivative;
pub mod error;
pub mod functions;

// Re-exports for consumers (adapters)
pub use baking::{
    bake_curve, bake_curve_with_derivatives, bake_named, export_baked_json,
    export_baked_with_derivatives_json, BakedCurve, BakedDerivativeCurve, BakingConfig,
    MAX_SAMPLES,
};
pub use catalog::{ease, resolve, CatalogEntry, EasingCatalog, TimingModeFn};
pub use curve::{Curve, CurveDirection, CurveFamily};
pub use derivative::{derivative, DEFAULT_DERIVATIVE_EPSILON};
pub use error::EasingError;

/// Easing result type
pub type Result<T> = core::result::Result<T, EasingError>;
