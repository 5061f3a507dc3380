//! Error types for easing lookups

use serde::{Deserialize, Serialize};

/// Errors raised by the easing catalog.
///
/// Formulas themselves never fail; the only failure is resolving a name that
/// is not part of the fixed catalog.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EasingError {
    /// Name is neither a canonical curve name nor a snake_case alias.
    #[error("unknown easing curve: {name}")]
    UnknownCurve { name: String },
}

impl EasingError {
    pub fn unknown_curve(name: impl Into<String>) -> Self {
        Self::UnknownCurve { name: name.into() }
    }
}
