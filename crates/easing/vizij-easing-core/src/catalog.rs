//! Name-keyed easing catalog.
//!
//! The catalog is built once, on first use, and is read-only afterwards, so
//! any number of threads may resolve and evaluate curves without locking.

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::curve::Curve;
use crate::error::EasingError;
use crate::Result;

/// Pure progress -> eased value mapping.
pub type TimingModeFn = fn(f64) -> f64;

static CATALOG: Lazy<EasingCatalog> = Lazy::new(EasingCatalog::build);

/// A single catalog row.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogEntry {
    pub curve: Curve,
    pub name: &'static str,
    #[serde(skip)]
    pub func: TimingModeFn,
}

/// Immutable mapping from curve name to [`TimingModeFn`].
#[derive(Debug)]
pub struct EasingCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<&'static str, Curve>,
}

impl EasingCatalog {
    fn build() -> Self {
        let entries: Vec<CatalogEntry> = Curve::ALL
            .iter()
            .map(|&curve| CatalogEntry {
                curve,
                name: curve.name(),
                func: curve.timing_fn(),
            })
            .collect();

        let mut index = HashMap::with_capacity(entries.len() * 2);
        for entry in &entries {
            index.insert(entry.curve.name(), entry.curve);
            index.insert(entry.curve.alias(), entry.curve);
        }

        log::debug!(
            "easing catalog built: {} curves, {} lookup keys",
            entries.len(),
            index.len()
        );
        Self { entries, index }
    }

    /// The process-wide catalog.
    #[inline]
    pub fn global() -> &'static EasingCatalog {
        &CATALOG
    }

    /// Resolve a canonical name or snake_case alias to its [`Curve`].
    ///
    /// Names are case-sensitive; there is no fallback curve.
    pub fn curve(&self, name: &str) -> Result<Curve> {
        match self.index.get(name) {
            Some(curve) => Ok(*curve),
            None => {
                log::debug!("easing lookup miss: '{name}'");
                Err(EasingError::unknown_curve(name))
            }
        }
    }

    /// Resolve a name to its function.
    ///
    /// # Example
    ///
    /// ```
    /// use vizij_easing_core::EasingCatalog;
    ///
    /// let f = EasingCatalog::global().resolve("easeOutBounce").unwrap();
    /// assert_eq!(f(1.0), 1.0);
    /// assert!(EasingCatalog::global().resolve("easeSideways").is_err());
    /// ```
    #[inline]
    pub fn resolve(&self, name: &str) -> Result<TimingModeFn> {
        self.curve(name).map(Curve::timing_fn)
    }

    /// Typed lookup; never fails.
    #[inline]
    pub fn get(&self, curve: Curve) -> TimingModeFn {
        curve.timing_fn()
    }

    /// Resolve `name` and evaluate it at `x`.
    #[inline]
    pub fn evaluate(&self, name: &str, x: f64) -> Result<f64> {
        self.resolve(name).map(|f| f(x))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Rows in canonical order.
    #[inline]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Canonical names in catalog order (aliases excluded).
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve `name` against the global catalog.
#[inline]
pub fn resolve(name: &str) -> Result<TimingModeFn> {
    EasingCatalog::global().resolve(name)
}

/// Evaluate the named curve at `x` using the global catalog.
#[inline]
pub fn ease(name: &str, x: f64) -> Result<f64> {
    EasingCatalog::global().evaluate(name, x)
}
