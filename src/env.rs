//! Conversion factors for relative units.
//!
//! A [`Unit`](crate::Unit) reads its environment exactly once, when it is
//! built, and freezes the result into its pixel value. Everything here exists
//! to make that single read cheap and consistent.

use std::sync::{PoisonError, RwLock};

use crate::defaults;
use crate::errors::NumericError;

/// Supplies the live values needed to resolve `rem`, `vh` and `vw`.
pub trait Environment {
    /// Current root font size in pixels (one `rem`).
    fn root_font_size_px(&self) -> f64;

    /// Current viewport width in pixels (one hundred `vw`).
    fn viewport_width_px(&self) -> f64;

    /// Current viewport height in pixels (one hundred `vh`).
    fn viewport_height_px(&self) -> f64;

    /// Read all three factors at once.
    ///
    /// Implementations backed by mutable state must override this so the
    /// factors come from a single consistent read.
    fn snapshot(&self) -> Metrics {
        Metrics {
            root_font_size: self.root_font_size_px(),
            viewport_width: self.viewport_width_px(),
            viewport_height: self.viewport_height_px(),
        }
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn root_font_size_px(&self) -> f64 {
        (**self).root_font_size_px()
    }

    fn viewport_width_px(&self) -> f64 {
        (**self).viewport_width_px()
    }

    fn viewport_height_px(&self) -> f64 {
        (**self).viewport_height_px()
    }

    fn snapshot(&self) -> Metrics {
        (**self).snapshot()
    }
}

/// A frozen set of conversion factors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub root_font_size: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics {
            root_font_size: defaults::ROOT_FONT_SIZE,
            viewport_width: defaults::VIEWPORT_WIDTH,
            viewport_height: defaults::VIEWPORT_HEIGHT,
        }
    }
}

impl Metrics {
    /// Create metrics with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(
        root_font_size: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Result<Self, NumericError> {
        Ok(Metrics {
            root_font_size: NumericError::check_positive(root_font_size)?,
            viewport_width: NumericError::check_positive(viewport_width)?,
            viewport_height: NumericError::check_positive(viewport_height)?,
        })
    }

    pub fn with_root_font_size(self, root_font_size: f64) -> Self {
        Metrics { root_font_size, ..self }
    }

    pub fn with_viewport(self, width: f64, height: f64) -> Self {
        Metrics {
            viewport_width: width,
            viewport_height: height,
            ..self
        }
    }
}

impl Environment for Metrics {
    fn root_font_size_px(&self) -> f64 {
        self.root_font_size
    }

    fn viewport_width_px(&self) -> f64 {
        self.viewport_width
    }

    fn viewport_height_px(&self) -> f64 {
        self.viewport_height
    }

    fn snapshot(&self) -> Metrics {
        *self
    }
}

/// Conversion factors that change at runtime, e.g. a resizable window.
///
/// All three factors sit behind one lock, so a snapshot never mixes a new
/// width with an old height.
#[derive(Debug, Default)]
pub struct LiveMetrics {
    inner: RwLock<Metrics>,
}

impl LiveMetrics {
    pub fn new(metrics: Metrics) -> Self {
        LiveMetrics {
            inner: RwLock::new(metrics),
        }
    }

    pub fn set_viewport(&self, width: f64, height: f64) {
        self.update(|m| m.with_viewport(width, height));
    }

    pub fn set_root_font_size(&self, root_font_size: f64) {
        self.update(|m| m.with_root_font_size(root_font_size));
    }

    /// Replace the current metrics with `f(current)` under a single write lock.
    pub fn update(&self, f: impl FnOnce(Metrics) -> Metrics) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let next = f(*guard);
        *guard = next;
        crate::log::debug!(metrics = ?next, "environment updated");
    }
}

impl Environment for LiveMetrics {
    fn root_font_size_px(&self) -> f64 {
        self.snapshot().root_font_size
    }

    fn viewport_width_px(&self) -> f64 {
        self.snapshot().viewport_width
    }

    fn viewport_height_px(&self) -> f64 {
        self.snapshot().viewport_height
    }

    fn snapshot(&self) -> Metrics {
        let metrics = *self.inner.read().unwrap_or_else(PoisonError::into_inner);
        crate::log::debug!(?metrics, "environment snapshot");
        metrics
    }
}
