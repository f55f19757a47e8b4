//! Mirrors the resolved theme onto the page root.
//!
//! The root is painted before any component mounts, so the marker set here is
//! what prevents a flash of the wrong theme on load.

#[cfg(test)]
#[path = "applier_test.rs"]
mod applier_test;

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::preference::ThemePreference;

/// Class present on the page root while the dark theme is active.
pub const DARK_ACTIVE_CLASS: &str = "dark-active";

/// Page-root presentation state outside the component tree.
pub trait PresentationSurface: Send + Sync {
    /// Add (`present = true`) or remove the class. Must be idempotent.
    fn set_class(&self, class: &str, present: bool);

    fn has_class(&self, class: &str) -> bool;
}

/// Applies a `ThemePreference` to an optional page root.
#[derive(Clone, Debug)]
pub struct ThemeApplier<P> {
    surface: Option<P>,
}

impl<P: PresentationSurface> ThemeApplier<P> {
    pub fn new(surface: P) -> Self {
        Self { surface: Some(surface) }
    }

    /// Applier with no page root (non-interactive render); `apply` is a no-op.
    pub fn detached() -> Self {
        Self { surface: None }
    }

    pub fn apply(&self, value: ThemePreference) {
        if let Some(surface) = &self.surface {
            surface.set_class(DARK_ACTIVE_CLASS, value.is_dark());
        }
    }

    pub fn surface(&self) -> Option<&P> {
        self.surface.as_ref()
    }
}

#[derive(Debug, Default)]
struct SurfaceInner {
    classes: BTreeSet<String>,
    mutations: usize,
}

/// In-process page root. Clones share state. Counts only calls that changed
/// the class set, which makes idempotence observable in tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    inner: Arc<Mutex<SurfaceInner>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> Vec<String> {
        self.lock().classes.iter().cloned().collect()
    }

    pub fn mutations(&self) -> usize {
        self.lock().mutations
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PresentationSurface for MemorySurface {
    fn set_class(&self, class: &str, present: bool) {
        let mut inner = self.lock();
        let changed = if present {
            inner.classes.insert(class.to_owned())
        } else {
            inner.classes.remove(class)
        };
        if changed {
            inner.mutations += 1;
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.lock().classes.contains(class)
    }
}
