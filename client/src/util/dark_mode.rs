//! Browser bindings for the theme core.
//!
//! `BrowserStorage` persists the preference in `localStorage` and
//! `DocumentRoot` toggles the `dark-active` class on `<html>`. Both need a
//! browser; without the `hydrate` feature storage reports `Unavailable` and
//! there is no document root, so the theme lives for the render only.
//!
//! TRADE-OFFS
//! ==========
//! Neither type caches the `web_sys` handles they touch. Those handles are not
//! `Send`, and the controller lives in Leptos context, which requires it.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use std::sync::Arc;

use theme::{
    PersistenceError, PreferenceStorage, PresentationSurface, ThemeApplier, ThemeController, ThemePreference,
    ThemePreferenceStore,
};

/// Theme the static pre-render is produced with. There is no storage on the
/// server, so it is always the default; hydration must start from it too.
pub const SERVER_RENDERED_THEME: ThemePreference = ThemePreference::Light;

/// Theme controller wired to the browser, shared through context.
pub type ThemeHandle = Arc<ThemeController<BrowserStorage, DocumentRoot>>;

/// Build the session's theme controller: read `localStorage`, apply to
/// `<html>`. Call before mounting so first paint already has the theme.
pub fn init_theme() -> ThemeHandle {
    let applier = DocumentRoot::locate().map_or_else(ThemeApplier::detached, ThemeApplier::new);
    Arc::new(ThemeController::init(ThemePreferenceStore::new(BrowserStorage), applier))
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, PersistenceError> {
    let window = web_sys::window().ok_or(PersistenceError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| PersistenceError::Denied(format!("{e:?}")))?
        .ok_or(PersistenceError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn storage_error(err: &wasm_bindgen::JsValue) -> PersistenceError {
    use wasm_bindgen::JsCast;

    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) if ex.name() == "QuotaExceededError" => PersistenceError::QuotaExceeded,
        Some(ex) => PersistenceError::Denied(ex.message()),
        None => PersistenceError::Denied(format!("{err:?}")),
    }
}

impl PreferenceStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| storage_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(PersistenceError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| storage_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(PersistenceError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistenceError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| storage_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(PersistenceError::Unavailable)
        }
    }
}

/// The `<html>` element's class list.
#[derive(Clone, Copy, Debug)]
pub struct DocumentRoot {
    _private: (),
}

impl DocumentRoot {
    /// `None` when there is no document (server render).
    pub fn locate() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            document_element().map(|_| Self { _private: () })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn document_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

impl PresentationSurface for DocumentRoot {
    fn set_class(&self, class: &str, present: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = document_element() {
                let _ = el.class_list().toggle_with_force(class, present);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (class, present);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            document_element().is_some_and(|el| el.class_list().contains(class))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = class;
            false
        }
    }
}
