//! Owns the current theme and runs the toggle chain.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once per page session, before the component tree mounts, so
//! the page root already carries the stored theme on first paint. Components
//! read `current()` when they mount and `subscribe()` for later changes.
//!
//! A listener may change the theme while it is being notified. That change is
//! committed at once but its broadcast is queued until the running `notify`
//! finishes, so every listener's last delivered value is the final theme.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::applier::{PresentationSurface, ThemeApplier};
use crate::broadcast::{Subscription, ThemeBroadcast};
use crate::error::SubscriberError;
use crate::preference::ThemePreference;
use crate::store::{PreferenceStorage, ThemePreferenceStore};

/// Broadcast in progress, plus the latest value committed during it.
#[derive(Debug, Default)]
struct Dispatch {
    notifying: bool,
    pending: Option<ThemePreference>,
}

/// Current theme plus its store, page-root applier and broadcast.
#[derive(Debug)]
pub struct ThemeController<S, P> {
    store: ThemePreferenceStore<S>,
    applier: ThemeApplier<P>,
    broadcast: ThemeBroadcast,
    current: Mutex<ThemePreference>,
    dispatch: Mutex<Dispatch>,
}

impl<S: PreferenceStorage, P: PresentationSurface> ThemeController<S, P> {
    /// Resolve the initial theme (stored value, else `Light`) and apply it to
    /// the page root immediately.
    pub fn init(store: ThemePreferenceStore<S>, applier: ThemeApplier<P>) -> Self {
        let initial = store.read().unwrap_or_default();
        applier.apply(initial);
        log::debug!("theme initialized: {initial}");
        Self {
            store,
            applier,
            broadcast: ThemeBroadcast::new(),
            current: Mutex::new(initial),
            dispatch: Mutex::new(Dispatch::default()),
        }
    }

    pub fn current(&self) -> ThemePreference {
        *self.lock()
    }

    pub fn is_dark(&self) -> bool {
        self.current().is_dark()
    }

    /// Flip the theme: persist, apply to the page root, then notify.
    /// Returns the new theme.
    pub fn toggle(&self) -> ThemePreference {
        let next = {
            let mut current = self.lock();
            let next = current.toggled();
            *current = next;
            self.commit(next);
            next
        };
        self.dispatch(next);
        next
    }

    /// Set an explicit theme. Persists and applies even when unchanged but
    /// only notifies on a transition. Returns whether the theme changed.
    pub fn set(&self, value: ThemePreference) -> bool {
        let changed = {
            let mut current = self.lock();
            let changed = *current != value;
            *current = value;
            self.commit(value);
            changed
        };
        if changed {
            self.dispatch(value);
        }
        changed
    }

    /// Register for theme changes. See `ThemeBroadcast::subscribe`.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(ThemePreference) -> Result<(), SubscriberError> + Send + Sync + 'static,
    {
        self.broadcast.subscribe(listener)
    }

    pub fn on_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(ThemePreference) + Send + Sync + 'static,
    {
        self.broadcast.on_change(listener)
    }

    pub fn broadcast(&self) -> &ThemeBroadcast {
        &self.broadcast
    }

    pub fn store(&self) -> &ThemePreferenceStore<S> {
        &self.store
    }

    fn commit(&self, value: ThemePreference) {
        if let Err(e) = self.store.write(value) {
            log::warn!("theme {value} not persisted, applies to this session only: {e}");
        }
        self.applier.apply(value);
        log::debug!("theme changed: {value}");
    }

    /// Notify listeners of `value`, or queue it if a notify is already
    /// running further up the stack. Queued values collapse to the latest.
    fn dispatch(&self, value: ThemePreference) {
        {
            let mut dispatch = self.dispatch.lock().unwrap_or_else(PoisonError::into_inner);
            if dispatch.notifying {
                dispatch.pending = Some(value);
                return;
            }
            dispatch.notifying = true;
        }
        let mut value = value;
        loop {
            self.broadcast.notify(value);
            let mut dispatch = self.dispatch.lock().unwrap_or_else(PoisonError::into_inner);
            match dispatch.pending.take() {
                Some(next) => value = next,
                None => {
                    dispatch.notifying = false;
                    break;
                }
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, ThemePreference> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
