//! Cross-tree theme change notification.
//!
//! DESIGN
//! ======
//! Replaces a page-global flag plus ad-hoc callback with an explicit registry.
//! Listeners run synchronously in registration order. The registry lock is
//! released before any listener runs, so a listener may subscribe or
//! unsubscribe (itself included) without deadlocking; such changes apply from
//! the next `notify`.
//!
//! ERROR HANDLING
//! ==============
//! A listener that returns an error or panics is logged and skipped; the
//! remaining listeners still receive the value.

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod broadcast_test;

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::error::SubscriberError;
use crate::preference::ThemePreference;

type Listener = Arc<dyn Fn(ThemePreference) -> Result<(), SubscriberError> + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Fan-out of theme changes to every mounted subscriber. Clones share the
/// same registry.
#[derive(Clone, Default)]
pub struct ThemeBroadcast {
    registry: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for ThemeBroadcast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeBroadcast")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl ThemeBroadcast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for every future change.
    ///
    /// The listener stays registered until the returned handle is
    /// unsubscribed or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(ThemePreference) -> Result<(), SubscriberError> + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
            active: true,
        }
    }

    /// `subscribe` for listeners that cannot fail.
    pub fn on_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(ThemePreference) + Send + Sync + 'static,
    {
        self.subscribe(move |value| {
            listener(value);
            Ok(())
        })
    }

    /// Deliver `value` to every registered listener, in registration order.
    pub fn notify(&self, value: ThemePreference) {
        let snapshot: Vec<(u64, Listener)> = lock(&self.registry).listeners.clone();
        for (id, listener) in snapshot {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| listener(value)))
                .unwrap_or_else(|payload| Err(SubscriberError::Panicked(panic_message(payload.as_ref()))));
            if let Err(e) = outcome {
                log::error!("theme listener {id} failed on {value}: {e}");
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }
}

/// Handle for one registered listener.
///
/// Dropping the handle unsubscribes, matching component unmount. Use
/// `detach` to keep the listener for the lifetime of the broadcast.
#[must_use = "dropping a Subscription unsubscribes the listener immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
    active: bool,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}

impl Subscription {
    /// Permanently remove the listener. Safe if it never fired.
    pub fn unsubscribe(mut self) {
        self.remove();
    }

    /// Keep the listener registered without holding the handle.
    pub fn detach(mut self) {
        self.active = false;
    }

    fn remove(&mut self) {
        if !std::mem::replace(&mut self.active, false) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            let id = self.id;
            lock(&registry).listeners.retain(|(existing, _)| *existing != id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
