use std::sync::Arc;

use super::*;
use crate::applier::{DARK_ACTIVE_CLASS, MemorySurface};
use crate::store::MemoryStorage;

fn controller(storage: &MemoryStorage, surface: &MemorySurface) -> ThemeController<MemoryStorage, MemorySurface> {
    ThemeController::init(
        ThemePreferenceStore::new(storage.clone()),
        ThemeApplier::new(surface.clone()),
    )
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn initial_theme_defaults_to_light() {
    let surface = MemorySurface::new();
    let ctl = controller(&MemoryStorage::new(), &surface);
    assert_eq!(ctl.current(), ThemePreference::Light);
    assert!(!ctl.is_dark());
    assert!(!surface.has_class(DARK_ACTIVE_CLASS));
}

#[test]
fn initial_theme_comes_from_store_and_is_applied_before_subscribers() {
    let storage = MemoryStorage::new();
    ThemePreferenceStore::new(storage.clone()).write(ThemePreference::Dark).unwrap();
    let surface = MemorySurface::new();

    let ctl = controller(&storage, &surface);

    assert_eq!(ctl.current(), ThemePreference::Dark);
    assert!(surface.has_class(DARK_ACTIVE_CLASS));
    assert_eq!(ctl.broadcast().subscriber_count(), 0);
}

#[test]
fn unreadable_store_falls_back_to_light() {
    let storage = MemoryStorage::new();
    ThemePreferenceStore::new(storage.clone()).write(ThemePreference::Dark).unwrap();
    storage.disable();
    let ctl = controller(&storage, &MemorySurface::new());
    assert_eq!(ctl.current(), ThemePreference::Light);
}

// =============================================================
// Toggle chain
// =============================================================

#[test]
fn toggle_light_to_dark_persists_applies_and_broadcasts() {
    let storage = MemoryStorage::new();
    let surface = MemorySurface::new();
    let ctl = controller(&storage, &surface);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let first = seen.clone();
    let _a = ctl.on_change(move |v| first.lock().unwrap().push(("a", v)));
    let second = seen.clone();
    let _b = ctl.on_change(move |v| second.lock().unwrap().push(("b", v)));

    assert_eq!(ctl.toggle(), ThemePreference::Dark);

    assert_eq!(ctl.store().read(), Some(ThemePreference::Dark));
    assert!(surface.has_class(DARK_ACTIVE_CLASS));
    assert_eq!(*seen.lock().unwrap(), vec![("a", ThemePreference::Dark), ("b", ThemePreference::Dark)]);
}

#[test]
fn page_root_is_updated_before_listeners_run() {
    let surface = MemorySurface::new();
    let ctl = controller(&MemoryStorage::new(), &surface);
    let observed = Arc::new(Mutex::new(None));
    let sink = observed.clone();
    let root = surface.clone();
    let _sub = ctl.on_change(move |_| *sink.lock().unwrap() = Some(root.has_class(DARK_ACTIVE_CLASS)));

    ctl.toggle();

    assert_eq!(*observed.lock().unwrap(), Some(true));
}

#[test]
fn listeners_observe_new_current_value() {
    let ctl = Arc::new(controller(&MemoryStorage::new(), &MemorySurface::new()));
    let observed = Arc::new(Mutex::new(None));
    let sink = observed.clone();
    let weak = Arc::downgrade(&ctl);
    let _sub = ctl.on_change(move |_| {
        if let Some(ctl) = weak.upgrade() {
            *sink.lock().unwrap() = Some(ctl.current());
        }
    });

    ctl.toggle();

    assert_eq!(*observed.lock().unwrap(), Some(ThemePreference::Dark));
}

#[test]
fn toggle_twice_returns_to_light() {
    let storage = MemoryStorage::new();
    let surface = MemorySurface::new();
    let ctl = controller(&storage, &surface);
    ctl.toggle();
    assert_eq!(ctl.toggle(), ThemePreference::Light);
    assert_eq!(ctl.store().read(), Some(ThemePreference::Light));
    assert!(!surface.has_class(DARK_ACTIVE_CLASS));
}

#[test]
fn failed_write_still_flips_session_but_not_reload() {
    let storage = MemoryStorage::new();
    storage.disable();
    let surface = MemorySurface::new();
    let ctl = controller(&storage, &surface);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = ctl.on_change(move |v| sink.lock().unwrap().push(v));

    assert_eq!(ctl.toggle(), ThemePreference::Dark);
    assert!(ctl.is_dark());
    assert!(surface.has_class(DARK_ACTIVE_CLASS));
    assert_eq!(*seen.lock().unwrap(), vec![ThemePreference::Dark]);

    storage.enable();
    let reloaded = controller(&storage, &MemorySurface::new());
    assert_eq!(reloaded.current(), ThemePreference::Light);
}

#[test]
fn unsubscribed_component_misses_later_toggles() {
    let ctl = controller(&MemoryStorage::new(), &MemorySurface::new());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let sub = ctl.on_change(move |v| sink.lock().unwrap().push(v));

    ctl.toggle();
    sub.unsubscribe();
    ctl.toggle();

    assert_eq!(*seen.lock().unwrap(), vec![ThemePreference::Dark]);
}

// =============================================================
// set
// =============================================================

#[test]
fn set_same_value_does_not_broadcast() {
    let ctl = controller(&MemoryStorage::new(), &MemorySurface::new());
    let seen = Arc::new(Mutex::new(0_usize));
    let sink = seen.clone();
    let _sub = ctl.on_change(move |_| *sink.lock().unwrap() += 1);

    assert!(!ctl.set(ThemePreference::Light));
    assert_eq!(*seen.lock().unwrap(), 0);
    assert_eq!(ctl.store().read(), Some(ThemePreference::Light));

    assert!(ctl.set(ThemePreference::Dark));
    assert_eq!(*seen.lock().unwrap(), 1);
}

#[test]
fn detached_applier_still_toggles() {
    let ctl: ThemeController<MemoryStorage, MemorySurface> =
        ThemeController::init(ThemePreferenceStore::new(MemoryStorage::new()), ThemeApplier::detached());
    assert_eq!(ctl.toggle(), ThemePreference::Dark);
}

// =============================================================
// Changes made from inside a listener
// =============================================================

#[test]
fn toggle_from_listener_leaves_no_stale_subscriber() {
    let ctl = Arc::new(controller(&MemoryStorage::new(), &MemorySurface::new()));
    let weak = Arc::downgrade(&ctl);
    let _a = ctl.on_change(move |value| {
        if value.is_dark() {
            if let Some(ctl) = weak.upgrade() {
                ctl.toggle();
            }
        }
    });
    let seen_by_b = Arc::new(Mutex::new(Vec::new()));
    let sink = seen_by_b.clone();
    let _b = ctl.on_change(move |v| sink.lock().unwrap().push(v));

    ctl.toggle();

    assert_eq!(ctl.current(), ThemePreference::Light);
    assert_eq!(*seen_by_b.lock().unwrap(), vec![ThemePreference::Dark, ThemePreference::Light]);
    assert_eq!(ctl.store().read(), Some(ThemePreference::Light));
}

#[test]
fn nested_changes_collapse_to_latest_value() {
    let ctl = Arc::new(controller(&MemoryStorage::new(), &MemorySurface::new()));
    let weak = Arc::downgrade(&ctl);
    let fired = Arc::new(Mutex::new(false));
    let once = fired.clone();
    let _a = ctl.on_change(move |_| {
        let mut fired = once.lock().unwrap();
        if !*fired {
            *fired = true;
            if let Some(ctl) = weak.upgrade() {
                ctl.toggle();
                ctl.toggle();
            }
        }
    });
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _b = ctl.on_change(move |v| sink.lock().unwrap().push(v));

    ctl.toggle();

    assert_eq!(ctl.current(), ThemePreference::Dark);
    assert_eq!(seen.lock().unwrap().last().copied(), Some(ThemePreference::Dark));
    assert_eq!(seen.lock().unwrap().len(), 2);
}
