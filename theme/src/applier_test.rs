use super::*;

#[test]
fn apply_dark_sets_marker() {
    let surface = MemorySurface::new();
    ThemeApplier::new(surface.clone()).apply(ThemePreference::Dark);
    assert!(surface.has_class(DARK_ACTIVE_CLASS));
}

#[test]
fn apply_light_clears_marker() {
    let surface = MemorySurface::new();
    let applier = ThemeApplier::new(surface.clone());
    applier.apply(ThemePreference::Dark);
    applier.apply(ThemePreference::Light);
    assert!(!surface.has_class(DARK_ACTIVE_CLASS));
    assert!(surface.classes().is_empty());
}

#[test]
fn apply_twice_matches_apply_once() {
    let once = MemorySurface::new();
    ThemeApplier::new(once.clone()).apply(ThemePreference::Dark);

    let twice = MemorySurface::new();
    let applier = ThemeApplier::new(twice.clone());
    applier.apply(ThemePreference::Dark);
    applier.apply(ThemePreference::Dark);

    assert_eq!(once.classes(), twice.classes());
    assert_eq!(twice.mutations(), 1);
}

#[test]
fn apply_light_on_fresh_root_changes_nothing() {
    let surface = MemorySurface::new();
    ThemeApplier::new(surface.clone()).apply(ThemePreference::Light);
    assert_eq!(surface.mutations(), 0);
}

#[test]
fn apply_leaves_unrelated_classes_alone() {
    let surface = MemorySurface::new();
    surface.set_class("js", true);
    let applier = ThemeApplier::new(surface.clone());
    applier.apply(ThemePreference::Dark);
    applier.apply(ThemePreference::Light);
    assert_eq!(surface.classes(), vec!["js".to_owned()]);
}

#[test]
fn detached_applier_is_noop() {
    let applier = ThemeApplier::<MemorySurface>::detached();
    applier.apply(ThemePreference::Dark);
    assert!(applier.surface().is_none());
}
