//! Light/dark theme preference core for the blog front end.
//!
//! This crate is UI-framework agnostic so the Leptos client can consume it
//! directly, and so persistence and notification order can be tested without
//! a browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! A toggle runs `store.write` → `applier.apply` → `broadcast.notify`. The
//! store and the page root are reached through the `PreferenceStorage` and
//! `PresentationSurface` traits; the client crate supplies browser-backed
//! implementations, tests use the in-memory ones exported here.

pub mod applier;
pub mod broadcast;
pub mod controller;
pub mod error;
pub mod preference;
pub mod store;

pub use applier::{DARK_ACTIVE_CLASS, MemorySurface, PresentationSurface, ThemeApplier};
pub use broadcast::{Subscription, ThemeBroadcast};
pub use controller::ThemeController;
pub use error::{PersistenceError, SubscriberError};
pub use preference::ThemePreference;
pub use store::{MemoryStorage, PreferenceStorage, STORAGE_KEY, ThemePreferenceStore};
