//! Dark/light toggle button and the theme subscription hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any component can call `use_is_dark` to follow the theme; the toggle can
//! sit anywhere in the tree relative to those subscribers.

use leptos::prelude::*;

use crate::util::dark_mode::{SERVER_RENDERED_THEME, ThemeHandle};

/// Reactive `is_dark` for the current component.
///
/// Starts from the server-rendered theme so hydration sees the same markup,
/// then syncs to the stored theme once mounted in the browser. Later changes
/// arrive through the broadcast; the subscription is dropped on unmount.
pub fn use_is_dark() -> ReadSignal<bool> {
    let theme = expect_context::<ThemeHandle>();
    let (is_dark, set_is_dark) = signal(SERVER_RENDERED_THEME.is_dark());
    let current = theme.clone();
    Effect::new(move || set_is_dark.set(current.is_dark()));
    let subscription = theme.on_change(move |value| set_is_dark.set(value.is_dark()));
    on_cleanup(move || subscription.unsubscribe());
    is_dark
}

/// Button flipping the site theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeHandle>();
    let is_dark = use_is_dark();

    view! {
        <button
            class="btn theme-toggle"
            type="button"
            on:click=move |_| {
                theme.toggle();
            }
            title="Toggle dark mode"
            aria-label="Toggle dark mode"
            aria-pressed=move || if is_dark.get() { "true" } else { "false" }
        >
            {move || if is_dark.get() { "☀" } else { "☾" }}
        </button>
    }
}
