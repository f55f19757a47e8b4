//! Third-party comment thread under a post.

use leptos::prelude::*;

use crate::components::theme_toggle::use_is_dark;
use crate::util::comments::{self, CommentThread, THREAD_ELEMENT_ID};

/// Mounts the comment widget for `thread` once the element is in the page.
///
/// The widget samples the page colours when it loads, so it is reset every
/// time the theme changes.
#[component]
pub fn CommentEmbed(thread: CommentThread) -> impl IntoView {
    let is_dark = use_is_dark();
    Effect::new(move || {
        let _ = is_dark.get();
        comments::mount(&thread);
    });

    view! {
        <section class="comments">
            <h2 class="comments__title">"Share your thoughts 💬"</h2>
            <div id=THREAD_ELEMENT_ID></div>
        </section>
    }
}
