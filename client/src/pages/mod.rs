//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data loading and delegates rendering details
//! to `components`.

pub mod home;
pub mod not_found;
pub mod post;

use leptos::prelude::*;

use crate::state::posts::PostsState;

/// Start loading the post index unless it is loaded or already in flight.
pub(crate) fn ensure_posts_loaded(posts: RwSignal<PostsState>) {
    if posts.with_untracked(|s| s.loaded || s.loading) {
        return;
    }
    posts.update(|s| s.loading = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let fetched = crate::net::api::fetch_posts().await;
        posts.update(|s| match fetched {
            Some(list) => s.set_posts(list),
            None => {
                log::warn!("post index unavailable");
                s.set_posts(Vec::new());
            }
        });
    });
}
