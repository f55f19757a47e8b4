//! Home page: bio, post listing, newsletter form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::bio::Bio;
use crate::components::newsletter_form::NewsletterForm;
use crate::components::post_card::PostCard;
use crate::config::SiteConfig;
use crate::state::posts::PostsState;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let posts = expect_context::<RwSignal<PostsState>>();
    super::ensure_posts_loaded(posts);

    view! {
        <Title text=config.title.clone()/>
        <Bio/>
        <section class="post-list">
            <Show
                when=move || posts.with(|s| s.loaded)
                fallback=move || view! { <p class="post-list__status">"Loading posts..."</p> }
            >
                <Show
                    when=move || posts.with(|s| !s.posts.is_empty())
                    fallback=move || view! { <p class="post-list__status">"No posts yet."</p> }
                >
                    {move || {
                        posts
                            .get()
                            .posts
                            .into_iter()
                            .map(|post| view! { <PostCard post=post/> })
                            .collect::<Vec<_>>()
                    }}
                </Show>
            </Show>
        </section>
        <NewsletterForm/>
    }
}
