//! Listing entry for one post.

use leptos::prelude::*;

use crate::net::types::PostSummary;
use crate::state::posts::{display_date, reading_time_label};

#[component]
pub fn PostCard(post: PostSummary) -> impl IntoView {
    let href = format!("/posts/{}", post.slug);
    let meta = format!("{} · {}", display_date(post.date), reading_time_label(post.reading_time_minutes));

    view! {
        <article class="post-card">
            <header>
                <h3 class="post-card__title">
                    <a href=href>{post.title}</a>
                </h3>
                <small class="post-card__meta">{meta}</small>
            </header>
            {post.featured_image.map(|img| {
                view! { <img class="post-card__image" src=img.src alt=img.alt.unwrap_or_default()/> }
            })}
            <p class="post-card__excerpt">{post.excerpt}</p>
        </article>
    }
}
