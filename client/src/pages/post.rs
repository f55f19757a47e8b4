//! Single post page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The body arrives as pre-rendered HTML from the static data layer and is
//! injected unchanged. Share links, prev/next navigation and comments hang
//! off the post's slug.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::bio::Bio;
use crate::components::comments::CommentEmbed;
use crate::components::newsletter_form::NewsletterForm;
use crate::components::share_buttons::ShareButtons;
use crate::config::SiteConfig;
use crate::net::types::Post;
use crate::pages::not_found::NotFoundPage;
use crate::state::posts::{PostsState, display_date, reading_time_label};
use crate::util::comments::CommentThread;
use crate::util::share::post_permalink;

/// Fetch status of the current post.
#[derive(Clone, Debug, PartialEq, Eq)]
enum PostLoad {
    Loading,
    Missing,
    Ready(Box<Post>),
}

#[component]
pub fn PostPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let posts = expect_context::<RwSignal<PostsState>>();
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let load = RwSignal::new(PostLoad::Loading);

    super::ensure_posts_loaded(posts);

    Effect::new(move || {
        let slug = slug();
        load.set(PostLoad::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let next = match crate::net::api::fetch_post(&slug).await {
                Some(post) => PostLoad::Ready(Box::new(post)),
                None => PostLoad::Missing,
            };
            load.set(next);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = slug;
        }
    });

    move || match load.get() {
        PostLoad::Loading => view! { <p class="post__status">"Loading..."</p> }.into_any(),
        PostLoad::Missing => view! { <NotFoundPage/> }.into_any(),
        PostLoad::Ready(post) => post_view(&config, posts, *post).into_any(),
    }
}

fn post_view(config: &SiteConfig, posts: RwSignal<PostsState>, post: Post) -> impl IntoView {
    let Post { summary, html } = post;
    let permalink = post_permalink(&config.site_url, &summary.slug);
    let meta = format!("{} · {}", display_date(summary.date), reading_time_label(summary.reading_time_minutes));

    let comments = config.comments_namespace.as_deref().and_then(|namespace| {
        match CommentThread::new(namespace, &summary.slug, &summary.title) {
            Ok(thread) => Some(thread.with_url(permalink.clone())),
            Err(e) => {
                log::warn!("comments disabled: {e}");
                None
            }
        }
    });

    let slug = summary.slug.clone();
    let neighbours = move || {
        posts.with(|s| {
            let (newer, older) = s.adjacent(&slug);
            (
                newer.map(|p| (format!("/posts/{}", p.slug), p.title.clone())),
                older.map(|p| (format!("/posts/{}", p.slug), p.title.clone())),
            )
        })
    };

    view! {
        <Title text=summary.title.clone()/>
        <article class="post">
            <header class="post__header">
                <h1 class="post__title">{summary.title.clone()}</h1>
                <small class="post__meta">{meta}</small>
            </header>
            <div class="post__body" inner_html=html></div>
            {permalink.map(|link| view! { <ShareButtons permalink=link title=summary.title.clone()/> })}
        </article>
        <Bio/>
        <nav class="post__nav">
            {move || {
                let (newer, older) = neighbours();
                view! {
                    {older.map(|(href, title)| view! { <a class="post__nav-older" href=href rel="prev">"← " {title}</a> })}
                    {newer.map(|(href, title)| view! { <a class="post__nav-newer" href=href rel="next">{title} " →"</a> })}
                }
            }}
        </nav>
        <NewsletterForm/>
        {comments.map(|thread| view! { <CommentEmbed thread=thread/> })}
    }
}
