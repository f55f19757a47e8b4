//! Page shown for unknown routes and posts that do not exist.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="404: Not Found"/>
        <section class="not-found">
            <h1 class="not-found__title">"4🙄4 - Not Found"</h1>
            <p class="not-found__text">"This post doesn't exist... Yet."</p>
            <a href="/">"← All posts"</a>
        </section>
    }
}
