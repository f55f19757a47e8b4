//! Author bio shown at the top of the home page and under each post.

use leptos::prelude::*;

use crate::config::SiteConfig;

#[component]
pub fn Bio() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let summary = config.author_summary.clone();
    let twitter = config.twitter_handle.clone();

    view! {
        <aside class="bio">
            <p class="bio__text">
                "Personal blog by "
                <strong class="bio__author">{config.author.clone()}</strong>
                "."
                {summary.map(|s| view! { " " <span class="bio__summary">{s}</span> })}
            </p>
            {twitter.map(|handle| {
                view! {
                    <a class="bio__twitter" href=format!("https://twitter.com/{handle}") rel="me">
                        {format!("@{handle}")}
                    </a>
                }
            })}
        </aside>
    }
}
