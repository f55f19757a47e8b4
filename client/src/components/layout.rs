//! Page chrome: site header with theme toggle, content column, footer.

use leptos::prelude::*;

use crate::components::theme_toggle::{ThemeToggle, use_is_dark};
use crate::config::SiteConfig;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let is_dark = use_is_dark();

    view! {
        <div class="layout" class:layout--dark=move || is_dark.get()>
            <header class="layout__header">
                <a href="/" class="layout__title">{config.title.clone()}</a>
                <span class="layout__spacer"></span>
                <ThemeToggle/>
            </header>
            <main class="layout__main">{children()}</main>
            <footer class="layout__footer">
                <span class="layout__author">{config.author.clone()}</span>
                <ul class="social">
                    {config
                        .social_links
                        .iter()
                        .map(|link| {
                            view! {
                                <li class="social__item">
                                    <a href=link.url.clone() target="_blank" rel="noopener noreferrer">
                                        {link.label.clone()}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <li class="social__item">
                        <a href="/rss.xml">"RSS"</a>
                    </li>
                </ul>
            </footer>
        </div>
    }
}
