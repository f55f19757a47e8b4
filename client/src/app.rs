//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::config::SiteConfig;
use crate::pages::{home::HomePage, not_found::NotFoundPage, post::PostPage};
use crate::state::posts::PostsState;
use crate::util::dark_mode::{ThemeHandle, init_theme};

/// HTML shell the static-site generator pre-renders around the app.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides site config, the theme controller and the post index to every
/// page. The theme controller is created here, ahead of the component tree,
/// so `<html>` already carries the stored theme when the first page renders.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("site config invalid, using defaults: {e}");
        SiteConfig::default()
    });
    let theme: ThemeHandle = init_theme();
    let posts = RwSignal::new(PostsState::default());

    let title = config.title.clone();
    let description = config.description.clone();

    provide_context(config);
    provide_context(theme);
    provide_context(posts);

    view! {
        <Stylesheet id="leptos" href="/pkg/blog.css"/>
        <Title text=title/>
        <Meta name="description" content=description/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("posts"), ParamSegment("slug")) view=PostPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
