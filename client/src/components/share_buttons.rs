//! Share links and copy-link button under a post.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::copy::CopyState;
#[cfg(feature = "hydrate")]
use crate::state::copy::COPY_FEEDBACK_MS;
use crate::util::share::{ShareTarget, share_url};

#[component]
pub fn ShareButtons(permalink: String, title: String) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let copy = RwSignal::new(CopyState::default());

    let links = ShareTarget::ALL
        .iter()
        .map(|&target| {
            let href = share_url(target, &permalink, &title, config.twitter_handle.as_deref());
            view! {
                <a
                    class=format!("share__link share__link--{}", target.css_modifier())
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {target.label()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let text = permalink.clone();
            leptos::task::spawn_local(async move {
                let ok = write_clipboard(&text).await;
                let Some(generation) = copy.try_update(|c| c.record_copy(ok)).flatten() else {
                    return;
                };
                gloo_timers::callback::Timeout::new(COPY_FEEDBACK_MS, move || {
                    let _ = copy.try_update(|c| c.expire(generation));
                })
                .forget();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &permalink;
        }
    };

    view! {
        <div class="share">
            <span class="share__label">"Share:"</span>
            {links}
            <button class="btn share__copy" type="button" on:click=on_copy>
                {move || copy.get().label()}
            </button>
        </div>
    }
}

/// Write `text` to the clipboard and wait for the browser to accept it.
/// False when there is no clipboard or the write is rejected.
#[cfg(feature = "hydrate")]
async fn write_clipboard(text: &str) -> bool {
    let Some(clipboard) = web_sys::window().and_then(|w| w.navigator().clipboard()) else {
        return false;
    };
    match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await {
        Ok(_) => true,
        Err(err) => {
            log::warn!("copy link failed: {err:?}");
            false
        }
    }
}
