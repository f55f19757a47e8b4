//! Mailing-list subscription form.
//!
//! Hidden when no newsletter endpoint is configured. The service's reply
//! message is rendered verbatim under the form.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::newsletter::NewsletterState;

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    config.newsletter_endpoint.clone().map(newsletter_form)
}

fn newsletter_form(endpoint: String) -> impl IntoView {
    let state = RwSignal::new(NewsletterState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        state.update(|s| request = s.begin_submit());
        let Some(request) = request else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let endpoint = endpoint.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::subscribe(&endpoint, &request).await;
                state.update(|s| s.finish(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&endpoint, request);
        }
    };

    view! {
        <form class="newsletter" on:submit=on_submit>
            <h3 class="newsletter__title">"Keep in touch"</h3>
            <p class="newsletter__blurb">"Subscribe to get the latest posts by email. No spam, unsubscribe any time."</p>
            <input
                class="newsletter__input"
                type="text"
                placeholder="Your name"
                required=true
                prop:value=move || state.with(|s| s.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.name = value);
                }
            />
            <input
                class="newsletter__input"
                type="email"
                placeholder="you@example.com"
                required=true
                prop:value=move || state.with(|s| s.email.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.email = value);
                }
            />
            <button class="btn newsletter__button" type="submit" disabled=move || state.with(|s| s.busy)>
                "Subscribe"
            </button>
            {move || {
                state
                    .with(|s| s.status.clone())
                    .map(|status| {
                        view! {
                            <p class=format!("newsletter__status newsletter__status--{}", status.css_modifier())>
                                {status.message().to_owned()}
                            </p>
                        }
                    })
            }}
        </form>
    }
}
