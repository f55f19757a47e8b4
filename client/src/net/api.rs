//! HTTP helpers for the static data layer and the mailing list.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side: stubs returning `None`/`NotAvailable`, since the pre-render
//! receives its content from the static-site generator directly.
//!
//! ERROR HANDLING
//! ==============
//! Content fetches return `Option` so a missing index degrades to an empty
//! listing. The subscribe call returns `IntegrationError` for the form to show;
//! there is no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{IntegrationError, Post, PostSummary, SubscribeRequest, SubscribeResponse};

pub const POSTS_INDEX_PATH: &str = "/data/posts.json";

#[cfg(any(test, feature = "hydrate"))]
fn post_endpoint(slug: &str) -> String {
    format!("/data/posts/{}.json", crate::util::share::encode_component(slug))
}

/// Fetch the post index.
pub async fn fetch_posts() -> Option<Vec<PostSummary>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(POSTS_INDEX_PATH).send().await.ok()?;
        if !resp.ok() {
            log::warn!("post index request failed: {}", resp.status());
            return None;
        }
        resp.json::<Vec<PostSummary>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch one post with its rendered body.
pub async fn fetch_post(slug: &str) -> Option<Post> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&post_endpoint(slug)).send().await.ok()?;
        if !resp.ok() {
            log::warn!("post {slug} request failed: {}", resp.status());
            return None;
        }
        resp.json::<Post>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        None
    }
}

/// Subscribe `email` to the mailing list at `endpoint`.
///
/// # Errors
///
/// Returns an error if the request cannot be sent, the endpoint answers with a
/// non-OK status, or the body is not a subscribe response. A well-formed
/// `error`/`duplicate` reply is `Ok`; the caller renders its message.
pub async fn subscribe(endpoint: &str, request: &SubscribeRequest) -> Result<SubscribeResponse, IntegrationError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(request)
            .map_err(|e| IntegrationError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| IntegrationError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(IntegrationError::Status(resp.status()));
        }
        let body: SubscribeResponse = resp.json().await.map_err(|e| IntegrationError::Parse(e.to_string()))?;
        Ok(body.normalized())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, request);
        Err(IntegrationError::NotAvailable)
    }
}
