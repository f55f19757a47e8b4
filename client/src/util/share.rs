//! Share-link construction for post pages.
//!
//! Every URL is built from the post permalink and title. Query values are
//! percent-encoded with spaces as `%20` so the same encoding works for web
//! share intents and `mailto:` links.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use url::Url;
use url::form_urlencoded::byte_serialize;

/// Share targets offered under each post.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareTarget {
    Twitter,
    Facebook,
    LinkedIn,
    Reddit,
    Email,
}

impl ShareTarget {
    pub const ALL: [Self; 5] = [Self::Twitter, Self::Facebook, Self::LinkedIn, Self::Reddit, Self::Email];

    pub fn label(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
            Self::Reddit => "Reddit",
            Self::Email => "Email",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::LinkedIn => "linkedin",
            Self::Reddit => "reddit",
            Self::Email => "email",
        }
    }
}

/// Absolute permalink for a post: `{site_url}/posts/{slug}`.
///
/// Returns `None` if `site_url` is not a base URL.
pub fn post_permalink(site_url: &str, slug: &str) -> Option<String> {
    let base = Url::parse(&format!("{}/", site_url.trim_end_matches('/'))).ok()?;
    if base.cannot_be_a_base() {
        return None;
    }
    let slug = slug.trim_matches('/');
    base.join(&format!("posts/{slug}")).ok().map(String::from)
}

/// Percent-encode a query component.
pub fn encode_component(raw: &str) -> String {
    byte_serialize(raw.as_bytes()).collect::<String>().replace('+', "%20")
}

/// Share URL for `target`. `via` is the author's twitter handle, if any.
pub fn share_url(target: ShareTarget, permalink: &str, title: &str, via: Option<&str>) -> String {
    let url = encode_component(permalink);
    let text = encode_component(title);
    match target {
        ShareTarget::Twitter => {
            let mut out = format!("https://twitter.com/intent/tweet?url={url}&text={text}");
            if let Some(handle) = via.map(|h| h.trim_start_matches('@')).filter(|h| !h.is_empty()) {
                out.push_str("&via=");
                out.push_str(&encode_component(handle));
            }
            out
        }
        ShareTarget::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
        ShareTarget::LinkedIn => format!("https://www.linkedin.com/sharing/share-offsite/?url={url}"),
        ShareTarget::Reddit => format!("https://www.reddit.com/submit?url={url}&title={text}"),
        ShareTarget::Email => format!("mailto:?subject={text}&body={url}"),
    }
}
