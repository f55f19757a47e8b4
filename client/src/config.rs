//! Site metadata and integration settings from the build environment.
//!
//! Values are captured at compile time with `option_env!` and passed through
//! unchanged; empty values count as unset. Missing integration settings turn
//! the matching feature off instead of failing the build.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TITLE: &str = "Notes";
pub const DEFAULT_DESCRIPTION: &str = "Personal blog.";
pub const DEFAULT_AUTHOR: &str = "Anonymous";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BLOG_SITE_URL {value:?}: {reason}")]
    InvalidSiteUrl { value: String, reason: String },
}

/// Footer link to one of the author's profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub author: String,
    pub author_summary: Option<String>,
    /// Absolute site origin without a trailing slash.
    pub site_url: String,
    pub twitter_handle: Option<String>,
    /// Comment-service shortname. `None` disables comments.
    pub comments_namespace: Option<String>,
    /// Mailing-list subscribe endpoint. `None` hides the newsletter form.
    pub newsletter_endpoint: Option<String>,
    pub social_links: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            author: DEFAULT_AUTHOR.to_owned(),
            author_summary: None,
            site_url: DEFAULT_SITE_URL.to_owned(),
            twitter_handle: None,
            comments_namespace: None,
            newsletter_endpoint: None,
            social_links: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// - `BLOG_TITLE`, `BLOG_DESCRIPTION`, `BLOG_AUTHOR`, `BLOG_AUTHOR_SUMMARY`
    /// - `BLOG_SITE_URL`: default `http://localhost:3000`
    /// - `BLOG_TWITTER`: handle, with or without a leading `@`
    /// - `BLOG_COMMENTS_NAMESPACE`: comment-service shortname
    /// - `BLOG_NEWSLETTER_ENDPOINT`: mailing-list subscribe URL
    /// - `BLOG_SOCIAL_LINKS`: footer links as `Label=url,Label=url`
    ///
    /// # Errors
    ///
    /// Returns an error if `BLOG_SITE_URL` is not an absolute URL.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "BLOG_TITLE" => option_env!("BLOG_TITLE"),
                "BLOG_DESCRIPTION" => option_env!("BLOG_DESCRIPTION"),
                "BLOG_AUTHOR" => option_env!("BLOG_AUTHOR"),
                "BLOG_AUTHOR_SUMMARY" => option_env!("BLOG_AUTHOR_SUMMARY"),
                "BLOG_SITE_URL" => option_env!("BLOG_SITE_URL"),
                "BLOG_TWITTER" => option_env!("BLOG_TWITTER"),
                "BLOG_COMMENTS_NAMESPACE" => option_env!("BLOG_COMMENTS_NAMESPACE"),
                "BLOG_NEWSLETTER_ENDPOINT" => option_env!("BLOG_NEWSLETTER_ENDPOINT"),
                "BLOG_SOCIAL_LINKS" => option_env!("BLOG_SOCIAL_LINKS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `BLOG_SITE_URL` is not an absolute URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let site_url = get("BLOG_SITE_URL").unwrap_or(defaults.site_url);
        let parsed = url::Url::parse(&site_url)
            .map_err(|e| ConfigError::InvalidSiteUrl { value: site_url.clone(), reason: e.to_string() })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidSiteUrl { value: site_url, reason: "not a base URL".to_owned() });
        }

        Ok(Self {
            title: get("BLOG_TITLE").unwrap_or(defaults.title),
            description: get("BLOG_DESCRIPTION").unwrap_or(defaults.description),
            author: get("BLOG_AUTHOR").unwrap_or(defaults.author),
            author_summary: get("BLOG_AUTHOR_SUMMARY"),
            site_url: site_url.trim_end_matches('/').to_owned(),
            twitter_handle: get("BLOG_TWITTER").map(|h| h.trim_start_matches('@').to_owned()),
            comments_namespace: get("BLOG_COMMENTS_NAMESPACE"),
            newsletter_endpoint: get("BLOG_NEWSLETTER_ENDPOINT"),
            social_links: get("BLOG_SOCIAL_LINKS").map(|raw| parse_social_links(&raw)).unwrap_or_default(),
        })
    }

    pub fn comments_enabled(&self) -> bool {
        self.comments_namespace.is_some()
    }

    pub fn newsletter_enabled(&self) -> bool {
        self.newsletter_endpoint.is_some()
    }
}

/// Parse `Label=url,Label=url`. Entries without a label or with a URL that
/// does not parse are skipped with a warning.
fn parse_social_links(raw: &str) -> Vec<SocialLink> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let parsed = entry.split_once('=').and_then(|(label, url)| {
                let (label, url) = (label.trim(), url.trim());
                (!label.is_empty() && url::Url::parse(url).is_ok())
                    .then(|| SocialLink { label: label.to_owned(), url: url.to_owned() })
            });
            if parsed.is_none() {
                log::warn!("ignoring malformed BLOG_SOCIAL_LINKS entry {entry:?}");
            }
            parsed
        })
        .collect()
}
