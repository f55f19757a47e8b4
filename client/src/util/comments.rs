//! Third-party comment widget embedding.
//!
//! The widget is configured by `(namespace, identifier, title)` and loaded
//! from `https://{namespace}.disqus.com/embed.js`. Beyond mounting, the page
//! does not talk to it.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

/// Element id the widget renders into.
pub const THREAD_ELEMENT_ID: &str = "disqus_thread";

#[cfg(feature = "hydrate")]
const CONFIG_SCRIPT_ID: &str = "comments-config";
#[cfg(feature = "hydrate")]
const EMBED_SCRIPT_ID: &str = "dsq-embed-scr";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentConfigError {
    #[error("comment namespace must be a non-empty shortname, got {0:?}")]
    InvalidNamespace(String),

    #[error("comment thread identifier must not be empty")]
    EmptyIdentifier,
}

/// One post's comment thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentThread {
    pub namespace: String,
    pub identifier: String,
    pub title: String,
    pub url: Option<String>,
}

impl CommentThread {
    /// # Errors
    ///
    /// Returns an error if the namespace is not a shortname (ASCII letters,
    /// digits and `-`) or the identifier is blank.
    pub fn new(namespace: &str, identifier: &str, title: &str) -> Result<Self, CommentConfigError> {
        let namespace = namespace.trim();
        if namespace.is_empty() || !namespace.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(CommentConfigError::InvalidNamespace(namespace.to_owned()));
        }
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(CommentConfigError::EmptyIdentifier);
        }
        Ok(Self {
            namespace: namespace.to_owned(),
            identifier: identifier.to_owned(),
            title: title.to_owned(),
            url: None,
        })
    }

    #[must_use]
    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    pub fn embed_src(&self) -> String {
        format!("https://{}.disqus.com/embed.js", self.namespace)
    }

    /// Inline script that publishes the page config and, when the widget is
    /// already loaded (client-side navigation), resets it to this thread.
    pub fn config_script(&self) -> String {
        let quote = |s: &str| serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_owned());
        let url_line = self
            .url
            .as_deref()
            .map(|u| format!("this.page.url = {}; ", quote(u)))
            .unwrap_or_default();
        format!(
            "var disqus_config = function () {{ {url_line}this.page.identifier = {}; this.page.title = {}; }};\n\
             if (window.DISQUS) {{ window.DISQUS.reset({{ reload: true, config: disqus_config }}); }}",
            quote(&self.identifier),
            quote(&self.title),
        )
    }
}

/// Publish the thread config and load the widget script once per page
/// session. Calling it again republishes the config, which reloads an
/// already loaded widget (new thread or new theme). No-op outside the browser.
pub fn mount(thread: &CommentThread) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = doc.body() else {
            return;
        };
        if let Some(old) = doc.get_element_by_id(CONFIG_SCRIPT_ID) {
            old.remove();
        }
        let Ok(config) = doc.create_element("script") else {
            return;
        };
        config.set_id(CONFIG_SCRIPT_ID);
        config.set_text_content(Some(&thread.config_script()));
        if body.append_child(&config).is_err() {
            log::warn!("comment config script not attached");
            return;
        }

        if doc.get_element_by_id(EMBED_SCRIPT_ID).is_some() {
            return;
        }
        let Ok(embed) = doc.create_element("script") else {
            return;
        };
        embed.set_id(EMBED_SCRIPT_ID);
        let _ = embed.set_attribute("src", &thread.embed_src());
        let _ = embed.set_attribute("async", "");
        if body.append_child(&embed).is_err() {
            log::warn!("comment embed script not attached");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = thread;
    }
}
