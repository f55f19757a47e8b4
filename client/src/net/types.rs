//! Wire types for the static data layer and the mailing-list integration.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Optional lead image reference, rendered as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedImage {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// One entry of the post index produced by the static-site data layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default, alias = "readingTime")]
    pub reading_time_minutes: u32,
    #[serde(default, alias = "featuredImage")]
    pub featured_image: Option<FeaturedImage>,
}

/// A full post: summary fields plus the pre-rendered HTML body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(flatten)]
    pub summary: PostSummary,
    pub html: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubscribeRequest {
    pub email: String,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscribeStatus {
    Success,
    Error,
    Duplicate,
}

/// Mailing-list reply. Accepts both `{status, message}` and the
/// `{result, msg}` shape some list providers return.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeResponse {
    #[serde(alias = "result")]
    pub status: SubscribeStatus,
    #[serde(default, alias = "msg")]
    pub message: String,
}

impl SubscribeResponse {
    /// Providers that lack a `duplicate` status report it as an error whose
    /// message says the address is already subscribed.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.status == SubscribeStatus::Error && self.message.to_ascii_lowercase().contains("already subscribed") {
            self.status = SubscribeStatus::Duplicate;
        }
        self
    }
}

/// Mailing-list call failure. Shown inline in the form; never retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntegrationError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("subscribe failed: status {0}")]
    Status(u16),

    #[error("unexpected response: {0}")]
    Parse(String),

    #[error("not available on server")]
    NotAvailable,
}
