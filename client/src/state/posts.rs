//! Post listing state fed by the static data layer.
//!
//! Posts are opaque content: nothing here reprocesses titles or bodies, it
//! only orders the index and derives display strings.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use chrono::NaiveDate;

use crate::net::types::PostSummary;

/// Post index plus load status.
#[derive(Clone, Debug, Default)]
pub struct PostsState {
    pub posts: Vec<PostSummary>,
    pub loading: bool,
    pub loaded: bool,
}

impl PostsState {
    /// Replace the index, newest first. Same-day posts order by title.
    pub fn set_posts(&mut self, mut posts: Vec<PostSummary>) {
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.title.cmp(&b.title)));
        self.posts = posts;
        self.loading = false;
        self.loaded = true;
    }

    pub fn find(&self, slug: &str) -> Option<&PostSummary> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Neighbours of `slug` in listing order: `(newer, older)`.
    pub fn adjacent(&self, slug: &str) -> (Option<&PostSummary>, Option<&PostSummary>) {
        let Some(idx) = self.posts.iter().position(|p| p.slug == slug) else {
            return (None, None);
        };
        let newer = idx.checked_sub(1).and_then(|i| self.posts.get(i));
        (newer, self.posts.get(idx + 1))
    }
}

/// Icons drawn per reading-time unit, heavier as the post gets longer. Posts
/// past the end of the list keep using the last icon.
const READING_TIME_ICONS: [&str; 6] = ["☕", "☕", "🍪", "🍕", "🍔", "🍔"];

/// Minutes of reading per icon.
const MINUTES_PER_ICON: u32 = 6;

/// One icon per six minutes (rounded, at least one).
pub fn reading_time_icons(minutes: u32) -> String {
    let count = ((minutes + MINUTES_PER_ICON / 2) / MINUTES_PER_ICON).max(1) as usize;
    (0..count)
        .map(|i| READING_TIME_ICONS[i.min(READING_TIME_ICONS.len() - 1)])
        .collect()
}

/// Icons plus "N min read", never below one minute.
pub fn reading_time_label(minutes: u32) -> String {
    format!("{} {} min read", reading_time_icons(minutes), minutes.max(1))
}

/// e.g. "March 4, 2021".
pub fn display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
