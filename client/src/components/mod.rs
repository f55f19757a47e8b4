//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render blog chrome and widgets while reading shared state and
//! site config from Leptos context providers.

pub mod bio;
pub mod comments;
pub mod layout;
pub mod newsletter_form;
pub mod post_card;
pub mod share_buttons;
pub mod theme_toggle;
