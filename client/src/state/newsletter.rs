//! Newsletter form state.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures and integration errors both land in `status` as text
//! for the form to render. Nothing is retried; the form stays editable so the
//! reader can resubmit.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use crate::net::types::{IntegrationError, SubscribeRequest, SubscribeResponse, SubscribeStatus};

/// Outcome line shown under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Pending,
    Success(String),
    Duplicate(String),
    Error(String),
}

impl FormStatus {
    pub fn message(&self) -> &str {
        match self {
            Self::Pending => "Subscribing...",
            Self::Success(msg) | Self::Duplicate(msg) | Self::Error(msg) => msg,
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success(_) => "success",
            Self::Duplicate(_) => "duplicate",
            Self::Error(_) => "error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterState {
    pub email: String,
    pub name: String,
    pub busy: bool,
    pub status: Option<FormStatus>,
}

impl NewsletterState {
    /// Validate the fields and enter the busy state. Returns the request to
    /// send, or `None` if busy or invalid (with `status` explaining why).
    pub fn begin_submit(&mut self) -> Option<SubscribeRequest> {
        if self.busy {
            return None;
        }
        let email = self.email.trim();
        if !is_plausible_email(email) {
            self.status = Some(FormStatus::Error("Please enter a valid email address.".to_owned()));
            return None;
        }
        let name = self.name.trim();
        if name.is_empty() {
            self.status = Some(FormStatus::Error("Please enter your name.".to_owned()));
            return None;
        }
        let request = SubscribeRequest { email: email.to_owned(), name: name.to_owned() };
        self.busy = true;
        self.status = Some(FormStatus::Pending);
        Some(request)
    }

    /// Record the integration result. Success clears the fields.
    pub fn finish(&mut self, result: Result<SubscribeResponse, IntegrationError>) {
        self.busy = false;
        let status = match result {
            Ok(resp) => match resp.status {
                SubscribeStatus::Success => {
                    self.email.clear();
                    self.name.clear();
                    FormStatus::Success(or_default(resp.message, "Thanks for subscribing!"))
                }
                SubscribeStatus::Duplicate => {
                    FormStatus::Duplicate(or_default(resp.message, "You're already subscribed."))
                }
                SubscribeStatus::Error => FormStatus::Error(or_default(resp.message, "Subscription failed.")),
            },
            Err(e) => {
                log::warn!("newsletter subscribe failed: {e}");
                FormStatus::Error(format!("Subscription failed: {e}"))
            }
        };
        self.status = Some(status);
    }
}

fn or_default(message: String, fallback: &str) -> String {
    if message.trim().is_empty() { fallback.to_owned() } else { message }
}

/// Cheap shape check: one `@`, non-empty local part, dotted domain.
pub fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}
