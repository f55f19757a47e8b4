//! Networking modules for content fetches and the mailing-list call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines their JSON shapes.

pub mod api;
pub mod types;
