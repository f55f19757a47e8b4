//! Client-side view state.
//!
//! DESIGN
//! ======
//! Plain data structs held in `RwSignal`s by pages and components. The theme
//! is not here: it lives in the `theme` controller so it can be applied before
//! the component tree exists.

pub mod copy;
pub mod newsletter;
pub mod posts;
