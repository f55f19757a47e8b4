//! "Copy link" feedback timer state.
//!
//! Each copy bumps a generation counter; the expiry timer carries the
//! generation it was started for, so a timer left over from an earlier copy
//! cannot cut a newer "Copied!" window short.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

/// How long the "Copied!" label stays up.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyState {
    pub copied: bool,
    generation: u64,
}

impl CopyState {
    /// Show the feedback and return the generation to pass to `expire`.
    pub fn mark_copied(&mut self) -> u64 {
        self.generation += 1;
        self.copied = true;
        self.generation
    }

    /// Outcome of a clipboard write. Only a successful copy shows the
    /// feedback; returns the generation to expire, if any.
    pub fn record_copy(&mut self, ok: bool) -> Option<u64> {
        ok.then(|| self.mark_copied())
    }

    /// Hide the feedback if no newer copy happened since `generation`.
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.copied = false;
        }
    }

    pub fn label(self) -> &'static str {
        if self.copied { "Copied!" } else { "Copy link" }
    }
}
