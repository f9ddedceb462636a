//! Per-mount cancellation token for in-flight requests.
//!
//! A page creates one scope when it mounts and cancels it from `on_cleanup`.
//! Async handlers check [`AbortScope::is_live`] after every `await` and drop
//! the response when the page is gone.

#[cfg(test)]
#[path = "abort_scope_test.rs"]
mod abort_scope_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct AbortScope {
    alive: Arc<AtomicBool>,
}

impl Default for AbortScope {
    fn default() -> Self {
        Self::new()
    }
}

impl AbortScope {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Create a scope that is cancelled when the current reactive owner is
    /// cleaned up (i.e. the component unmounts).
    #[must_use]
    pub fn for_component() -> Self {
        let scope = Self::new();
        let on_drop = scope.clone();
        leptos::prelude::on_cleanup(move || on_drop.cancel());
        scope
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Run `apply` only while the scope is live.
    pub fn apply<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_live() {
            apply();
            true
        } else {
            false
        }
    }
}
