//! crates/chirpy_core/src/hits.rs
//!
//! Counter of requests served from the static file tree.

use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicI64,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a snapshot of the current count.
    pub fn load(&self) -> i64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}
